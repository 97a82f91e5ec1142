//! Infrastructure layer - database connection and state construction.

pub mod db;
pub mod state;
