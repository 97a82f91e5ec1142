//! Process configuration read from environment variables.

pub mod db;
pub mod server;

pub use db::DbConfig;
pub use server::ServerConfig;
