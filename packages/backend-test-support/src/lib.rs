//! Test support utilities for the game archive.
//!
//! Shared between the backend's unit tests and its integration tests:
//! idempotent logging initialization and assertions for the error body
//! contract.

pub mod error_body;
pub mod logging;
