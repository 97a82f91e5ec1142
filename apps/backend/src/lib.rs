#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod render;
pub mod repos;
pub mod request_ctx;
pub mod routes;
pub mod services;
pub mod state;

// Re-exports for public API
pub use adapters::SeaHistoryRepo;
pub use config::{DbConfig, ServerConfig};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::ResponseFormat;
pub use infra::db::connect_db;
pub use middleware::{RequestContext, StructuredLogger};
pub use repos::HistoryRepo;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    archive_test_support::logging::init();
}
