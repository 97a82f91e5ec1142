//! Error handling for the archive.

pub mod domain;
pub mod error_code;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, NotFoundKind, QueryStage};
pub use error_code::ErrorCode;
