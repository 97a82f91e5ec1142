//! Error codes for the archive API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

use crate::errors::domain::NotFoundKind;

/// Centralized error codes. Each variant maps to a canonical
/// SCREAMING_SNAKE_CASE string used in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Deck code is not a 5-character base-36 string
    InvalidDeckId,

    // Resource Not Found
    /// Deck not found
    DeckNotFound,
    /// Round not found
    RoundNotFound,
    /// No route or record matched
    NotFound,

    // System Errors
    /// Query or scan failure in the data-access layer
    DbError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
    /// Deck export could not be produced
    ExportFailed,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDeckId => "INVALID_DECK_ID",
            Self::DeckNotFound => "DECK_NOT_FOUND",
            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::DbError => "DB_ERROR",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::ExportFailed => "EXPORT_FAILED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NotFoundKind> for ErrorCode {
    fn from(kind: NotFoundKind) -> Self {
        match kind {
            NotFoundKind::Deck => Self::DeckNotFound,
            NotFoundKind::Round => Self::RoundNotFound,
        }
    }
}
