//! Domain-level error type used across services and repositories.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through the `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Records that can be missing in domain terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Deck,
    Round,
}

/// The query a failed data-access call belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryStage {
    DeckInfo,
    DeckWhiteCards,
    DeckBlackCards,
    RoundInfo,
    RoundPlays,
    GameRounds,
    SessionInfo,
    SessionPlayedRounds,
    SessionJudgedRounds,
    UserSessions,
}

impl QueryStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeckInfo => "deck info",
            Self::DeckWhiteCards => "deck white cards",
            Self::DeckBlackCards => "deck black cards",
            Self::RoundInfo => "round info",
            Self::RoundPlays => "round plays",
            Self::GameRounds => "game rounds",
            Self::SessionInfo => "session info",
            Self::SessionPlayedRounds => "session played rounds",
            Self::SessionJudgedRounds => "session judged rounds",
            Self::UserSessions => "user sessions",
        }
    }
}

impl Display for QueryStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed identifier supplied by the caller
    InvalidFormat(String),
    /// No matching record
    NotFound(NotFoundKind, String),
    /// Query or scan failure from the data-access layer
    Internal(QueryStage, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidFormat(d) => f.write_str(d),
            DomainError::NotFound(_, d) => f.write_str(d),
            DomainError::Internal(_, d) => f.write_str(d),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_format(detail: impl Into<String>) -> Self {
        Self::InvalidFormat(detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn internal(stage: QueryStage, detail: impl Into<String>) -> Self {
        Self::Internal(stage, detail.into())
    }

    /// Wraps a data-access failure with the stage and identifier it hit.
    pub fn query_failed(stage: QueryStage, id: &str, source: impl Display) -> Self {
        Self::Internal(stage, format!("Unable to query {stage} for id {id}: {source}"))
    }
}
