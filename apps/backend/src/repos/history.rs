//! Read-only queries over the game history store.
//!
//! One method per query the archive issues. Implementations return rows in
//! the order the views rely on: played cards by session then slot index,
//! listings by timestamp descending. Errors are the raw data-access error;
//! services attach the identifier and stage.

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::domain::{
    BlackCardRow, DeckInfoRow, PlayedCardRow, RoundInfoRow, RoundSummaryRow, SessionBasics,
    SessionInfoRow, WhiteCardRow,
};

#[async_trait]
pub trait HistoryRepo: Send + Sync {
    /// Newest metadata row for an internal deck key.
    async fn deck_info(&self, deck_key: i64) -> Result<Option<DeckInfoRow>, DbErr>;

    async fn deck_white_cards(&self, watermark: &str) -> Result<Vec<WhiteCardRow>, DbErr>;

    async fn deck_black_cards(&self, watermark: &str) -> Result<Vec<BlackCardRow>, DbErr>;

    async fn round_info(&self, round_id: &str) -> Result<Option<RoundInfoRow>, DbErr>;

    /// Played white cards ordered by session, then slot index ascending.
    async fn round_plays(&self, round_id: &str) -> Result<Vec<PlayedCardRow>, DbErr>;

    /// Rounds of a game, newest first.
    async fn game_rounds(&self, game_id: &str) -> Result<Vec<RoundSummaryRow>, DbErr>;

    /// Most recent login record for a session id.
    async fn session_info(&self, session_id: &str) -> Result<Option<SessionInfoRow>, DbErr>;

    /// Rounds the session submitted cards in, newest first.
    async fn session_played_rounds(&self, session_id: &str)
        -> Result<Vec<RoundSummaryRow>, DbErr>;

    /// Rounds the session judged, newest first.
    async fn session_judged_rounds(&self, session_id: &str)
        -> Result<Vec<RoundSummaryRow>, DbErr>;

    /// Sessions of a persistent user id, newest login first.
    async fn user_sessions(&self, persistent_id: &str) -> Result<Vec<SessionBasics>, DbErr>;

    /// Cheap connectivity check used by the health endpoint.
    async fn ping(&self) -> Result<(), DbErr>;
}
