//! Request-scoped views for rounds, games, sessions and users.

use serde::Serialize;

use crate::domain::cards::{BlackCardFields, Card, Play};
use crate::domain::history::RoundSummary;
use crate::domain::plays::RoundPlays;

/// Round header row: the black card, completion time and owning game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInfoRow {
    pub black_card: BlackCardFields,
    pub timestamp: i64,
    pub game_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Round {
    pub black_card: Card,
    pub winning_play: Option<Play>,
    pub other_plays: Vec<Play>,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
}

impl Round {
    pub fn new(info: RoundInfoRow, plays: RoundPlays) -> Self {
        Self {
            black_card: info.black_card.into(),
            winning_play: plays.winning_play,
            other_plays: plays.other_plays,
            timestamp: info.timestamp,
            game_id: info.game_id,
        }
    }
}

/// Rounds of one game, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GameRounds {
    #[serde(skip)]
    pub game_id: String,
    pub rounds: Vec<RoundSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfoRow {
    pub log_in_timestamp: i64,
    pub persistent_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionMeta {
    #[serde(skip)]
    pub session_id: String,
    pub log_in_timestamp: i64,
    pub persistent_id: String,
    pub played_rounds: Vec<RoundSummary>,
    pub judged_rounds: Vec<RoundSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SessionBasics {
    pub session_id: String,
    pub log_in_timestamp: i64,
}

impl SessionBasics {
    /// Session ids are `<server>_<rest>`; this is the `<server>` segment.
    pub fn server_id(&self) -> &str {
        self.session_id
            .split('_')
            .next()
            .unwrap_or(self.session_id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserMeta {
    #[serde(skip)]
    pub persistent_id: String,
    pub sessions: Vec<SessionBasics>,
}
