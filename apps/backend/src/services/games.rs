use std::sync::Arc;

use tracing::debug;

use crate::domain::{assemble_round_summaries, GameRounds};
use crate::errors::domain::{DomainError, QueryStage};
use crate::repos::HistoryRepo;

#[derive(Clone)]
pub struct GameService {
    repo: Arc<dyn HistoryRepo>,
}

impl GameService {
    pub fn new(repo: Arc<dyn HistoryRepo>) -> Self {
        Self { repo }
    }

    /// Round summaries of a game, newest first. An unknown game is an
    /// empty listing, not an error.
    pub async fn list_rounds(&self, game_id: &str) -> Result<GameRounds, DomainError> {
        let rows = self
            .repo
            .game_rounds(game_id)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::GameRounds, game_id, e))?;

        debug!(game_id = %game_id, rounds = rows.len(), "Listing game rounds");
        Ok(GameRounds {
            game_id: game_id.to_string(),
            rounds: assemble_round_summaries(rows),
        })
    }
}
