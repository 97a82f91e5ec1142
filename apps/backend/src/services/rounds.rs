use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{reconstruct_plays, Round};
use crate::errors::domain::{DomainError, NotFoundKind, QueryStage};
use crate::repos::HistoryRepo;

const ROUND_NOT_FOUND: &str =
    "That round cannot be found. If you just played it, wait a few seconds and try again.";

#[derive(Clone)]
pub struct RoundService {
    repo: Arc<dyn HistoryRepo>,
}

impl RoundService {
    pub fn new(repo: Arc<dyn HistoryRepo>) -> Self {
        Self { repo }
    }

    /// Load one round with its winning play and every other play.
    ///
    /// A round that exists but has no recorded plays comes back with no
    /// winner and an empty play list rather than as not found.
    pub async fn load_round(&self, round_id: &str) -> Result<Round, DomainError> {
        let info = self
            .repo
            .round_info(round_id)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::RoundInfo, round_id, e))?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Round, ROUND_NOT_FOUND))?;

        let rows = self
            .repo
            .round_plays(round_id)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::RoundPlays, round_id, e))?;

        let row_count = rows.len();
        let plays = reconstruct_plays(rows);
        if plays.replaced_winners > 0 {
            warn!(
                round_id = %round_id,
                replaced_winners = plays.replaced_winners,
                "Round has more than one winning play; keeping the last"
            );
        }
        debug!(
            round_id = %round_id,
            rows = row_count,
            plays = plays.play_count(),
            "Reconstructed round plays"
        );

        Ok(Round::new(info, plays))
    }
}
