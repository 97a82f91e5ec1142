use std::sync::Arc;

use tracing::debug;

use crate::domain::{assemble_round_summaries, SessionMeta};
use crate::errors::domain::{DomainError, QueryStage};
use crate::repos::HistoryRepo;

#[derive(Clone)]
pub struct SessionService {
    repo: Arc<dyn HistoryRepo>,
}

impl SessionService {
    pub fn new(repo: Arc<dyn HistoryRepo>) -> Self {
        Self { repo }
    }

    /// Session login info plus the rounds it played and judged.
    ///
    /// An unknown session id is reported as an internal query failure, not
    /// as not found; clients of the archive depend on the 500.
    pub async fn load_session(&self, session_id: &str) -> Result<SessionMeta, DomainError> {
        let info = self
            .repo
            .session_info(session_id)
            .await
            .map_err(|e| session_error(session_id, e))?
            .ok_or_else(|| session_error(session_id, "ID not found"))?;

        let played = self
            .repo
            .session_played_rounds(session_id)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::SessionPlayedRounds, session_id, e))?;

        let judged = self
            .repo
            .session_judged_rounds(session_id)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::SessionJudgedRounds, session_id, e))?;

        debug!(
            session_id = %session_id,
            played = played.len(),
            judged = judged.len(),
            "Loaded session history"
        );
        Ok(SessionMeta {
            session_id: session_id.to_string(),
            log_in_timestamp: info.log_in_timestamp,
            persistent_id: info.persistent_id,
            played_rounds: assemble_round_summaries(played),
            judged_rounds: assemble_round_summaries(judged),
        })
    }
}

fn session_error(session_id: &str, cause: impl std::fmt::Display) -> DomainError {
    DomainError::internal(
        QueryStage::SessionInfo,
        format!("Unable to query for session with id {session_id}: {cause}"),
    )
}
