use std::sync::Arc;

use crate::domain::UserMeta;
use crate::errors::domain::{DomainError, QueryStage};
use crate::repos::HistoryRepo;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn HistoryRepo>,
}

impl UserService {
    pub fn new(repo: Arc<dyn HistoryRepo>) -> Self {
        Self { repo }
    }

    /// Sessions of a persistent user id, newest login first.
    pub async fn load_user(&self, persistent_id: &str) -> Result<UserMeta, DomainError> {
        let sessions = self
            .repo
            .user_sessions(persistent_id)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::UserSessions, persistent_id, e))?;

        Ok(UserMeta {
            persistent_id: persistent_id.to_string(),
            sessions,
        })
    }
}
