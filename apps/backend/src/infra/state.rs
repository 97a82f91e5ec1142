use std::sync::Arc;

use crate::adapters::SeaHistoryRepo;
use crate::config::db::DbConfig;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::repos::HistoryRepo;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_config: Option<DbConfig>,
    repo: Option<Arc<dyn HistoryRepo>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_config: None,
            repo: None,
        }
    }

    /// Connect to Postgres with this configuration on `build`.
    pub fn with_db(mut self, config: DbConfig) -> Self {
        self.db_config = Some(config);
        self
    }

    /// Use an already constructed repository; takes precedence over `with_db`.
    pub fn with_repo(mut self, repo: Arc<dyn HistoryRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        if let Some(repo) = self.repo {
            return Ok(AppState::new(repo));
        }

        let config = self
            .db_config
            .ok_or_else(|| AppError::config("No history repository or database configured".to_string()))?;
        let conn = connect_db(&config).await?;
        Ok(AppState::new(Arc::new(SeaHistoryRepo::new(conn))))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
