use std::sync::Arc;

use crate::repos::HistoryRepo;
use crate::services::{DeckService, GameService, RoundService, SessionService, UserService};

/// Application state shared by every worker: the history repository and
/// one view service per endpoint, all built once at startup.
#[derive(Clone)]
pub struct AppState {
    repo: Arc<dyn HistoryRepo>,
    pub decks: DeckService,
    pub rounds: RoundService,
    pub games: GameService,
    pub sessions: SessionService,
    pub users: UserService,
}

impl AppState {
    /// Create the state, handing the same repository to every service.
    pub fn new(repo: Arc<dyn HistoryRepo>) -> Self {
        Self {
            decks: DeckService::new(Arc::clone(&repo)),
            rounds: RoundService::new(Arc::clone(&repo)),
            games: GameService::new(Arc::clone(&repo)),
            sessions: SessionService::new(Arc::clone(&repo)),
            users: UserService::new(Arc::clone(&repo)),
            repo,
        }
    }

    pub fn repo(&self) -> &dyn HistoryRepo {
        self.repo.as_ref()
    }
}
