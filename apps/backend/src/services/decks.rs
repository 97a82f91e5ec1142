use std::sync::Arc;

use tracing::debug;

use crate::domain::{assemble_deck, decode_deck_code, Deck};
use crate::errors::domain::{DomainError, NotFoundKind, QueryStage};
use crate::repos::HistoryRepo;

#[derive(Clone)]
pub struct DeckService {
    repo: Arc<dyn HistoryRepo>,
}

impl DeckService {
    pub fn new(repo: Arc<dyn HistoryRepo>) -> Self {
        Self { repo }
    }

    /// Load a Cardcast deck and all of its cards by public code.
    ///
    /// The code is validated before any query is issued. A failure at any
    /// stage discards whatever was already loaded.
    pub async fn load_deck(&self, code: &str) -> Result<Deck, DomainError> {
        let key = decode_deck_code(code)?;
        debug!(deck_code = %code, deck_key = key, "Loading deck");

        let info = self
            .repo
            .deck_info(key)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::DeckInfo, code, e))?
            .ok_or_else(|| DomainError::not_found(NotFoundKind::Deck, "cardcast deck not found"))?;

        let whites = self
            .repo
            .deck_white_cards(code)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::DeckWhiteCards, code, e))?;

        let blacks = self
            .repo
            .deck_black_cards(code)
            .await
            .map_err(|e| DomainError::query_failed(QueryStage::DeckBlackCards, code, e))?;

        Ok(assemble_deck(code, info, whites, blacks))
    }
}
