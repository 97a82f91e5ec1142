//! Domain layer: read models and the pure logic that builds them from rows.

pub mod cards;
pub mod codec;
pub mod deck;
pub mod history;
pub mod plays;
pub mod views;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_codec;
#[cfg(test)]
mod tests_history;
#[cfg(test)]
mod tests_plays;
#[cfg(test)]
mod tests_props_history;
#[cfg(test)]
mod tests_props_plays;

// Re-exports for ergonomics
pub use cards::{BlackCardFields, Card, CardMeta, Play};
pub use codec::decode_deck_code;
pub use deck::{assemble_deck, BlackCardRow, Deck, DeckInfoRow, WhiteCardRow};
pub use history::{assemble_round_summaries, RoundSummary, RoundSummaryRow};
pub use plays::{reconstruct_plays, PlayedCardRow, RoundPlays};
pub use views::{
    GameRounds, Round, RoundInfoRow, SessionBasics, SessionInfoRow, SessionMeta, UserMeta,
};
