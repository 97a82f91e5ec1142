//! Deck read model and its assembly from the deck queries.

use serde::Serialize;

use crate::domain::cards::Card;

/// Newest metadata row stored for a deck key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckInfoRow {
    pub name: String,
    pub white_count: i32,
    pub black_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhiteCardRow {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackCardRow {
    pub text: String,
    pub draw: i16,
    pub pick: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deck {
    pub name: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub white_count: i32,
    pub black_count: i32,
    pub white_cards: Vec<Card>,
    pub black_cards: Vec<Card>,
}

/// Build a deck for the public code `id`.
///
/// Card lists keep the query order and every card is watermarked with `id`.
pub fn assemble_deck(
    id: &str,
    info: DeckInfoRow,
    white_rows: Vec<WhiteCardRow>,
    black_rows: Vec<BlackCardRow>,
) -> Deck {
    let white_cards = white_rows
        .into_iter()
        .map(|row| Card::white(row.text, id))
        .collect();
    let black_cards = black_rows
        .into_iter()
        .map(|row| Card::black(row.text, id, row.draw, row.pick))
        .collect();

    Deck {
        name: info.name,
        id: id.to_string(),
        white_count: info.white_count,
        black_count: info.black_count,
        white_cards,
        black_cards,
    }
}
