//! Card read models as stored by the gameplay engine.

use serde::Serialize;

/// Colour-specific card metadata.
///
/// Serialises with the `Color` tag the archive has always exposed; black
/// cards carry their draw/pick counts, omitted when zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "Color", rename_all = "lowercase")]
pub enum CardMeta {
    White,
    Black {
        #[serde(rename = "Draw", skip_serializing_if = "is_zero")]
        draw: i16,
        #[serde(rename = "Pick", skip_serializing_if = "is_zero")]
        pick: i16,
    },
}

fn is_zero(n: &i16) -> bool {
    *n == 0
}

impl CardMeta {
    pub fn is_black(&self) -> bool {
        matches!(self, CardMeta::Black { .. })
    }
}

/// A single card. `watermark` is the identifier of the deck it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Card {
    pub text: String,
    pub watermark: String,
    pub meta: CardMeta,
}

impl Card {
    pub fn white(text: impl Into<String>, watermark: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            watermark: watermark.into(),
            meta: CardMeta::White,
        }
    }

    pub fn black(
        text: impl Into<String>,
        watermark: impl Into<String>,
        draw: i16,
        pick: i16,
    ) -> Self {
        Self {
            text: text.into(),
            watermark: watermark.into(),
            meta: CardMeta::Black { draw, pick },
        }
    }
}

/// Black card columns as they come back from every round-bearing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackCardFields {
    pub text: String,
    pub watermark: String,
    pub draw: i16,
    pub pick: i16,
}

impl From<BlackCardFields> for Card {
    fn from(f: BlackCardFields) -> Self {
        Card::black(f.text, f.watermark, f.draw, f.pick)
    }
}

/// The white cards one participant submitted for a round, in slot order.
pub type Play = Vec<Card>;
