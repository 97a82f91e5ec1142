//! Round listings shared by the game, session and user views.

use serde::Serialize;

use crate::domain::cards::{BlackCardFields, Card};

/// One listing row: the round's black card, its id and completion time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummaryRow {
    pub black_card: BlackCardFields,
    pub round_id: String,
    /// Seconds since the Unix epoch, UTC.
    pub timestamp: i64,
}

/// Lightweight projection of a round without its plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoundSummary {
    pub round_id: String,
    pub timestamp: i64,
    pub black_card: Card,
}

impl From<RoundSummaryRow> for RoundSummary {
    fn from(row: RoundSummaryRow) -> Self {
        Self {
            round_id: row.round_id,
            timestamp: row.timestamp,
            black_card: row.black_card.into(),
        }
    }
}

/// Map listing rows to summaries one-to-one, keeping the source order.
pub fn assemble_round_summaries<I>(rows: I) -> Vec<RoundSummary>
where
    I: IntoIterator<Item = RoundSummaryRow>,
{
    rows.into_iter().map(RoundSummary::from).collect()
}
