//! Row records for the history_sea adapter.

use sea_orm::FromQueryResult;

use crate::domain::{
    BlackCardFields, BlackCardRow, Card, DeckInfoRow, PlayedCardRow, RoundInfoRow,
    RoundSummaryRow, SessionBasics, SessionInfoRow, WhiteCardRow,
};

#[derive(Debug, FromQueryResult)]
pub struct DeckInfoRecord {
    pub name: String,
    pub white_count: i32,
    pub black_count: i32,
}

#[derive(Debug, FromQueryResult)]
pub struct WhiteCardRecord {
    pub text: String,
}

#[derive(Debug, FromQueryResult)]
pub struct BlackCardRecord {
    pub text: String,
    pub draw: i16,
    pub pick: i16,
}

#[derive(Debug, FromQueryResult)]
pub struct RoundInfoRecord {
    pub text: String,
    pub watermark: String,
    pub pick: i16,
    pub draw: i16,
    pub timestamp: i64,
    pub game_id: Option<String>,
}

#[derive(Debug, FromQueryResult)]
pub struct PlayedCardRecord {
    pub white_card_index: i32,
    pub text: String,
    pub watermark: String,
    pub winner: bool,
}

#[derive(Debug, FromQueryResult)]
pub struct RoundSummaryRecord {
    pub text: String,
    pub watermark: String,
    pub pick: i16,
    pub draw: i16,
    pub round_id: String,
    pub timestamp: i64,
}

#[derive(Debug, FromQueryResult)]
pub struct SessionInfoRecord {
    pub timestamp: i64,
    pub persistent_id: String,
}

#[derive(Debug, FromQueryResult)]
pub struct SessionBasicsRecord {
    pub session_id: String,
    pub timestamp: i64,
}

// Conversions between query records and domain rows

impl From<DeckInfoRecord> for DeckInfoRow {
    fn from(r: DeckInfoRecord) -> Self {
        Self {
            name: r.name,
            white_count: r.white_count,
            black_count: r.black_count,
        }
    }
}

impl From<WhiteCardRecord> for WhiteCardRow {
    fn from(r: WhiteCardRecord) -> Self {
        Self { text: r.text }
    }
}

impl From<BlackCardRecord> for BlackCardRow {
    fn from(r: BlackCardRecord) -> Self {
        Self {
            text: r.text,
            draw: r.draw,
            pick: r.pick,
        }
    }
}

impl From<RoundInfoRecord> for RoundInfoRow {
    fn from(r: RoundInfoRecord) -> Self {
        Self {
            black_card: BlackCardFields {
                text: r.text,
                watermark: r.watermark,
                draw: r.draw,
                pick: r.pick,
            },
            timestamp: r.timestamp,
            game_id: r.game_id,
        }
    }
}

impl From<PlayedCardRecord> for PlayedCardRow {
    fn from(r: PlayedCardRecord) -> Self {
        PlayedCardRow::new(
            r.white_card_index,
            Card::white(r.text, r.watermark),
            r.winner,
        )
    }
}

impl From<RoundSummaryRecord> for RoundSummaryRow {
    fn from(r: RoundSummaryRecord) -> Self {
        Self {
            black_card: BlackCardFields {
                text: r.text,
                watermark: r.watermark,
                draw: r.draw,
                pick: r.pick,
            },
            round_id: r.round_id,
            timestamp: r.timestamp,
        }
    }
}

impl From<SessionInfoRecord> for SessionInfoRow {
    fn from(r: SessionInfoRecord) -> Self {
        Self {
            log_in_timestamp: r.timestamp,
            persistent_id: r.persistent_id,
        }
    }
}

impl From<SessionBasicsRecord> for SessionBasics {
    fn from(r: SessionBasicsRecord) -> Self {
        Self {
            session_id: r.session_id,
            log_in_timestamp: r.timestamp,
        }
    }
}
