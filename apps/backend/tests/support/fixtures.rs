//! Canned history data used across tests.

use game_archive::domain::{
    BlackCardFields, BlackCardRow, Card, DeckInfoRow, PlayedCardRow, RoundInfoRow,
    RoundSummaryRow, SessionBasics, SessionInfoRow, WhiteCardRow,
};

use crate::support::InMemoryHistoryRepo;

/// Public code of the sample deck.
pub const DECK_CODE: &str = "CAH01";
/// A well-formed code with no deck behind it.
pub const MISSING_DECK_CODE: &str = "zzzzz";
pub const ROUND_ID: &str = "round-1";
pub const EMPTY_ROUND_ID: &str = "round-empty";
pub const GAME_ID: &str = "game-7";
pub const SESSION_ID: &str = "pyx1_sess42";
pub const PERSISTENT_ID: &str = "user-abc";

pub fn black(text: &str, pick: i16) -> BlackCardFields {
    BlackCardFields {
        text: text.to_string(),
        watermark: "PYX".to_string(),
        draw: 0,
        pick,
    }
}

pub fn summary(round_id: &str, text: &str, timestamp: i64) -> RoundSummaryRow {
    RoundSummaryRow {
        black_card: black(text, 1),
        round_id: round_id.to_string(),
        timestamp,
    }
}

pub fn played(slot: i32, text: &str, winner: bool) -> PlayedCardRow {
    PlayedCardRow::new(slot, Card::white(text, "PYX"), winner)
}

/// Internal key of [`DECK_CODE`].
pub fn deck_key() -> i64 {
    -i64::from_str_radix(DECK_CODE, 36).unwrap_or_default()
}

/// A repository holding one deck, two rounds, a game, a session and a user.
pub fn sample_repo() -> InMemoryHistoryRepo {
    InMemoryHistoryRepo::new()
        .with_deck(
            deck_key(),
            DECK_CODE,
            DeckInfoRow {
                name: "Sample <Deck>".to_string(),
                white_count: 2,
                black_count: 1,
            },
            vec![
                WhiteCardRow {
                    text: "Flying sex snakes.".to_string(),
                },
                WhiteCardRow {
                    text: "A windmill, full of corpses".to_string(),
                },
            ],
            vec![BlackCardRow {
                text: "What's that smell?".to_string(),
                draw: 0,
                pick: 1,
            }],
        )
        .with_round(
            ROUND_ID,
            RoundInfoRow {
                black_card: black("____ + ____ = ____.", 2),
                timestamp: 1_518_000_000,
                game_id: Some(GAME_ID.to_string()),
            },
            vec![
                played(0, "A", false),
                played(1, "B", false),
                played(0, "C", true),
                played(1, "D", true),
            ],
        )
        .with_round(
            EMPTY_ROUND_ID,
            RoundInfoRow {
                black_card: black("Nobody answered ____.", 1),
                timestamp: 1_518_000_100,
                game_id: None,
            },
            Vec::new(),
        )
        .with_game(
            GAME_ID,
            vec![
                summary("round-3", "Third", 300),
                summary("round-2", "Second", 200),
                summary(ROUND_ID, "First", 100),
            ],
        )
        .with_session(
            SESSION_ID,
            SessionInfoRow {
                log_in_timestamp: 1_517_999_000,
                persistent_id: PERSISTENT_ID.to_string(),
            },
            vec![summary("round-2", "Second", 200)],
            vec![summary("round-3", "Third", 300), summary(ROUND_ID, "First", 100)],
        )
        .with_user(
            PERSISTENT_ID,
            vec![
                SessionBasics {
                    session_id: SESSION_ID.to_string(),
                    log_in_timestamp: 1_517_999_000,
                },
                SessionBasics {
                    session_id: "pyx2_older".to_string(),
                    log_in_timestamp: 1_417_999_000,
                },
            ],
        )
}
