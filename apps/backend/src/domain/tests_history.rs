use serde_json::json;

use crate::domain::{
    assemble_round_summaries, reconstruct_plays, BlackCardFields, Card, CardMeta, PlayedCardRow,
    Round, RoundInfoRow, RoundSummaryRow, SessionBasics,
};

fn summary_row(round_id: &str, timestamp: i64) -> RoundSummaryRow {
    RoundSummaryRow {
        black_card: BlackCardFields {
            text: format!("Prompt for {round_id}"),
            watermark: "PYX".to_string(),
            draw: 0,
            pick: 1,
        },
        round_id: round_id.to_string(),
        timestamp,
    }
}

#[test]
fn summaries_preserve_row_order_and_count() {
    let rows = vec![
        summary_row("r3", 300),
        summary_row("r1", 100),
        summary_row("r2", 200),
    ];
    let summaries = assemble_round_summaries(rows);
    let ids: Vec<&str> = summaries.iter().map(|s| s.round_id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r1", "r2"]);
    assert_eq!(summaries[1].timestamp, 100);
}

#[test]
fn summaries_of_nothing_are_empty() {
    assert!(assemble_round_summaries(Vec::new()).is_empty());
}

#[test]
fn summary_carries_black_card_metadata() {
    let summaries = assemble_round_summaries(vec![summary_row("r9", 9)]);
    assert_eq!(summaries[0].black_card.text, "Prompt for r9");
    assert_eq!(summaries[0].black_card.meta, CardMeta::Black { draw: 0, pick: 1 });
}

#[test]
fn summary_json_uses_archive_field_names() {
    let summaries = assemble_round_summaries(vec![summary_row("r1", 42)]);
    let value = serde_json::to_value(&summaries).unwrap();
    assert_eq!(value[0]["RoundId"], "r1");
    assert_eq!(value[0]["Timestamp"], 42);
    assert_eq!(value[0]["BlackCard"]["Meta"]["Color"], "black");
}

#[test]
fn round_json_shape() {
    let info = RoundInfoRow {
        black_card: BlackCardFields {
            text: "Why?".to_string(),
            watermark: "PYX".to_string(),
            draw: 0,
            pick: 1,
        },
        timestamp: 1_500_000_000,
        game_id: None,
    };
    let plays = reconstruct_plays(vec![
        PlayedCardRow::new(0, Card::white("A", "PYX"), false),
        PlayedCardRow::new(0, Card::white("B", "PYX"), true),
    ]);
    let round = Round::new(info, plays);
    let value = serde_json::to_value(&round).unwrap();

    assert_eq!(value["WinningPlay"][0]["Text"], "B");
    assert_eq!(value["OtherPlays"][0][0]["Text"], "A");
    assert_eq!(value["Timestamp"], 1_500_000_000i64);
    assert!(value.get("GameId").is_none());
}

#[test]
fn round_without_plays_serializes_null_winner() {
    let info = RoundInfoRow {
        black_card: BlackCardFields {
            text: "Why?".to_string(),
            watermark: "PYX".to_string(),
            draw: 0,
            pick: 1,
        },
        timestamp: 0,
        game_id: Some("g-1".to_string()),
    };
    let round = Round::new(info, reconstruct_plays(Vec::new()));
    let value = serde_json::to_value(&round).unwrap();
    assert_eq!(value["WinningPlay"], json!(null));
    assert_eq!(value["OtherPlays"], json!([]));
    assert_eq!(value["GameId"], "g-1");
}

#[test]
fn server_id_is_prefix_before_underscore() {
    let basics = SessionBasics {
        session_id: "pyx1_5f2c9a".to_string(),
        log_in_timestamp: 0,
    };
    assert_eq!(basics.server_id(), "pyx1");

    let bare = SessionBasics {
        session_id: "standalone".to_string(),
        log_in_timestamp: 0,
    };
    assert_eq!(bare.server_id(), "standalone");
}
