use crate::domain::{reconstruct_plays, Card, PlayedCardRow};

fn row(slot: i32, text: &str, winner: bool) -> PlayedCardRow {
    PlayedCardRow::new(slot, Card::white(text, "PYX"), winner)
}

fn texts(play: &[Card]) -> Vec<&str> {
    play.iter().map(|c| c.text.as_str()).collect()
}

#[test]
fn empty_rows_yield_no_plays() {
    let plays = reconstruct_plays(Vec::new());
    assert!(plays.winning_play.is_none());
    assert!(plays.other_plays.is_empty());
    assert_eq!(plays.play_count(), 0);
}

#[test]
fn loser_then_winner() {
    let plays = reconstruct_plays(vec![
        row(0, "A", false),
        row(1, "B", false),
        row(0, "C", true),
    ]);
    assert_eq!(plays.other_plays.len(), 1);
    assert_eq!(texts(&plays.other_plays[0]), vec!["A", "B"]);
    assert_eq!(texts(plays.winning_play.as_ref().unwrap()), vec!["C"]);
}

#[test]
fn single_winning_card() {
    let plays = reconstruct_plays(vec![row(0, "X", true)]);
    assert_eq!(texts(plays.winning_play.as_ref().unwrap()), vec!["X"]);
    assert!(plays.other_plays.is_empty());
}

#[test]
fn single_losing_play_goes_to_other_plays() {
    let plays = reconstruct_plays(vec![row(0, "X", false), row(1, "Y", false)]);
    assert!(plays.winning_play.is_none());
    assert_eq!(plays.other_plays.len(), 1);
    assert_eq!(texts(&plays.other_plays[0]), vec!["X", "Y"]);
}

#[test]
fn winner_in_the_middle_keeps_encounter_order_of_others() {
    let plays = reconstruct_plays(vec![
        row(0, "first", false),
        row(0, "win-1", true),
        row(1, "win-2", true),
        row(0, "second", false),
        row(0, "third", false),
    ]);
    assert_eq!(texts(plays.winning_play.as_ref().unwrap()), vec!["win-1", "win-2"]);
    let others: Vec<Vec<&str>> = plays.other_plays.iter().map(|p| texts(p)).collect();
    assert_eq!(others, vec![vec!["first"], vec!["second"], vec!["third"]]);
}

#[test]
fn pick_three_plays_group_by_slot_zero() {
    let plays = reconstruct_plays(vec![
        row(0, "a0", false),
        row(1, "a1", false),
        row(2, "a2", false),
        row(0, "b0", true),
        row(1, "b1", true),
        row(2, "b2", true),
    ]);
    assert_eq!(texts(&plays.other_plays[0]), vec!["a0", "a1", "a2"]);
    assert_eq!(texts(plays.winning_play.as_ref().unwrap()), vec!["b0", "b1", "b2"]);
}

#[test]
fn second_winner_replaces_first() {
    let plays = reconstruct_plays(vec![
        row(0, "early", true),
        row(0, "loser", false),
        row(0, "late", true),
    ]);
    assert_eq!(texts(plays.winning_play.as_ref().unwrap()), vec!["late"]);
    assert_eq!(plays.other_plays.len(), 1);
    assert_eq!(plays.replaced_winners, 1);
}

#[test]
fn play_takes_winner_flag_of_its_last_row() {
    let plays = reconstruct_plays(vec![row(0, "a", false), row(1, "b", true)]);
    assert_eq!(texts(plays.winning_play.as_ref().unwrap()), vec!["a", "b"]);
    assert!(plays.other_plays.is_empty());
}

#[test]
fn leading_continuation_rows_start_the_first_play() {
    // Upstream never sends this; the rows still land in a play.
    let plays = reconstruct_plays(vec![row(1, "orphan", false), row(0, "next", false)]);
    let others: Vec<Vec<&str>> = plays.other_plays.iter().map(|p| texts(p)).collect();
    assert_eq!(others, vec![vec!["orphan"], vec!["next"]]);
}
