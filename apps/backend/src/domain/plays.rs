//! Reconstruction of a round's plays from flat played-card rows.
//!
//! The store returns one row per submitted white card, ordered by the
//! submitting session and then by slot index. A row with slot index 0 opens
//! a new play; every other row continues the play currently being built.

use crate::domain::cards::{Card, Play};

/// One submitted white card of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedCardRow {
    pub slot_index: i32,
    pub card: Card,
    /// Whether the submitting session won the round.
    pub is_winner: bool,
}

impl PlayedCardRow {
    pub fn new(slot_index: i32, card: Card, is_winner: bool) -> Self {
        Self {
            slot_index,
            card,
            is_winner,
        }
    }
}

/// The plays of one round, split into the winner and everyone else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundPlays {
    pub winning_play: Option<Play>,
    /// Non-winning plays in the order their first card was encountered.
    pub other_plays: Vec<Play>,
    /// Winner-flagged plays that a later winner-flagged play replaced.
    /// Always zero for rounds that honour the single-winner contract.
    pub replaced_winners: usize,
}

impl RoundPlays {
    fn close(&mut self, play: Play, winner: bool) {
        if play.is_empty() {
            return;
        }
        if winner {
            if self.winning_play.replace(play).is_some() {
                self.replaced_winners += 1;
            }
        } else {
            self.other_plays.push(play);
        }
    }

    pub fn play_count(&self) -> usize {
        self.other_plays.len() + usize::from(self.winning_play.is_some())
    }
}

/// Group ordered played-card rows into plays in a single forward pass.
///
/// A play takes the winner flag of its last row. When more than one play is
/// flagged as the winner, the last one is kept and the count of replaced
/// plays is reported in [`RoundPlays::replaced_winners`].
pub fn reconstruct_plays<I>(rows: I) -> RoundPlays
where
    I: IntoIterator<Item = PlayedCardRow>,
{
    let mut plays = RoundPlays::default();
    let mut current: Play = Vec::new();
    let mut last_was_winner = false;

    for row in rows {
        if row.slot_index == 0 {
            let finished = std::mem::take(&mut current);
            plays.close(finished, last_was_winner);
        }
        current.push(row.card);
        last_was_winner = row.is_winner;
    }

    // The final play is never closed by a following slot-0 row.
    plays.close(current, last_was_winner);
    plays
}
