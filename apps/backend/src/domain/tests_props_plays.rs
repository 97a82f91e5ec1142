use proptest::prelude::*;

use crate::domain::{reconstruct_plays, test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: with at most one winner, every submitted play comes back
    /// exactly once, and the non-winners keep their encounter order.
    #[test]
    fn prop_reconstruct_recovers_groups(groups in test_gens::round_groups()) {
        let rows = test_gens::flatten(&groups);
        let plays = reconstruct_plays(rows);

        let expected_winner = groups.iter().find(|(_, w)| *w).map(|(cards, _)| cards.clone());
        let expected_others: Vec<_> = groups
            .iter()
            .filter(|(_, w)| !*w)
            .map(|(cards, _)| cards.clone())
            .collect();

        prop_assert_eq!(plays.winning_play, expected_winner);
        prop_assert_eq!(plays.other_plays, expected_others);
        prop_assert_eq!(plays.replaced_winners, 0);
    }

    /// Property: a single group lands in exactly one of the two outputs.
    #[test]
    fn prop_single_group_is_never_split(
        cards in prop::collection::vec(test_gens::white_card(), 1..5),
        winner in any::<bool>(),
    ) {
        let rows = test_gens::flatten(&[(cards.clone(), winner)]);
        let plays = reconstruct_plays(rows);

        prop_assert_eq!(plays.play_count(), 1);
        if winner {
            prop_assert_eq!(plays.winning_play, Some(cards));
            prop_assert!(plays.other_plays.is_empty());
        } else {
            prop_assert!(plays.winning_play.is_none());
            prop_assert_eq!(plays.other_plays, vec![cards]);
        }
    }
}
