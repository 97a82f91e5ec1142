use proptest::prelude::*;

use crate::domain::{assemble_round_summaries, test_gens, test_prelude, CardMeta};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: N rows give N summaries, position by position, with the
    /// black card carried over unchanged.
    #[test]
    fn prop_summaries_mirror_rows(
        rows in prop::collection::vec(test_gens::round_summary_row(), 0..16),
    ) {
        let summaries = assemble_round_summaries(rows.clone());

        prop_assert_eq!(summaries.len(), rows.len());
        for (summary, row) in summaries.iter().zip(&rows) {
            prop_assert_eq!(&summary.round_id, &row.round_id);
            prop_assert_eq!(summary.timestamp, row.timestamp);
            prop_assert_eq!(&summary.black_card.text, &row.black_card.text);
            prop_assert_eq!(
                summary.black_card.meta,
                CardMeta::Black { draw: row.black_card.draw, pick: row.black_card.pick }
            );
        }
    }
}
