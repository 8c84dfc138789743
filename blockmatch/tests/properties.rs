//! Property tests for block matching and operation building.

use blockmatch::{Action, TokenIndex, build_operations, diff_sequences, matching_blocks};
use proptest::prelude::*;

/// Short sequences over a small alphabet so that repeats are common.
fn sequence() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..24)
}

proptest! {
    #[test]
    fn operations_cover_both_sequences(old in sequence(), new in sequence()) {
        let ops = diff_sequences(&old, &new);

        let mut position_in_old = 0;
        let mut position_in_new = 0;
        for op in &ops {
            prop_assert_ne!(op.action, Action::None);
            prop_assert_eq!(op.start_in_old, position_in_old);
            prop_assert_eq!(op.start_in_new, position_in_new);
            prop_assert!(op.end_in_old >= op.start_in_old);
            prop_assert!(op.end_in_new >= op.start_in_new);
            position_in_old = op.end_in_old;
            position_in_new = op.end_in_new;
        }
        prop_assert_eq!(position_in_old, old.len());
        prop_assert_eq!(position_in_new, new.len());
    }

    #[test]
    fn equal_operations_match_tokens(old in sequence(), new in sequence()) {
        for op in diff_sequences(&old, &new) {
            let (old_empty, new_empty) = (op.old_range().is_empty(), op.new_range().is_empty());
            match op.action {
                Action::Equal => {
                    prop_assert_eq!(&old[op.old_range()], &new[op.new_range()]);
                }
                Action::Insert => {
                    prop_assert!(old_empty && !new_empty);
                }
                Action::Delete => {
                    prop_assert!(!old_empty && new_empty);
                }
                Action::Replace => {
                    prop_assert!(!old_empty && !new_empty);
                }
                Action::None => {
                    prop_assert!(false, "None must not be emitted");
                }
            }
        }
    }

    #[test]
    fn matches_are_strictly_increasing(old in sequence(), new in sequence()) {
        let index = TokenIndex::new(&new);
        let blocks = matching_blocks(&old, &index);
        for pair in blocks.windows(2) {
            prop_assert!(pair[0].end_in_old() <= pair[1].start_in_old);
            prop_assert!(pair[0].end_in_new() <= pair[1].start_in_new);
            prop_assert!(pair[0].start_in_old < pair[1].start_in_old);
            prop_assert!(pair[0].start_in_new < pair[1].start_in_new);
        }
        for block in &blocks {
            prop_assert!(block.size > 0);
            prop_assert_eq!(
                &old[block.start_in_old..block.end_in_old()],
                &new[block.start_in_new..block.end_in_new()]
            );
        }
    }

    #[test]
    fn change_detected_iff_sequences_differ(old in sequence(), new in sequence()) {
        let ops = build_operations(
            &matching_blocks(&old, &TokenIndex::new(&new)),
            old.len(),
            new.len(),
        );
        let changed = ops.iter().any(|op| op.action != Action::Equal);
        prop_assert_eq!(changed, old != new);
    }

    #[test]
    fn identical_sequences_are_one_block(seq in sequence()) {
        let ops = diff_sequences(&seq, &seq);
        if seq.is_empty() {
            prop_assert!(ops.is_empty());
        } else {
            prop_assert_eq!(ops.len(), 1);
            prop_assert_eq!(ops[0].action, Action::Equal);
        }
    }
}
