//! Longest-common-run search and recursive block decomposition.
//!
//! [`find_best_match`] finds the single longest run of identical tokens shared
//! by a window of the old sequence and a window of the new one. It walks the
//! old window once and, for each token, only visits the positions where that
//! token occurs in the new window (via [`TokenIndex`]) instead of filling a full
//! `old × new` table.
//!
//! [`find_matching_blocks`] applies the search recursively: left of the best
//! match it recurses, right of it it loops. Every block is the longest one
//! available in its local window. The decomposition is greedy, not a minimal
//! edit distance.

use crate::index::TokenIndex;
use crate::tracing_macros::trace;
use core::hash::Hash;
use core::ops::Range;
use facet::Facet;
use rapidhash::RapidHashMap as HashMap;

/// A run of `size` identical tokens starting at `start_in_old` in the old
/// sequence and at `start_in_new` in the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
pub struct Match {
    /// First token of the run in the old sequence
    pub start_in_old: usize,
    /// First token of the run in the new sequence
    pub start_in_new: usize,
    /// Number of tokens in the run
    pub size: usize,
}

impl Match {
    /// Create a new match.
    pub fn new(start_in_old: usize, start_in_new: usize, size: usize) -> Self {
        Self {
            start_in_old,
            start_in_new,
            size,
        }
    }

    /// One past the last matched token in the old sequence.
    #[inline]
    pub fn end_in_old(&self) -> usize {
        self.start_in_old + self.size
    }

    /// One past the last matched token in the new sequence.
    #[inline]
    pub fn end_in_new(&self) -> usize {
        self.start_in_new + self.size
    }
}

/// Find the longest run of tokens common to `old[old_range]` and the indexed
/// new sequence restricted to `new_range`.
///
/// Ties go to the run found first: leftmost in old, then leftmost in new.
/// Returns `None` when the windows share no token.
pub fn find_best_match<T: Hash + Eq>(
    old: &[T],
    index: &TokenIndex<'_, T>,
    old_range: Range<usize>,
    new_range: Range<usize>,
) -> Option<Match> {
    let mut best = Match::new(old_range.start, new_range.start, 0);

    // Run length of the match ending at a given new position, for the
    // previous old token and the current one.
    let mut prev: HashMap<usize, usize> = HashMap::default();
    let mut curr: HashMap<usize, usize> = HashMap::default();

    for index_in_old in old_range {
        curr.clear();

        for &index_in_new in index.positions(&old[index_in_old]) {
            if index_in_new < new_range.start {
                continue;
            }
            if index_in_new >= new_range.end {
                break;
            }

            let run = index_in_new
                .checked_sub(1)
                .and_then(|before| prev.get(&before))
                .copied()
                .unwrap_or(0)
                + 1;
            curr.insert(index_in_new, run);

            if run > best.size {
                best = Match::new(index_in_old + 1 - run, index_in_new + 1 - run, run);
            }
        }

        core::mem::swap(&mut prev, &mut curr);
    }

    (best.size != 0).then_some(best)
}

/// Collect every matching block inside the given windows into `blocks`,
/// ordered left to right.
///
/// Blocks never overlap and both their old and new starts strictly increase.
/// Recursion happens only for the region left of each best match; the region
/// to its right is handled by the loop, so stack depth does not grow with the
/// number of blocks found to the right.
pub fn find_matching_blocks<T: Hash + Eq>(
    old: &[T],
    index: &TokenIndex<'_, T>,
    mut old_range: Range<usize>,
    mut new_range: Range<usize>,
    blocks: &mut Vec<Match>,
) {
    while let Some(found) = find_best_match(old, index, old_range.clone(), new_range.clone()) {
        trace!(
            start_in_old = found.start_in_old,
            start_in_new = found.start_in_new,
            size = found.size,
            "best match"
        );

        if old_range.start < found.start_in_old && new_range.start < found.start_in_new {
            find_matching_blocks(
                old,
                index,
                old_range.start..found.start_in_old,
                new_range.start..found.start_in_new,
                blocks,
            );
        }

        blocks.push(found);

        if found.end_in_old() < old_range.end && found.end_in_new() < new_range.end {
            old_range.start = found.end_in_old();
            new_range.start = found.end_in_new();
        } else {
            break;
        }
    }
}

/// All matching blocks between `old` and the sequence `index` was built from.
pub fn matching_blocks<T: Hash + Eq>(old: &[T], index: &TokenIndex<'_, T>) -> Vec<Match> {
    let mut blocks = Vec::new();
    find_matching_blocks(old, index, 0..old.len(), 0..index.sequence_len(), &mut blocks);
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    fn blocks(old: &[&str], new: &[&str]) -> Vec<Match> {
        let index = TokenIndex::new(new);
        matching_blocks(old, &index)
    }

    #[test]
    fn test_best_match_prefers_longest() {
        let old = ["a", "b", "c", "d"];
        let new = ["b", "x", "b", "c", "d"];
        let index = TokenIndex::new(&new);
        let best = find_best_match(&old, &index, 0..4, 0..5);
        assert_eq!(best, Some(Match::new(1, 2, 3)));
    }

    #[test]
    fn test_best_match_tie_keeps_first() {
        let old = ["a", "x", "b"];
        let new = ["b", "y", "a"];
        let index = TokenIndex::new(&new);
        // "a" is scanned first in old, so it wins the 1-token tie
        assert_eq!(
            find_best_match(&old, &index, 0..3, 0..3),
            Some(Match::new(0, 2, 1))
        );
    }

    #[test]
    fn test_best_match_respects_new_window() {
        let old = ["a", "b"];
        let new = ["a", "b", "z", "a", "b"];
        let index = TokenIndex::new(&new);
        assert_eq!(
            find_best_match(&old, &index, 0..2, 2..5),
            Some(Match::new(0, 3, 2))
        );
        assert_eq!(find_best_match(&old, &index, 0..2, 2..3), None);
    }

    #[test]
    fn test_unknown_token_breaks_run() {
        let old = ["a", "q", "b"];
        let new = ["a", "b"];
        let index = TokenIndex::new(&new);
        assert_eq!(
            find_best_match(&old, &index, 0..3, 0..2),
            Some(Match::new(0, 0, 1))
        );
    }

    #[test]
    fn test_no_common_tokens() {
        assert!(blocks(&["a", "b"], &["c", "d"]).is_empty());
    }

    #[test]
    fn test_blocks_on_both_sides() {
        let old = ["<p>", "a", "</p>"];
        let new = ["<p>", "ab", "</p>"];
        assert_eq!(
            blocks(&old, &new),
            vec![Match::new(0, 0, 1), Match::new(2, 2, 1)]
        );
    }

    #[test]
    fn test_recurses_left_of_best_match() {
        let old = ["x", " ", "a", "b", "c"];
        let new = ["x", "!", "a", "b", "c"];
        assert_eq!(
            blocks(&old, &new),
            vec![Match::new(0, 0, 1), Match::new(2, 2, 3)]
        );
    }

    #[test]
    fn test_swapped_words() {
        let old = ["foo", " ", "bar"];
        let new = ["bar", " ", "foo"];
        assert_eq!(blocks(&old, &new), vec![Match::new(0, 2, 1)]);
    }

    #[test]
    fn test_identical_sequences() {
        let seq = ["a", " ", "b", " ", "c"];
        assert_eq!(blocks(&seq, &seq), vec![Match::new(0, 0, 5)]);
    }

    #[test]
    fn test_match_ends() {
        let m = Match::new(2, 5, 3);
        assert_eq!(m.end_in_old(), 5);
        assert_eq!(m.end_in_new(), 8);
    }
}
