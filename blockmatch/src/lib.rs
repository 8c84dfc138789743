//! # blockmatch
//!
//! Matching-block diffing for token sequences.
//!
//! ## Algorithm Overview
//!
//! The diff runs in three phases:
//!
//! 1. **Indexing**: record where every token of the new sequence occurs
//!    ([`TokenIndex`])
//! 2. **Block matching**: repeatedly find the longest common run of tokens and
//!    recurse around it, yielding ordered, non-overlapping [`Match`]es
//! 3. **Operation building**: classify the gaps between matches as insert,
//!    delete or replace, producing a gapless list of [`Operation`]s
//!
//! Tokens only need `Hash + Eq`, so the same machinery diffs words, lines,
//! characters or any other unit.
//!
//! ## Usage
//!
//! ```
//! use blockmatch::{Action, diff_sequences};
//!
//! let old = ["the", " ", "cat"];
//! let new = ["the", " ", "dog"];
//!
//! let ops = diff_sequences(&old, &new);
//! assert_eq!(ops[0].action, Action::Equal);
//! assert_eq!(ops[1].action, Action::Replace);
//! assert_eq!(ops[1].old_range(), 2..3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]

mod tracing_macros;

/// Token position index
pub mod index;
/// Longest-common-run block matching
pub mod matching;
/// Edit operation generation
pub mod ops;

pub use index::{Positions, TokenIndex};
pub use matching::{Match, find_best_match, find_matching_blocks, matching_blocks};
pub use ops::{Action, Operation, build_operations};

use core::hash::Hash;

/// Compute the edit operations turning `old` into `new`.
///
/// This is the main entry point. It indexes `new`, finds all matching blocks
/// and converts them into operations that cover both sequences end to end.
pub fn diff_sequences<T: Hash + Eq>(old: &[T], new: &[T]) -> Vec<Operation> {
    let index = TokenIndex::new(new);
    let blocks = matching_blocks(old, &index);
    build_operations(&blocks, old.len(), new.len())
}
