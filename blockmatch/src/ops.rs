//! Edit operations derived from matching blocks.
//!
//! The gap before each block becomes an insert, delete or replace depending on
//! which side the gap is non-empty on, and the block itself becomes an equal
//! operation. A zero-sized block at `(old_len, new_len)` closes the trailing gap.

use crate::matching::Match;
use crate::tracing_macros::debug;
use core::fmt;
use core::ops::Range;
use facet::Facet;

/// What an [`Operation`] does to its token ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
#[repr(u8)]
pub enum Action {
    /// Tokens are the same on both sides.
    Equal,
    /// Tokens exist only in the old sequence.
    Delete,
    /// Tokens exist only in the new sequence.
    Insert,
    /// No gap before a block. Never present in a built operation list.
    None,
    /// Old tokens are replaced by different new tokens.
    Replace,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Equal => "Equal",
            Action::Delete => "Delete",
            Action::Insert => "Insert",
            Action::None => "None",
            Action::Replace => "Replace",
        };
        f.write_str(name)
    }
}

/// One edit over half-open token ranges of both sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Facet)]
pub struct Operation {
    /// The kind of edit
    pub action: Action,
    /// First old token covered
    pub start_in_old: usize,
    /// One past the last old token covered
    pub end_in_old: usize,
    /// First new token covered
    pub start_in_new: usize,
    /// One past the last new token covered
    pub end_in_new: usize,
}

impl Operation {
    /// Create a new operation.
    pub fn new(
        action: Action,
        start_in_old: usize,
        end_in_old: usize,
        start_in_new: usize,
        end_in_new: usize,
    ) -> Self {
        Self {
            action,
            start_in_old,
            end_in_old,
            start_in_new,
            end_in_new,
        }
    }

    /// Covered range of the old sequence.
    #[inline]
    pub fn old_range(&self) -> Range<usize> {
        self.start_in_old..self.end_in_old
    }

    /// Covered range of the new sequence.
    #[inline]
    pub fn new_range(&self) -> Range<usize> {
        self.start_in_new..self.end_in_new
    }

    /// Whether this operation changes anything.
    #[inline]
    pub fn is_change(&self) -> bool {
        self.action != Action::Equal
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(old {}..{}, new {}..{})",
            self.action, self.start_in_old, self.end_in_old, self.start_in_new, self.end_in_new
        )
    }
}

/// Turn ordered, non-overlapping matching blocks into a gapless operation list
/// covering `0..old_len` and `0..new_len`.
pub fn build_operations(matches: &[Match], old_len: usize, new_len: usize) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(matches.len() * 2 + 1);
    let mut position_in_old = 0;
    let mut position_in_new = 0;

    let sentinel = Match::new(old_len, new_len, 0);

    for block in matches.iter().chain(core::iter::once(&sentinel)) {
        let at_old = position_in_old == block.start_in_old;
        let at_new = position_in_new == block.start_in_new;

        let action = match (at_old, at_new) {
            (false, false) => Action::Replace,
            (true, false) => Action::Insert,
            (false, true) => Action::Delete,
            // the block continues right where the previous one ended
            (true, true) => Action::None,
        };

        if action != Action::None {
            operations.push(Operation::new(
                action,
                position_in_old,
                block.start_in_old,
                position_in_new,
                block.start_in_new,
            ));
        }

        if block.size != 0 {
            operations.push(Operation::new(
                Action::Equal,
                block.start_in_old,
                block.end_in_old(),
                block.start_in_new,
                block.end_in_new(),
            ));
        }

        position_in_old = block.end_in_old();
        position_in_new = block.end_in_new();
    }

    debug!(
        blocks = matches.len(),
        operations = operations.len(),
        "built operations"
    );

    operations
}
