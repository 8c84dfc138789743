//! Position index over the new sequence.

use core::hash::Hash;
use rapidhash::RapidHashMap as HashMap;
use smallvec::SmallVec;

/// Positions of one token value, in ascending order.
///
/// Most tokens in prose occur only a handful of times, so four slots cover
/// the common case without a heap allocation.
pub type Positions = SmallVec<[usize; 4]>;

/// Maps every distinct token of a sequence to the ascending list of indices
/// where it occurs.
///
/// Keys are compared exactly: no case folding and no whitespace
/// normalization. Built once per diff and read-only afterwards.
#[derive(Debug, Clone)]
pub struct TokenIndex<'a, T> {
    positions: HashMap<&'a T, Positions>,
    len: usize,
}

impl<'a, T: Hash + Eq> TokenIndex<'a, T> {
    /// Index `tokens` in a single pass.
    pub fn new(tokens: &'a [T]) -> Self {
        let mut positions: HashMap<&'a T, Positions> = HashMap::default();
        for (i, token) in tokens.iter().enumerate() {
            positions.entry(token).or_default().push(i);
        }
        Self {
            positions,
            len: tokens.len(),
        }
    }

    /// All positions of `token` in the indexed sequence, ascending.
    ///
    /// Returns `None` when the token never occurs.
    #[inline]
    pub fn get(&self, token: &T) -> Option<&[usize]> {
        self.positions.get(token).map(|p| p.as_slice())
    }

    /// Like [`TokenIndex::get`] but yields an empty slice for unknown tokens.
    #[inline]
    pub fn positions(&self, token: &T) -> &[usize] {
        self.get(token).unwrap_or(&[])
    }

    /// Length of the indexed sequence.
    pub fn sequence_len(&self) -> usize {
        self.len
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.positions.len()
    }
}
