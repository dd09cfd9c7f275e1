//! Position index over the second sequence (B).
//!
//! The index maps each distinct item of B to the ascending list of
//! positions where it occurs. It is built once per comparison session and
//! reused across every longest-match query against that session, turning
//! the inner candidate scan into a hash lookup.
//!
//! # Popular items
//!
//! On long sequences with heavy repetition (blank lines are the classic
//! case), indexing every occurrence of a frequent item makes each query
//! scan a long candidate list for no useful anchors. Items occurring more
//! than `len(B) / 100 + 1` times are therefore dropped from the index
//! entirely once B exceeds 200 items. A run consisting solely of popular
//! items can still be matched when it sits next to an indexed anchor,
//! via the matcher's greedy extension step.

use indexmap::IndexMap;
use std::hash::Hash;
use xxhash_rust::xxh3::Xxh3Builder;

/// Sequence length above which the popularity filter engages.
const POPULARITY_MIN_LEN: usize = 200;

/// Index from item value to ascending occurrence positions in B.
///
/// Keys borrow from the indexed sequence; the index never copies items.
/// Immutable after [`build`](PositionIndex::build). Iteration order is
/// first-occurrence order in B, which keeps stats and debug output
/// deterministic.
#[derive(Debug, Clone)]
pub struct PositionIndex<'a, T> {
    entries: IndexMap<&'a T, Vec<usize>, Xxh3Builder>,
    popular_items: usize,
    total_positions: usize,
}

impl<'a, T: Eq + Hash> PositionIndex<'a, T> {
    /// Build the index over `b`.
    ///
    /// An empty `b` yields an empty index. Items exceeding the popularity
    /// threshold are removed wholesale; their positions never participate
    /// in candidate lookup.
    pub fn build(b: &'a [T]) -> Self {
        let mut entries: IndexMap<&'a T, Vec<usize>, Xxh3Builder> =
            IndexMap::with_hasher(Xxh3Builder::new());
        for (i, item) in b.iter().enumerate() {
            entries.entry(item).or_default().push(i);
        }

        let mut popular_items = 0;
        if b.len() > POPULARITY_MIN_LEN {
            let threshold = b.len() / 100 + 1;
            let before = entries.len();
            entries.retain(|_, positions| positions.len() <= threshold);
            popular_items = before - entries.len();
        }

        let total_positions = entries.values().map(Vec::len).sum();
        tracing::debug!(
            sequence_len = b.len(),
            distinct_items = entries.len(),
            indexed_positions = total_positions,
            popular_items,
            "built position index"
        );

        Self {
            entries,
            popular_items,
            total_positions,
        }
    }

    /// Ascending occurrence positions for `item`, if it is indexed.
    ///
    /// Returns `None` both for items absent from B and for items removed
    /// by the popularity filter — the matcher treats the two identically.
    pub fn positions(&self, item: &T) -> Option<&[usize]> {
        self.entries.get(item).map(Vec::as_slice)
    }

    /// Number of distinct indexed items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about the index.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            distinct_items: self.entries.len(),
            indexed_positions: self.total_positions,
            popular_items: self.popular_items,
        }
    }
}

/// Statistics about a position index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Distinct items retained in the index
    pub distinct_items: usize,
    /// Total positions across all retained items
    pub indexed_positions: usize,
    /// Items removed by the popularity filter
    pub popular_items: usize,
}
