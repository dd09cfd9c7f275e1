//! Longest-match search and full diff decomposition.
//!
//! [`SequenceDiff`] is a comparison session over two borrowed sequences.
//! Construction builds a [`PositionIndex`] over B once; every query after
//! that is read-only, so a single session can serve concurrent queries
//! from multiple threads (`SequenceDiff` is `Sync` when `T` is).
//!
//! The search is an adapted Ratcliff/Obershelp: for each position in A,
//! candidate positions in B come from the index, and a dynamic-programming
//! map tracks the length of the matching run ending at each candidate.
//! The full decomposition recurses on the unmatched remainders around the
//! longest match, driven by an explicit work-list so stack depth stays
//! bounded on adversarial inputs.

use crate::error::{check_window, Result, Side};
use crate::index::{IndexStats, PositionIndex};
use crate::span::{SpanSlices, Spans};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use xxhash_rust::xxh3::Xxh3Builder;

/// Run length ending at each position of B, for one outer row of the scan.
type RunMap = HashMap<usize, usize, Xxh3Builder>;

/// A maximal contiguous matching block between the two sequences.
///
/// `A[a_start..a_start + len]` equals `B[b_start..b_start + len]`
/// element-wise. A full decomposition is strictly ordered by increasing
/// `a_start` and `b_start`, pairwise non-overlapping in both sequences,
/// and terminated by a zero-length sentinel at `(a.len(), b.len())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// Start of the block in A
    pub a_start: usize,
    /// Start of the block in B
    pub b_start: usize,
    /// Number of matching elements (zero only for the sentinel and for
    /// "no match in this window" results)
    pub len: usize,
}

impl Match {
    /// One past the last matched position in A.
    pub fn a_end(&self) -> usize {
        self.a_start + self.len
    }

    /// One past the last matched position in B.
    pub fn b_end(&self) -> usize {
        self.b_start + self.len
    }
}

/// A comparison session between two sequences.
///
/// Borrows both sequences for its lifetime and owns the position index
/// over B. The item type only needs equality and a stable hash.
///
/// # Example
///
/// ```
/// use seqdiff::{SequenceDiff, SpanTag};
///
/// let a = ["one", "two", "three"];
/// let b = ["one", "2", "three"];
/// let diff = SequenceDiff::new(&a, &b);
///
/// let tags: Vec<SpanTag> = diff.spans(false).map(|s| s.tag).collect();
/// assert_eq!(tags, [SpanTag::Equal, SpanTag::Replace, SpanTag::Equal]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceDiff<'a, T> {
    a: &'a [T],
    b: &'a [T],
    index: PositionIndex<'a, T>,
}

impl<'a, T: Eq + Hash> SequenceDiff<'a, T> {
    /// Create a session comparing `a` against `b`.
    ///
    /// Builds the position index over `b`; O(|B|) time and space.
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let index = PositionIndex::build(b);
        Self { a, b, index }
    }

    /// The first sequence.
    pub fn a(&self) -> &'a [T] {
        self.a
    }

    /// The second sequence.
    pub fn b(&self) -> &'a [T] {
        self.b
    }

    /// Statistics about the position index over B.
    pub fn index_stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Find the longest matching block within an explicit window.
    ///
    /// The window is `[a_lo, a_hi)` into A and `[b_lo, b_hi)` into B; both
    /// ranges are validated before any work happens and an invalid range
    /// is an error, never clamped. A result with `len == 0` (positioned at
    /// `(a_lo, b_lo)`) means no match exists in the window.
    pub fn longest_match(
        &self,
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> Result<Match> {
        check_window(Side::A, a_lo, a_hi, self.a.len())?;
        check_window(Side::B, b_lo, b_hi, self.b.len())?;
        Ok(self.longest_match_in(a_lo, a_hi, b_lo, b_hi))
    }

    /// Longest-match search over a window known to be in bounds.
    ///
    /// `prev` holds run lengths ending at each B position for the previous
    /// outer row; `cur` is written fresh each row and the two are swapped
    /// afterwards, so a row never reads its own writes.
    fn longest_match_in(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> Match {
        let mut best_i = a_lo;
        let mut best_j = b_lo;
        let mut best_len = 0usize;

        let mut prev: RunMap = RunMap::with_hasher(Xxh3Builder::new());
        let mut cur: RunMap = RunMap::with_hasher(Xxh3Builder::new());

        for i in a_lo..a_hi {
            cur.clear();
            if let Some(positions) = self.index.positions(&self.a[i]) {
                for &j in positions {
                    // positions are ascending: skip below the window, stop past it
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let run = match j.checked_sub(1) {
                        Some(p) => prev.get(&p).copied().unwrap_or(0) + 1,
                        None => 1,
                    };
                    cur.insert(j, run);
                    // strictly greater only, so ties break to the earliest i
                    if run > best_len {
                        best_i = i + 1 - run;
                        best_j = j + 1 - run;
                        best_len = run;
                    }
                }
            }
            std::mem::swap(&mut prev, &mut cur);
        }

        // Extend around the anchor: popular items never appear as
        // candidates above, but runs of them adjacent to the best block
        // are still real matches. Without an anchor the window has no
        // match, by contract.
        if best_len > 0 {
            while best_i > a_lo && best_j > b_lo && self.a[best_i - 1] == self.b[best_j - 1] {
                best_i -= 1;
                best_j -= 1;
                best_len += 1;
            }
            while best_i + best_len < a_hi
                && best_j + best_len < b_hi
                && self.a[best_i + best_len] == self.b[best_j + best_len]
            {
                best_len += 1;
            }
        }

        Match {
            a_start: best_i,
            b_start: best_j,
            len: best_len,
        }
    }

    /// All matching blocks covering the full sequence pair.
    ///
    /// Returned blocks are sorted by `(a_start, b_start)`, non-overlapping
    /// in both sequences, with exactly-contiguous neighbors coalesced and
    /// a zero-length sentinel at `(a.len(), b.len())` appended last.
    pub fn matching_blocks(&self) -> Vec<Match> {
        let mut windows = vec![(0, self.a.len(), 0, self.b.len())];
        let mut raw: Vec<Match> = Vec::new();

        while let Some((a_lo, a_hi, b_lo, b_hi)) = windows.pop() {
            let m = self.longest_match_in(a_lo, a_hi, b_lo, b_hi);
            if m.len > 0 {
                if a_lo < m.a_start && b_lo < m.b_start {
                    windows.push((a_lo, m.a_start, b_lo, m.b_start));
                }
                if m.a_end() < a_hi && m.b_end() < b_hi {
                    windows.push((m.a_end(), a_hi, m.b_end(), b_hi));
                }
                raw.push(m);
            }
        }

        // Matches from disjoint windows never overlap, so this total order
        // is well-defined.
        raw.sort_by_key(|m| (m.a_start, m.b_start));

        // Coalesce blocks the divide-and-conquer split artificially: a
        // block directly contiguous with its predecessor in both
        // sequences is the same run.
        let mut blocks: Vec<Match> = Vec::with_capacity(raw.len() + 1);
        for m in raw {
            match blocks.last_mut() {
                Some(last) if last.a_end() == m.a_start && last.b_end() == m.b_start => {
                    last.len += m.len;
                }
                _ => blocks.push(m),
            }
        }

        tracing::debug!(
            a_len = self.a.len(),
            b_len = self.b.len(),
            blocks = blocks.len(),
            "computed matching blocks"
        );

        blocks.push(Match {
            a_start: self.a.len(),
            b_start: self.b.len(),
            len: 0,
        });
        blocks
    }

    /// Similarity of the two sequences as `2·M / (|A| + |B|)`, where `M`
    /// is the total length of all matching blocks. `1.0` when both
    /// sequences are identical (including both empty), `0.0` when nothing
    /// matches.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|m| m.len).sum();
        2.0 * matched as f64 / total as f64
    }

    /// The edit script as a lazy sequence of tagged index spans.
    ///
    /// With `skip_equal` set, equal spans are suppressed and only the
    /// edits remain; other spans are unchanged in order and bounds.
    pub fn spans(&self, skip_equal: bool) -> Spans {
        Spans::new(self.matching_blocks(), skip_equal)
    }

    /// The edit script with each span's ranges materialized as sub-slices
    /// of A and B.
    pub fn span_slices(&self, skip_equal: bool) -> SpanSlices<'a, T> {
        SpanSlices::new(self.matching_blocks(), skip_equal, self.a, self.b)
    }
}
