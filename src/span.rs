//! Tagged edit spans assembled from matching blocks.
//!
//! The span assembler walks an ordered match list once, with a cursor into
//! each sequence, and emits a gap-free script of tagged spans describing
//! exactly how to transform A into B. The zero-length sentinel block at
//! the end of every match list guarantees trailing edits are flushed.

use crate::matcher::Match;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Kind of region a [`Span`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanTag {
    /// The two sub-ranges are element-wise equal
    Equal,
    /// Items present only in B; the A range is empty
    Insert,
    /// Items present only in A; the B range is empty
    Delete,
    /// Both sub-ranges are non-empty and differ
    Replace,
}

/// One contiguous region of the edit script.
///
/// Concatenating the A-ranges of a full script reconstructs `0..a.len()`
/// with no gaps or overlaps, and likewise for B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// What this region describes
    pub tag: SpanTag,
    /// Start of the region in A
    pub a_start: usize,
    /// End of the region in A (exclusive)
    pub a_end: usize,
    /// Start of the region in B
    pub b_start: usize,
    /// End of the region in B (exclusive)
    pub b_end: usize,
}

impl Span {
    /// The affected range in A.
    pub fn a_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    /// The affected range in B.
    pub fn b_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }
}

/// A [`Span`] with its ranges materialized as sub-slices of the two
/// sequences. A convenience projection for presentation layers; the
/// slices borrow from the session's sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanSlice<'a, T> {
    /// What this region describes
    pub tag: SpanTag,
    /// The affected items of A
    pub a: &'a [T],
    /// The affected items of B
    pub b: &'a [T],
}

/// Lazy iterator over the spans of an edit script.
///
/// Single forward pass over the match list; restartable only by asking
/// the session for a fresh iterator.
#[derive(Debug, Clone)]
pub struct Spans {
    matches: std::vec::IntoIter<Match>,
    i: usize,
    j: usize,
    skip_equal: bool,
    // a match can yield an edit span and an equal span; the equal waits here
    pending: Option<Span>,
}

impl Spans {
    pub(crate) fn new(matches: Vec<Match>, skip_equal: bool) -> Self {
        Self {
            matches: matches.into_iter(),
            i: 0,
            j: 0,
            skip_equal,
            pending: None,
        }
    }
}

impl Iterator for Spans {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }
        loop {
            let m = self.matches.next()?;

            let tag = match (self.i < m.a_start, self.j < m.b_start) {
                (true, true) => Some(SpanTag::Replace),
                (true, false) => Some(SpanTag::Delete),
                (false, true) => Some(SpanTag::Insert),
                (false, false) => None,
            };
            let edit = tag.map(|tag| Span {
                tag,
                a_start: self.i,
                a_end: m.a_start,
                b_start: self.j,
                b_end: m.b_start,
            });

            let equal = (m.len > 0 && !self.skip_equal).then(|| Span {
                tag: SpanTag::Equal,
                a_start: m.a_start,
                a_end: m.a_end(),
                b_start: m.b_start,
                b_end: m.b_end(),
            });

            self.i = m.a_end();
            self.j = m.b_end();

            match (edit, equal) {
                (Some(span), pending) => {
                    self.pending = pending;
                    return Some(span);
                }
                (None, Some(span)) => return Some(span),
                // aligned zero-length match (or skipped equal): keep walking
                (None, None) => continue,
            }
        }
    }
}

/// Lazy iterator over the edit script as [`SpanSlice`]s.
#[derive(Debug, Clone)]
pub struct SpanSlices<'a, T> {
    inner: Spans,
    a: &'a [T],
    b: &'a [T],
}

impl<'a, T> SpanSlices<'a, T> {
    pub(crate) fn new(matches: Vec<Match>, skip_equal: bool, a: &'a [T], b: &'a [T]) -> Self {
        Self {
            inner: Spans::new(matches, skip_equal),
            a,
            b,
        }
    }
}

impl<'a, T> Iterator for SpanSlices<'a, T> {
    type Item = SpanSlice<'a, T>;

    fn next(&mut self) -> Option<SpanSlice<'a, T>> {
        let span = self.inner.next()?;
        Some(SpanSlice {
            tag: span.tag,
            a: &self.a[span.a_range()],
            b: &self.b[span.b_range()],
        })
    }
}
