//! **Generic sequence diff core: matching blocks and tagged edit spans.**
//!
//! `seqdiff` computes the differences between two ordered sequences of
//! comparable, hashable items — lines, words, characters, or arbitrary
//! tokens — expressed either as matching-block coordinates or as a tagged
//! edit script (equal / insert / delete / replace). It is the engine
//! behind line-oriented diff tools, merge utilities, and
//! change-visualization front ends; tokenization and presentation are the
//! caller's job.
//!
//! The matching strategy is an adapted Ratcliff/Obershelp search with the
//! classic "auto-junk" heuristic: items so frequent in the second sequence
//! that they would degrade search performance are excluded from the
//! candidate index, trading a perfectly minimal diff for predictable speed
//! on inputs with heavy repetition (think blank lines). It does not
//! attempt globally optimal minimum-edit-distance diffs.
//!
//! ## Core Concepts & Modules
//!
//! - **[`matcher`]**: Home of [`SequenceDiff`], the comparison session. It
//!   borrows both sequences, indexes the second once, and answers
//!   longest-match and full-decomposition queries.
//! - **[`index`]**: The [`PositionIndex`] mapping each item of B to its
//!   occurrence positions, with the popular-item filter applied.
//! - **[`span`]**: The edit-script types — [`Span`], [`SpanSlice`] and the
//!   lazy iterators producing them from matching blocks.
//! - **[`error`]**: [`DiffError`] for window-bound violations, the only
//!   fallible surface of the crate.
//!
//! ## Getting Started
//!
//! ```
//! use seqdiff::{SequenceDiff, SpanTag};
//!
//! let a: Vec<&str> = "the quick brown fox".split(' ').collect();
//! let b: Vec<&str> = "the slow brown dog".split(' ').collect();
//!
//! let diff = SequenceDiff::new(&a, &b);
//! for span in diff.spans(true) {
//!     match span.tag {
//!         SpanTag::Replace => println!(
//!             "replace a[{:?}] with b[{:?}]",
//!             span.a_range(),
//!             span.b_range()
//!         ),
//!         SpanTag::Delete => println!("delete a[{:?}]", span.a_range()),
//!         SpanTag::Insert => println!("insert b[{:?}]", span.b_range()),
//!         SpanTag::Equal => unreachable!("suppressed by skip_equal"),
//!     }
//! }
//! ```
//!
//! A session can be queried repeatedly — all matches, bounded
//! sub-rectangle matches, spans with or without equal regions, or
//! materialized slices — and is safe to share across threads read-only.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // ratio() divides matched lengths by sequence lengths; values are bounded
    clippy::cast_precision_loss,
    // Variable names like `lo`/`hi` or `i`/`j` are clear in context
    clippy::similar_names
)]

pub mod error;
pub mod index;
pub mod matcher;
pub mod span;

// Re-export main types for convenience
pub use error::{DiffError, Result, Side};
pub use index::{IndexStats, PositionIndex};
pub use matcher::{Match, SequenceDiff};
pub use span::{Span, SpanSlice, SpanSlices, SpanTag, Spans};
