//! Error types for seqdiff.
//!
//! The diff core is a set of total functions over well-formed inputs; the
//! only caller-contract violation is an out-of-range window passed to the
//! bounded match query. Those are rejected up front rather than clamped,
//! because silently clamping a window would corrupt the non-overlap
//! invariant of the full decomposition.

use thiserror::Error;

/// Which sequence a window bound refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first sequence (A).
    A,
    /// The second sequence (B).
    B,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
        }
    }
}

/// Error type for seqdiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffError {
    /// A window range has its lower bound above its upper bound.
    #[error("invalid window: {side} range {lo}..{hi} is inverted")]
    WindowInverted { side: Side, lo: usize, hi: usize },

    /// A window range extends past the end of its sequence.
    #[error("invalid window: {side} range {lo}..{hi} exceeds sequence length {len}")]
    WindowOutOfBounds {
        side: Side,
        lo: usize,
        hi: usize,
        len: usize,
    },
}

/// Convenient Result type for seqdiff operations.
pub type Result<T> = std::result::Result<T, DiffError>;

/// Validate one side of a query window against its sequence length.
pub(crate) fn check_window(side: Side, lo: usize, hi: usize, len: usize) -> Result<()> {
    if lo > hi {
        return Err(DiffError::WindowInverted { side, lo, hi });
    }
    if hi > len {
        return Err(DiffError::WindowOutOfBounds { side, lo, hi, len });
    }
    Ok(())
}
