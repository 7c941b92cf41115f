//! Errors raised by the validate → prefix → solve → reconstruct pipeline.
//!
//! The first three variants describe bad user input and map to the
//! `Invalid input!!` report. `Inconsistent` means the DP tables were built
//! wrong and is always fatal, as are `SliceOutOfRange` and `PrefixMismatch`
//! (stages wired together with mismatched inputs). `Overflow` means the
//! instance exceeds the exact `i128` range (see [`crate::cost`]).

use thiserror::Error;

/// Pipeline error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// `k` outside `[1, n]`.
    #[error("group count k={k} must satisfy 1 <= k <= n (n={n})")]
    InvalidGroupCount {
        /// Declared sequence length.
        n: i64,
        /// Requested group count.
        k: i64,
    },

    /// Supplied sequence length differs from the declared `n`.
    #[error("expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Declared `n`.
        expected: i64,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// Input text could not be parsed.
    #[error("malformed input on line {line}: {reason}")]
    Malformed {
        /// 1-based input line.
        line: usize,
        /// Parser message.
        reason: String,
    },

    /// The transition table does not describe a valid path from `(n, k)`.
    #[error("internal consistency violation: transition at (i={i}, j={j}) is unset or out of range")]
    Inconsistent {
        /// Prefix length of the offending state.
        i: usize,
        /// Group count of the offending state.
        j: usize,
    },

    /// Slice `[lo, hi)` is inverted or extends past the prefix table.
    #[error("slice [{lo}, {hi}) outside prefix table of length {len}")]
    SliceOutOfRange {
        /// Slice start.
        lo: usize,
        /// Slice end (exclusive).
        hi: usize,
        /// Number of elements covered by the table.
        len: usize,
    },

    /// Prefix table built for a different sequence length than the instance.
    #[error("prefix table covers {actual} elements but instance has n={expected}")]
    PrefixMismatch {
        /// Instance `n`.
        expected: usize,
        /// Elements covered by the prefix table.
        actual: usize,
    },

    /// Exact `i128` arithmetic overflowed.
    #[error("arithmetic overflow evaluating slice [{lo}, {hi})")]
    Overflow {
        /// Slice start.
        lo: usize,
        /// Slice end (exclusive).
        hi: usize,
    },
}

impl PartitionError {
    /// Whether this error is a user-facing invalid-input condition.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidGroupCount { .. } | Self::LengthMismatch { .. } | Self::Malformed { .. }
        )
    }
}
