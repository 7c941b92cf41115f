//! Canonical types shared by the pipeline stages.
//!
//! These are re-exported at the crate root so callers can import
//! `sqpart_core::Instance`, `sqpart_core::Boundaries`, etc.
//!
//! Serialized forms stay conservative and portable (serde).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact cost / sum domain. Wide enough that any instance with
/// `Σ|values| < 2^63` never overflows (see [`crate::cost`]).
pub type Cost = i128;

/// Unvalidated instance as read from text, JSON or CBOR.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceRecord {
    /// Declared sequence length.
    pub n: i64,
    /// Requested number of groups.
    pub k: i64,
    /// The sequence itself (should have exactly `n` entries).
    pub values: Vec<i64>,
}

impl InstanceRecord {
    /// Construct a record (no validation).
    #[inline]
    #[must_use]
    pub const fn new(n: i64, k: i64, values: Vec<i64>) -> Self {
        Self { n, k, values }
    }
}

/// Validated instance: `1 ≤ k ≤ n` and `values.len() == n`.
///
/// Only obtainable through [`crate::validate::validate`] (or `TryFrom`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instance {
    pub(crate) k: usize,
    pub(crate) values: Vec<i64>,
}

impl Instance {
    /// Sequence length `n`.
    #[inline]
    #[must_use]
    pub fn n(&self) -> usize {
        self.values.len()
    }

    /// Group count `k`.
    #[inline]
    #[must_use]
    pub const fn k(&self) -> usize {
        self.k
    }

    /// The input sequence.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }
}

impl From<&Instance> for InstanceRecord {
    fn from(x: &Instance) -> Self {
        Self {
            n: i64::try_from(x.n()).unwrap_or(i64::MAX),
            k: i64::try_from(x.k).unwrap_or(i64::MAX),
            values: x.values.clone(),
        }
    }
}

/// Ordered cut points `0 = b[0] < b[1] < … < b[k] = n`.
///
/// Group `g` spans `[b[g], b[g+1])`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Boundaries(Vec<usize>);

impl Boundaries {
    /// Wrap raw indices (no validation; see [`crate::verify`]).
    #[inline]
    #[must_use]
    pub const fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Raw indices.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Number of groups described (`len - 1`, or 0 when empty).
    #[inline]
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Half-open `(lo, hi)` span of each group, left to right.
    pub fn groups(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// Consume into the raw index vector.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl fmt::Display for Boundaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, b) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{b}")?;
        }
        f.write_str("]")
    }
}

/// Minimum cost together with the partition achieving it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Solution {
    /// Sum over groups of `(group sum)²`.
    pub cost: Cost,
    /// Cut points of the optimal partition.
    pub boundaries: Boundaries,
}
