//! Squared-sum slice cost: `cost(lo, hi) = (a[lo] + … + a[hi-1])²`.
//!
//! Exactness: for any partition, `Σ s_g² ≤ (Σ |s_g|)² ≤ (Σ |a|)²`, so every
//! cost and every DP value fits `i128` whenever `Σ|a| < 2^63`. Outside that
//! range the checked arithmetic reports [`PartitionError::Overflow`] instead
//! of wrapping.

use crate::{Cost, PartitionError, PrefixSums};

/// Cost function bound to one prefix table.
#[derive(Clone, Copy, Debug)]
pub struct SquaredSumCost<'a> {
    prefix: &'a PrefixSums,
}

impl<'a> SquaredSumCost<'a> {
    /// Bind to a prefix table.
    #[inline]
    #[must_use]
    pub const fn new(prefix: &'a PrefixSums) -> Self {
        Self { prefix }
    }

    /// Cost of the slice `[lo, hi)`; `0` when empty.
    #[inline]
    pub fn cost(&self, lo: usize, hi: usize) -> Result<Cost, PartitionError> {
        let s = self.prefix.range_sum(lo, hi)?;
        s.checked_mul(s).ok_or(PartitionError::Overflow { lo, hi })
    }
}
