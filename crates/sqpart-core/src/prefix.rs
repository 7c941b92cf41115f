//! Prefix sums: `P[0] = 0`, `P[t] = P[t-1] + a[t-1]`.
//!
//! Built once per instance, read-only afterward. All arithmetic is exact
//! in [`Cost`] (`i128`).

use crate::{Cost, PartitionError};

/// Cumulative sums of an input sequence (`n + 1` entries).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixSums {
    sums: Vec<Cost>,
}

impl PrefixSums {
    /// Build the table for `values`.
    pub fn new(values: &[i64]) -> Result<Self, PartitionError> {
        let mut sums = Vec::with_capacity(values.len() + 1);
        let mut acc: Cost = 0;
        sums.push(acc);
        for (t, &a) in values.iter().enumerate() {
            acc = acc
                .checked_add(Cost::from(a))
                .ok_or(PartitionError::Overflow { lo: 0, hi: t + 1 })?;
            sums.push(acc);
        }
        Ok(Self { sums })
    }

    /// Number of input elements covered (`n`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// Whether the underlying sequence is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry `P[t]`: sum of the first `t` elements.
    #[inline]
    #[must_use]
    pub fn get(&self, t: usize) -> Cost {
        self.sums[t]
    }

    /// Sum of `a[lo..hi]`; requires `lo <= hi <= n`.
    #[inline]
    pub fn range_sum(&self, lo: usize, hi: usize) -> Result<Cost, PartitionError> {
        if lo > hi || hi > self.len() {
            return Err(PartitionError::SliceOutOfRange {
                lo,
                hi,
                len: self.len(),
            });
        }
        self.sums[hi]
            .checked_sub(self.sums[lo])
            .ok_or(PartitionError::Overflow { lo, hi })
    }
}
