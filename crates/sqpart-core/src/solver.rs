//! `O(n²k)` dynamic program over `(prefix length i, group count j)`.
//!
//! ```text
//! dp[0][0] = 0
//! dp[i][j] = min over x in [j-1, i-1] of dp[x][j-1] + cost(x, i)
//! ```
//!
//! Candidates are scanned with `x` ascending and replace the incumbent only
//! on a strictly smaller value, so the earliest optimal cut is kept. Output
//! is therefore fully deterministic.
//!
//! A candidate whose exact value overflows `i128` is larger than any
//! representable one and is skipped; states that stay representable remain
//! exact. If `dp[n][k]` itself cannot be represented, [`solve`] reports
//! [`PartitionError::Overflow`].

use crate::{
    reconstruct, Cost, CostTable, Instance, PartitionError, PrefixSums, Solution, SquaredSumCost,
    TransitionTable,
};
use tracing::{debug, info_span};

/// Filled DP and transition tables for one instance.
#[derive(Clone, Debug)]
pub struct SolvedTables {
    /// `dp[i][j]`.
    pub costs: CostTable,
    /// `transition[i][j]`.
    pub transitions: TransitionTable,
}

impl SolvedTables {
    /// Minimum cost of splitting the first `i` elements into `j` groups.
    #[inline]
    #[must_use]
    pub fn cost_at(&self, i: usize, j: usize) -> Option<Cost> {
        self.costs.get(i, j).copied().flatten()
    }
}

/// Fill `dp` and `transition` for `instance`.
///
/// `prefix` must be built from `instance.values()`; a table of a different
/// length is rejected with [`PartitionError::PrefixMismatch`].
pub fn fill_tables(
    instance: &Instance,
    prefix: &PrefixSums,
) -> Result<SolvedTables, PartitionError> {
    let (n, k) = (instance.n(), instance.k());
    if prefix.len() != n {
        return Err(PartitionError::PrefixMismatch {
            expected: n,
            actual: prefix.len(),
        });
    }
    let cost = SquaredSumCost::new(prefix);

    let mut costs = CostTable::for_costs(n, k);
    let mut transitions = TransitionTable::for_transitions(n, k);

    for i in 1..=n {
        // j > i has an empty candidate range; leave it unreachable.
        for j in 1..=k.min(i) {
            let mut best: Option<Cost> = None;
            let mut best_x: Option<usize> = None;
            for x in (j - 1)..i {
                let Some(prev) = costs[(x, j - 1)] else { continue };
                let candidate = match cost.cost(x, i) {
                    Ok(c) => prev.checked_add(c),
                    Err(PartitionError::Overflow { .. }) => None,
                    Err(e) => return Err(e),
                };
                let Some(candidate) = candidate else { continue };
                if best.map_or(true, |b| candidate < b) {
                    best = Some(candidate);
                    best_x = Some(x);
                }
            }
            costs[(i, j)] = best;
            transitions[(i, j)] = best_x;
        }
    }

    Ok(SolvedTables { costs, transitions })
}

/// Solve `instance`: minimum cost plus the partition achieving it.
///
/// Allocates fresh tables per call; safe to call concurrently.
pub fn solve(instance: &Instance) -> Result<Solution, PartitionError> {
    let (n, k) = (instance.n(), instance.k());
    let span = info_span!("solve", n, k);
    let _enter = span.enter();

    let prefix = PrefixSums::new(instance.values())?;
    debug!("prefix sums built");

    let tables = fill_tables(instance, &prefix)?;
    let cost = tables
        .cost_at(n, k)
        .ok_or(PartitionError::Overflow { lo: 0, hi: n })?;
    debug!(%cost, "dp tables filled");

    let boundaries = reconstruct(&tables.transitions, n, k)?;
    debug!(%boundaries, "partition reconstructed");

    Ok(Solution { cost, boundaries })
}
