//! Independent re-check of a [`Solution`] against its [`Instance`].
//!
//! Does not touch the DP: the boundary shape is checked structurally and the
//! cost is recomputed by summing each group directly from the raw values.
//! Optimality is not checked here (see the brute-force tests for that).

use crate::{Cost, Instance, Solution};
use anyhow::{anyhow, ensure, Result};

/// Check shape (`k + 1` strictly increasing cut points from 0 to n) and cost.
pub fn verify_solution(instance: &Instance, solution: &Solution) -> Result<()> {
    let b = solution.boundaries.as_slice();
    let (n, k) = (instance.n(), instance.k());

    ensure!(
        b.len() == k + 1,
        "expected {} boundaries for k={k}, got {}",
        k + 1,
        b.len()
    );
    ensure!(b.first() == Some(&0), "boundaries must start at 0");
    ensure!(b.last() == Some(&n), "boundaries must end at n={n}");
    if let Some(w) = b.windows(2).find(|w| w[0] >= w[1]) {
        return Err(anyhow!(
            "boundaries not strictly increasing at {} -> {}",
            w[0],
            w[1]
        ));
    }

    let mut total: Cost = 0;
    for (lo, hi) in solution.boundaries.groups() {
        let sum = instance.values()[lo..hi]
            .iter()
            .try_fold(0 as Cost, |acc, &a| acc.checked_add(Cost::from(a)))
            .ok_or_else(|| anyhow!("group [{lo}, {hi}) sum overflows"))?;
        let sq = sum
            .checked_mul(sum)
            .ok_or_else(|| anyhow!("group [{lo}, {hi}) cost overflows"))?;
        total = total
            .checked_add(sq)
            .ok_or_else(|| anyhow!("total cost overflows"))?;
    }
    ensure!(
        total == solution.cost,
        "reported cost {} but boundaries give {total}",
        solution.cost
    );
    Ok(())
}
