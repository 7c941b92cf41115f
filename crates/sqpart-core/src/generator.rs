//! Deterministic random instances used by the CLI `generate` subcommand and
//! the benchmarks.

use rand::{rngs::StdRng, Rng as _, SeedableRng};

use crate::InstanceRecord;

/// Generate `n` values drawn uniformly from `[-magnitude, magnitude]`.
///
/// The same `(n, k, magnitude, seed)` always yields the same record. `k` is
/// copied as-is, so out-of-range group counts survive until validation.
#[must_use]
pub fn generate_instance(n: usize, k: usize, magnitude: u32, seed: u64) -> InstanceRecord {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = i64::from(magnitude);
    let values = (0..n).map(|_| rng.random_range(-m..=m)).collect();

    InstanceRecord {
        n: i64::try_from(n).unwrap_or(i64::MAX),
        k: i64::try_from(k).unwrap_or(i64::MAX),
        values,
    }
}
