//! sqpart-core: optimal k-way contiguous partition under squared-sum cost.
//!
//! Given `n` integers and a group count `k`, find cut points splitting the
//! sequence into exactly `k` contiguous, non-empty groups so that the sum over
//! groups of `(group sum)²` is minimal.
//!
//! The pipeline is strictly linear:
//! - [`validate`]: text parsing and `1 ≤ k ≤ n` / length checks,
//! - [`prefix`]: exact `O(1)` range sums,
//! - [`cost`]: the squared-sum slice cost,
//! - [`solver`]: the `O(n²k)` DP filling cost + transition tables,
//! - [`reconstruct`]: the backward walk producing [`Boundaries`],
//! - [`report`]: the two-line textual output.
//!
//! ```
//! use sqpart_core::{solve, Instance, InstanceRecord};
//!
//! let instance = Instance::try_from(InstanceRecord::new(4, 2, vec![1, 2, 3, 4]))?;
//! let solution = solve(&instance)?;
//! assert_eq!(solution.cost, 52);
//! assert_eq!(solution.boundaries.to_string(), "[0, 3, 4]");
//! # Ok::<(), sqpart_core::PartitionError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::doc_markdown
)]

/// Squared-sum slice cost over a prefix table.
pub mod cost;
/// Error taxonomy for the solving pipeline.
pub mod error;
/// Deterministic random instances (for sims/benches).
pub mod generator;
/// JSON/CBOR/text helpers with extension-based auto-detection.
pub mod io;
/// Prefix sums for exact `O(1)` range queries.
pub mod prefix;
/// Backward walk over the transition table.
pub mod reconstruct;
/// Two-line textual reporter.
pub mod report;
/// DP solver (cost + transition tables).
pub mod solver;
/// Dense row-major tables used by the solver.
pub mod table;
/// Canonical data types shared by the pipeline stages.
pub mod types;
/// Input parsing and validation.
pub mod validate;
/// Independent re-check of a solution against its instance.
pub mod verify;

pub use cost::SquaredSumCost;
pub use error::PartitionError;
pub use prefix::PrefixSums;
pub use reconstruct::reconstruct;
pub use report::{write_invalid_input, write_report, INVALID_INPUT_MESSAGE};
pub use solver::{fill_tables, solve, SolvedTables};
pub use table::{CostTable, Table, TransitionTable};
pub use types::*;
pub use validate::{parse_instance_text, validate};
pub use verify::verify_solution;

/// Commonly-used items for quick imports.
///
/// ```rust
/// use sqpart_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        error::PartitionError,
        report::{write_report, INVALID_INPUT_MESSAGE},
        solver::solve,
        types::*,
        validate::{parse_instance_text, validate},
    };
}
