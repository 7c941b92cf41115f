//! Two-line textual report: the minimum cost, then the boundary list.

use crate::Solution;
use std::io::{self, Write};

/// Literal printed for any invalid-input condition.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input!!";

/// Write `"{cost}\n{boundaries}\n"`.
pub fn write_report<W: Write>(w: &mut W, solution: &Solution) -> io::Result<()> {
    writeln!(w, "{}", solution.cost)?;
    writeln!(w, "{}", solution.boundaries)
}

/// Write the invalid-input line and nothing else.
pub fn write_invalid_input<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{INVALID_INPUT_MESSAGE}")
}
