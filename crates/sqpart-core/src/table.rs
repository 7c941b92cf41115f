//! Dense row-major `(n + 1) × (k + 1)` tables indexed by `(i, j)`.

use crate::Cost;
use std::ops::{Index, IndexMut};

/// Minimum cost per `(prefix length, group count)`; `None` = unreachable.
pub type CostTable = Table<Option<Cost>>;

/// Best previous boundary per `(prefix length, group count)`; `None` = unset.
pub type TransitionTable = Table<Option<usize>>;

/// Flat two-dimensional table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Clone> Table<T> {
    /// `rows × cols` table with every cell set to `fill`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        }
    }
}

impl<T> Table<T> {
    /// Number of rows (`n + 1`).
    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`k + 1`).
    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Checked lookup.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.rows && j < self.cols {
            self.cells.get(i * self.cols + j)
        } else {
            None
        }
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) outside {}x{} table",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}

impl<T> Index<(usize, usize)> for Table<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.cells[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Table<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        let at = self.offset(i, j);
        &mut self.cells[at]
    }
}

impl CostTable {
    /// Fresh DP table for `n` elements and `k` groups: only `(0, 0)` reachable.
    #[must_use]
    pub fn for_costs(n: usize, k: usize) -> Self {
        let mut t = Self::filled(n + 1, k + 1, None);
        t[(0, 0)] = Some(0);
        t
    }
}

impl TransitionTable {
    /// Fresh transition table for `n` elements and `k` groups, all unset.
    #[must_use]
    pub fn for_transitions(n: usize, k: usize) -> Self {
        Self::filled(n + 1, k + 1, None)
    }
}
