//! Backward walk from `(n, k)` through the transition table.
//!
//! Each step records the current prefix end `i`, jumps to the stored cut
//! `transition[i][j]`, and drops one group. The walk must land exactly on
//! `i = 0` when `j` reaches 0.

use crate::{Boundaries, PartitionError, TransitionTable};

/// Recover the `k + 1` boundaries of the partition ending at `(n, k)`.
///
/// Any unset entry, out-of-range index, non-decreasing jump, or final
/// position other than 0 is reported as [`PartitionError::Inconsistent`].
pub fn reconstruct(
    transitions: &TransitionTable,
    n: usize,
    k: usize,
) -> Result<Boundaries, PartitionError> {
    let mut out = Vec::with_capacity(k + 1);
    let (mut i, mut j) = (n, k);

    while j > 0 {
        out.push(i);
        let x = transitions
            .get(i, j)
            .copied()
            .flatten()
            .ok_or(PartitionError::Inconsistent { i, j })?;
        if x >= i {
            return Err(PartitionError::Inconsistent { i, j });
        }
        i = x;
        j -= 1;
    }
    if i != 0 {
        return Err(PartitionError::Inconsistent { i, j });
    }
    out.push(0);
    out.reverse();

    Ok(Boundaries::new(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-built table for n = 5, k = 3 encoding cuts at 2 and 4.
    fn hand_built() -> TransitionTable {
        let mut t = TransitionTable::for_transitions(5, 3);
        t[(5, 3)] = Some(4);
        t[(4, 2)] = Some(2);
        t[(2, 1)] = Some(0);
        t
    }

    #[test]
    fn walks_hand_built_table() {
        let b = reconstruct(&hand_built(), 5, 3).unwrap();
        assert_eq!(b.as_slice(), &[0, 2, 4, 5]);
    }

    #[test]
    fn unset_entry_is_fatal() {
        let mut t = hand_built();
        t[(4, 2)] = None;
        assert_eq!(
            reconstruct(&t, 5, 3),
            Err(PartitionError::Inconsistent { i: 4, j: 2 })
        );
    }

    #[test]
    fn non_decreasing_jump_is_fatal() {
        let mut t = hand_built();
        t[(4, 2)] = Some(4);
        assert_eq!(
            reconstruct(&t, 5, 3),
            Err(PartitionError::Inconsistent { i: 4, j: 2 })
        );
    }

    #[test]
    fn must_end_at_origin() {
        let mut t = hand_built();
        t[(2, 1)] = Some(1);
        assert_eq!(
            reconstruct(&t, 5, 3),
            Err(PartitionError::Inconsistent { i: 1, j: 0 })
        );
    }

    #[test]
    fn out_of_range_start_is_fatal() {
        let t = hand_built();
        assert_eq!(
            reconstruct(&t, 6, 3),
            Err(PartitionError::Inconsistent { i: 6, j: 3 })
        );
    }
}
