//! Input parsing and validation.
//!
//! Text form (three lines):
//! 1. `n`
//! 2. `k`
//! 3. `n` whitespace-separated integers
//!
//! Surrounding whitespace is ignored, a missing third line is an empty
//! sequence, and anything after the third line is ignored.

use crate::{Instance, InstanceRecord, PartitionError};

/// Parse the three-line text form into an unvalidated record.
pub fn parse_instance_text(text: &str) -> Result<InstanceRecord, PartitionError> {
    let mut lines = text.lines();
    let n = parse_scalar(lines.next(), 1)?;
    let k = parse_scalar(lines.next(), 2)?;
    let values = lines
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(|tok| {
            tok.parse::<i64>().map_err(|e| PartitionError::Malformed {
                line: 3,
                reason: format!("{tok:?}: {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InstanceRecord::new(n, k, values))
}

fn parse_scalar(line: Option<&str>, lineno: usize) -> Result<i64, PartitionError> {
    let raw = line.ok_or_else(|| PartitionError::Malformed {
        line: lineno,
        reason: "missing line".into(),
    })?;
    let tok = raw.trim();
    tok.parse::<i64>().map_err(|e| PartitionError::Malformed {
        line: lineno,
        reason: format!("{tok:?}: {e}"),
    })
}

/// Validate a record: `1 ≤ k ≤ n`, then `values.len() == n`.
pub fn validate(record: InstanceRecord) -> Result<Instance, PartitionError> {
    let InstanceRecord { n, k, values } = record;
    if k < 1 || k > n {
        return Err(PartitionError::InvalidGroupCount { n, k });
    }
    if usize::try_from(n).ok() != Some(values.len()) {
        return Err(PartitionError::LengthMismatch {
            expected: n,
            actual: values.len(),
        });
    }
    let k = usize::try_from(k).map_err(|_| PartitionError::InvalidGroupCount { n, k })?;
    Ok(Instance { k, values })
}

impl TryFrom<InstanceRecord> for Instance {
    type Error = PartitionError;

    fn try_from(record: InstanceRecord) -> Result<Self, Self::Error> {
        validate(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_lines() {
        let r = parse_instance_text("4\n2\n1 2 3 4\n").unwrap();
        assert_eq!(r, InstanceRecord::new(4, 2, vec![1, 2, 3, 4]));
    }

    #[test]
    fn tolerates_whitespace_and_trailing_lines() {
        let r = parse_instance_text("  3 \r\n1\n -1\t0  +7 \nignored\n").unwrap();
        assert_eq!(r, InstanceRecord::new(3, 1, vec![-1, 0, 7]));
    }

    #[test]
    fn missing_sequence_line_is_empty() {
        let r = parse_instance_text("2\n1").unwrap();
        assert!(r.values.is_empty());
        assert_eq!(
            validate(r),
            Err(PartitionError::LengthMismatch { expected: 2, actual: 0 })
        );
    }

    #[test]
    fn rejects_garbage_tokens() {
        let e = parse_instance_text("two\n1\n1 2\n").unwrap_err();
        assert!(matches!(e, PartitionError::Malformed { line: 1, .. }));
        let e = parse_instance_text("2\n1\n1 x\n").unwrap_err();
        assert!(matches!(e, PartitionError::Malformed { line: 3, .. }));
        let e = parse_instance_text("2\n").unwrap_err();
        assert!(matches!(e, PartitionError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_group_count_out_of_range() {
        for (n, k) in [(3, 5), (3, 0), (3, -1), (0, 1), (-2, 1)] {
            let e = validate(InstanceRecord::new(n, k, vec![0; 3])).unwrap_err();
            assert_eq!(e, PartitionError::InvalidGroupCount { n, k });
            assert!(e.is_invalid_input());
        }
    }

    #[test]
    fn rejects_length_mismatch() {
        let e = validate(InstanceRecord::new(3, 2, vec![1, 2])).unwrap_err();
        assert_eq!(e, PartitionError::LengthMismatch { expected: 3, actual: 2 });
        let e = validate(InstanceRecord::new(1, 1, vec![1, 2])).unwrap_err();
        assert_eq!(e, PartitionError::LengthMismatch { expected: 1, actual: 2 });
    }

    #[test]
    fn accepts_boundary_group_counts() {
        let i = validate(InstanceRecord::new(3, 3, vec![1, 2, 3])).unwrap();
        assert_eq!((i.n(), i.k()), (3, 3));
        let i = Instance::try_from(InstanceRecord::new(3, 1, vec![1, 2, 3])).unwrap();
        assert_eq!((i.n(), i.k()), (3, 1));
        assert_eq!(InstanceRecord::from(&i), InstanceRecord::new(3, 1, vec![1, 2, 3]));
    }
}
