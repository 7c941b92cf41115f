//! Serialization helpers for [`InstanceRecord`]s and [`Solution`]s.
//!
//! JSON and CBOR read/write utilities with extension-based auto-detection.
//! Instances additionally accept the three-line `.txt` form understood by
//! [`crate::validate::parse_instance_text`]. Unknown/missing extensions are
//! rejected for reads and default to JSON for writes.
//!
//! Instance readers return the *unvalidated* record so callers can tell a
//! decoding failure apart from an invalid instance.

use crate::{parse_instance_text, InstanceRecord, Solution};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Ensure the parent directory for a file exists (no-op if none).
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", display(path)))?;
        }
    }
    Ok(())
}

/* ---------------- generic JSON / CBOR ---------------- */

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let f = File::open(path).with_context(|| format!("open {}", display(path)))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("deserialize JSON {what}"))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, v: &T, what: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create {}", display(path)))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, v).with_context(|| format!("serialize JSON {what}"))?;
    w.flush().with_context(|| "flush JSON writer")?;
    Ok(())
}

fn read_cbor<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let f = File::open(path).with_context(|| format!("open {}", display(path)))?;
    let mut rdr = BufReader::new(f);
    ciborium::de::from_reader(&mut rdr).with_context(|| format!("deserialize CBOR {what}"))
}

fn write_cbor<T: Serialize + ?Sized>(path: &Path, v: &T, what: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create {}", display(path)))?;
    let mut w = BufWriter::new(f);
    ciborium::ser::into_writer(v, &mut w).with_context(|| format!("serialize CBOR {what}"))?;
    w.flush().with_context(|| "flush CBOR writer")?;
    Ok(())
}

/* ---------------- instances ---------------- */

/// Read an instance from the three-line **text** form.
///
/// Parse failures are returned as [`crate::PartitionError::Malformed`] inside
/// the `anyhow` error so callers can downcast them.
pub fn read_instance_text<P: AsRef<Path>>(path: P) -> Result<InstanceRecord> {
    let path_ref = path.as_ref();
    let text =
        fs::read_to_string(path_ref).with_context(|| format!("read {}", display(path_ref)))?;
    Ok(parse_instance_text(&text)?)
}

/// Write an instance in the three-line **text** form.
pub fn write_instance_text<P: AsRef<Path>>(path: P, v: &InstanceRecord) -> Result<()> {
    let path_ref = path.as_ref();
    ensure_parent_dir(path_ref)?;
    let f = File::create(path_ref).with_context(|| format!("create {}", display(path_ref)))?;
    let mut w = BufWriter::new(f);
    writeln!(w, "{}", v.n)?;
    writeln!(w, "{}", v.k)?;
    let line = v
        .values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    writeln!(w, "{line}")?;
    w.flush().with_context(|| "flush text writer")?;
    Ok(())
}

/// Auto-detect instance **read** by extension (`.json` / `.cbor` / `.txt`).
pub fn read_instance_auto<P: AsRef<Path>>(path: P) -> Result<InstanceRecord> {
    let p = path.as_ref();
    match ext_lower(p).as_deref() {
        Some("json") => read_json(p, "instance"),
        Some("cbor") => read_cbor(p, "instance"),
        Some("txt") => read_instance_text(p),
        Some(other) => Err(anyhow!(
            "unsupported instance extension: {} (supported: .json, .cbor, .txt)",
            other
        )),
        None => Err(anyhow!("path has no extension (expected .json, .cbor or .txt)")),
    }
}

/// Auto-detect instance **write** (defaults to **JSON** if unknown or missing).
pub fn write_instance_auto<P: AsRef<Path>>(path: P, v: &InstanceRecord) -> Result<()> {
    let p = path.as_ref();
    match ext_lower(p).as_deref() {
        Some("cbor") => write_cbor(p, v, "instance"),
        Some("txt") => write_instance_text(p, v),
        _ => write_json(p, v, "instance"),
    }
}

/* ---------------- solutions ---------------- */

/// Auto-detect solution **read** by extension (`.json` / `.cbor`).
pub fn read_solution_auto<P: AsRef<Path>>(path: P) -> Result<Solution> {
    let p = path.as_ref();
    match ext_lower(p).as_deref() {
        Some("json") => read_json(p, "solution"),
        Some("cbor") => read_cbor(p, "solution"),
        Some(other) => Err(anyhow!(
            "unsupported solution extension: {} (supported: .json, .cbor)",
            other
        )),
        None => Err(anyhow!("path has no extension (expected .json or .cbor)")),
    }
}

/// Auto-detect solution **write** (defaults to **JSON** if unknown or missing).
pub fn write_solution_auto<P: AsRef<Path>>(path: P, v: &Solution) -> Result<()> {
    let p = path.as_ref();
    match ext_lower(p).as_deref() {
        Some("cbor") => write_cbor(p, v, "solution"),
        _ => write_json(p, v, "solution"),
    }
}

/* ---------------- helpers ---------------- */

fn ext_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Boundaries, PartitionError};
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("sqpart-io-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn instance_roundtrip_all_formats() {
        let rec = InstanceRecord::new(5, 2, vec![3, -1, 0, 9, -7]);
        for name in ["inst.json", "inst.cbor", "inst.txt", "inst.JSON"] {
            let p = scratch(name);
            write_instance_auto(&p, &rec).unwrap();
            assert_eq!(read_instance_auto(&p).unwrap(), rec, "{name}");
        }
    }

    #[test]
    fn solution_roundtrip_wide_cost() {
        let sol = Solution {
            cost: i128::from(i64::MAX) * 3,
            boundaries: Boundaries::new(vec![0, 2, 5]),
        };
        for name in ["sol.json", "sol.cbor"] {
            let p = scratch(name);
            write_solution_auto(&p, &sol).unwrap();
            assert_eq!(read_solution_auto(&p).unwrap(), sol, "{name}");
        }
    }

    #[test]
    fn malformed_text_is_downcastable() {
        let p = scratch("bad.txt");
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, "3\nfive\n1 2 3\n").unwrap();
        let e = read_instance_auto(&p).unwrap_err();
        let pe = e.downcast_ref::<PartitionError>().unwrap();
        assert!(pe.is_invalid_input());
    }

    #[test]
    fn rejects_unknown_extensions() {
        assert!(read_instance_auto("x.yaml").is_err());
        assert!(read_instance_auto("noext").is_err());
        assert!(read_solution_auto("x.txt").is_err());
    }
}
