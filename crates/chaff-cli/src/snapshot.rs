//! Durable snapshots of a mapping run.
//!
//! Three files per run: the full mapping (pretty JSON), the active subset
//! (pretty JSON), and the inactive subject names (one per line). The text
//! file is what the deletion workflow consumes on its next invocation.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use chaff_core::{ReconciliationRecord, Subject};

pub const MAPPING_FILE: &str = "result_mapping_schema.json";
pub const ACTIVE_FILE: &str = "active_schemas.json";
pub const INACTIVE_FILE: &str = "inactive_schemas.txt";

// ─── Writing ─────────────────────────────────────────────────────────────────

/// Write the three snapshot files for one mapping run into `dir`.
pub fn write_all(
  dir: &Path,
  records: &[ReconciliationRecord],
  active: &[ReconciliationRecord],
  inactive: &[ReconciliationRecord],
) -> Result<()> {
  fs::create_dir_all(dir)
    .with_context(|| format!("creating output directory {}", dir.display()))?;
  write_json(&dir.join(MAPPING_FILE), records)?;
  write_json(&dir.join(ACTIVE_FILE), active)?;
  write_inactive(&dir.join(INACTIVE_FILE), inactive)?;
  Ok(())
}

fn write_json(path: &Path, records: &[ReconciliationRecord]) -> Result<()> {
  let json = serde_json::to_string_pretty(records).context("serialising records")?;
  fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

/// One subject per line: each record's key subject, then its value subject.
fn write_inactive(path: &Path, records: &[ReconciliationRecord]) -> Result<()> {
  let mut out = String::new();
  for record in records {
    for subject in record.subjects() {
      out.push_str(subject.as_str());
      out.push('\n');
    }
  }
  fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// The inactive list read back for the deletion workflow.
///
/// The two degenerate cases are distinct on purpose: `Missing` means no
/// mapping run has produced a snapshot here, `Empty` means a run happened
/// and found nothing orphaned. The operator gets different advice for each.
#[derive(Debug, PartialEq, Eq)]
pub enum InactiveSnapshot {
  Missing,
  Empty,
  Loaded(Vec<Subject>),
}

/// Read `inactive_schemas.txt` from `dir`. Lines are trimmed; blank lines
/// are skipped. I/O errors other than the file being absent propagate.
pub fn load_inactive(dir: &Path) -> Result<InactiveSnapshot> {
  let path = dir.join(INACTIVE_FILE);
  let raw = match fs::read_to_string(&path) {
    Ok(raw) => raw,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(InactiveSnapshot::Missing),
    Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
  };

  let subjects: Vec<Subject> = raw
    .lines()
    .map(str::trim)
    .filter(|line| !line.is_empty())
    .map(Subject::new)
    .collect();

  if subjects.is_empty() {
    Ok(InactiveSnapshot::Empty)
  } else {
    Ok(InactiveSnapshot::Loaded(subjects))
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
