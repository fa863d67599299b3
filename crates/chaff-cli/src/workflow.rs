//! The interactive deletion workflow and its prompt-driver abstraction.
//!
//! All branching runs against the [`WorkflowDriver`] trait so tests can
//! script the operator's answers. Any declined or unrecognised answer is a
//! clean return — the only side effects before the final confirmation are
//! the prompts themselves.

use std::{
  io::{self, BufRead, Write},
  path::Path,
};

use anyhow::{Context, Result};
use chaff_core::{
  deletion::DeletionEngine,
  registry::{DeleteType, SchemaRegistry, VersionScope},
};

use crate::snapshot::{self, InactiveSnapshot};

// ─── Prompt driver ────────────────────────────────────────────────────────────

/// Blocking prompt I/O.
pub trait WorkflowDriver {
  /// Ask for a free-form line. The returned answer is trimmed.
  fn ask_line(&mut self, prompt: &str) -> Result<String>;

  /// Ask a question with a fixed answer set. Returns the matched option
  /// (case-insensitive), or `None` for an answer outside `options`.
  fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> Result<Option<String>> {
    let answer = self.ask_line(prompt)?;
    Ok(
      options
        .iter()
        .find(|option| option.eq_ignore_ascii_case(answer.trim()))
        .map(|option| option.to_string()),
    )
  }
}

/// Driver over the real terminal.
pub struct StdinDriver;

impl StdinDriver {
  pub fn new() -> Self { Self }
}

impl WorkflowDriver for StdinDriver {
  fn ask_line(&mut self, prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush().context("flushing prompt")?;
    let mut line = String::new();
    io::stdin()
      .lock()
      .read_line(&mut line)
      .context("reading answer")?;
    Ok(line.trim().to_string())
  }
}

// ─── Deletion workflow ────────────────────────────────────────────────────────

/// Drive the operator through the deletion workflow: load the inactive
/// snapshot, collect (delete type, version scope), confirm, run the engine
/// and report the tally.
pub async fn run_deletion<R, D>(registry: R, driver: &mut D, out_dir: &Path) -> Result<()>
where
  R: SchemaRegistry,
  D: WorkflowDriver,
{
  let subjects = match snapshot::load_inactive(out_dir)? {
    InactiveSnapshot::Loaded(subjects) => subjects,
    InactiveSnapshot::Missing => {
      print_missing_snapshot();
      return Ok(());
    }
    InactiveSnapshot::Empty => {
      print_empty_snapshot();
      return Ok(());
    }
  };

  println!();
  println!("Schema deletion operations");
  println!("------------------------------");
  let confirmed =
    driver.ask_choice("Do you want to perform delete operations? (yes/no): ", &["yes", "no"])?;
  if confirmed.as_deref() != Some("yes") {
    println!("Operation cancelled. Exiting.");
    return Ok(());
  }

  println!();
  println!("Delete operation types:");
  println!("  soft: versions can be restored");
  println!("  hard: permanent removal");
  let delete_type = match driver
    .ask_choice("Select the type of delete operation (soft/hard): ", &["soft", "hard"])?
    .as_deref()
  {
    Some("soft") => DeleteType::Soft,
    Some("hard") => DeleteType::Hard,
    _ => {
      println!("Invalid option selected. Exiting.");
      return Ok(());
    }
  };

  println!();
  println!("Delete version options:");
  println!("  all:      every version");
  println!("  specific: one version number");
  println!("  latest:   the latest version only");
  let scope = match driver
    .ask_choice(
      "Which versions do you want to delete? (all/specific/latest): ",
      &["all", "specific", "latest"],
    )?
    .as_deref()
  {
    Some("all") => VersionScope::All,
    Some("latest") => VersionScope::Latest,
    Some("specific") => {
      let line = driver.ask_line("Enter the version number to delete: ")?;
      match line.trim().parse::<u32>() {
        Ok(version) => VersionScope::Specific(version),
        Err(_) => {
          println!("Invalid version number. Exiting.");
          return Ok(());
        }
      }
    }
    _ => {
      println!("Invalid version option selected. Exiting.");
      return Ok(());
    }
  };

  println!();
  println!("Deletion operation summary:");
  println!("------------------------------");
  println!("Operation type: {delete_type} delete");
  println!("Version selection: {scope}");
  println!("Total schemas to process: {}", subjects.len());
  let proceed = driver.ask_choice("Proceed with deletion? (yes/no): ", &["yes", "no"])?;
  if proceed.as_deref() != Some("yes") {
    println!("Operation cancelled. Exiting.");
    return Ok(());
  }

  println!();
  println!("Processing schema deletions...");
  let engine = DeletionEngine::new(registry);
  let report = engine.run(&subjects, delete_type, scope).await;

  println!();
  println!("Deletion operation summary");
  println!("------------------------------");
  println!("Total schemas processed: {}", report.total());
  println!("Successfully deleted: {}", report.success_count());
  println!("Failed to delete: {}", report.failure_count());
  Ok(())
}

// ─── Snapshot diagnostics ─────────────────────────────────────────────────────

fn print_missing_snapshot() {
  println!();
  println!("Error: schema file check");
  println!("------------------------------");
  println!("✗ {} not found", snapshot::INACTIVE_FILE);
  println!();
  println!("Possible reasons:");
  println!("  1. The mapping process has not been run yet");
  println!("  2. The file was deleted or moved");
  println!();
  println!("Suggestion: run the mapping process first to generate the file");
}

fn print_empty_snapshot() {
  println!();
  println!("Status check results:");
  println!("------------------------------");
  println!("✗ No inactive schemas found to delete");
  println!("✓ File exists but contains no schemas");
  println!();
  println!("Possible reasons:");
  println!("  1. All schemas are currently active");
  println!("  2. The previous mapping found no inactive schemas");
  println!();
  println!("Suggestion: run the mapping process again to refresh the status");
}

// ─── Tests ───────────────────────────────────────────────────────────────────
