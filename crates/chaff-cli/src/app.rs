//! Run modes: the menu, the mapping phase, and dispatch into the deletion
//! workflow.

use std::path::Path;

use anyhow::{Context, Result};
use chaff_core::{broker::TopicLister, classify::classify, reconcile::reconcile, registry::SchemaRegistry};
use tracing::info;

use crate::{
  snapshot,
  workflow::{self, WorkflowDriver},
};

/// Run one interactive session.
///
/// Both modes execute the mapping phase (fetch, reconcile, classify, write
/// snapshots); mode `2` continues into the deletion workflow. A fetch
/// failure aborts before any file is written.
pub async fn run<R, L, D>(registry: R, lister: &L, driver: &mut D, out_dir: &Path) -> Result<()>
where
  R: SchemaRegistry,
  L: TopicLister,
  D: WorkflowDriver,
{
  println!("Schema operations for the chaff cleanup tool");
  println!("Choose an option to proceed:");
  println!("  1. Check and display schema mapping results only");
  println!("  2. Full mode: check, display results, and manage schema deletion");

  let Some(choice) = driver.ask_choice("Enter your choice (1/2): ", &["1", "2"])? else {
    println!("Invalid choice. Exiting.");
    return Ok(());
  };

  println!("Fetching subjects and topics...");
  let subjects = registry
    .list_subjects()
    .await
    .context("listing registry subjects")?;
  let topics = lister.list_topics().await.context("listing broker topics")?;
  info!(subjects = subjects.len(), topics = topics.len(), "fetched");

  println!("Mapping topics and subjects...");
  let records = reconcile(&topics, &subjects);
  let (active, inactive) = classify(records.clone());

  snapshot::write_all(out_dir, &records, &active, &inactive)
    .context("writing snapshot files")?;

  println!("Processing complete. Generated files:");
  println!("  - {}", snapshot::MAPPING_FILE);
  println!("  - {}", snapshot::ACTIVE_FILE);
  println!("  - {}", snapshot::INACTIVE_FILE);
  println!("Active schemas: {}, inactive schemas: {}", active.len(), inactive.len());

  if choice == "2" {
    workflow::run_deletion(registry, driver, out_dir).await
  } else {
    println!("Check-only mode selected. No deletion operations performed.");
    Ok(())
  }
}
