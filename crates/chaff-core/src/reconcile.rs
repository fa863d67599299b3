//! Topic ↔ subject reconciliation.

use crate::{
  record::ReconciliationRecord,
  subject::{Subject, SubjectRole},
};

/// Map every topic to its key/value subjects and surface the subjects left
/// over.
///
/// Two passes:
///
/// 1. One record per topic, populated by scanning all subjects for a
///    matching base name. On duplicate subject names the later match wins.
///    Records that end with neither field set are dropped, so a topic with
///    no registered schemas produces no record.
/// 2. One record per subject whose base name matches no topic, with
///    `topic = None` and the role-appropriate field set.
///
/// Subjects without a `-key`/`-value` suffix are never assigned to either
/// field and contribute no record of their own; this mirrors the registry
/// convention the rest of the pipeline assumes and must not be "fixed"
/// here, since changing it changes which subjects are reported orphaned.
///
/// Pass-1 records precede pass-2 records; within each pass, input order is
/// preserved.
pub fn reconcile(topics: &[String], subjects: &[Subject]) -> Vec<ReconciliationRecord> {
  let mut records = Vec::new();

  for topic in topics {
    let mut key = None;
    let mut value = None;
    for subject in subjects {
      if subject.base_name() != topic.as_str() {
        continue;
      }
      match subject.role() {
        Some(SubjectRole::Key) => key = Some(subject.clone()),
        Some(SubjectRole::Value) => value = Some(subject.clone()),
        None => {}
      }
    }
    let record = ReconciliationRecord { topic: Some(topic.clone()), key, value };
    if record.has_subject() {
      records.push(record);
    }
  }

  for subject in subjects {
    if topics.iter().any(|topic| topic.as_str() == subject.base_name()) {
      continue;
    }
    let (mut key, mut value) = (None, None);
    match subject.role() {
      Some(SubjectRole::Key) => key = Some(subject.clone()),
      Some(SubjectRole::Value) => value = Some(subject.clone()),
      None => continue,
    }
    records.push(ReconciliationRecord { topic: None, key, value });
  }

  records
}
