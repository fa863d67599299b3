//! Active / inactive partitioning of reconciliation records.

use crate::record::ReconciliationRecord;

/// Partition `records` into (active, inactive).
///
/// A record is **active** iff it has a topic and at least one subject;
/// **inactive** iff it has no topic and at least one subject. The
/// reconciler never emits subject-less records, but any that appear are
/// dropped rather than classified.
pub fn classify(
  records: Vec<ReconciliationRecord>,
) -> (Vec<ReconciliationRecord>, Vec<ReconciliationRecord>) {
  let mut active = Vec::new();
  let mut inactive = Vec::new();

  for record in records {
    if !record.has_subject() {
      continue;
    }
    if record.topic.is_some() {
      active.push(record);
    } else {
      inactive.push(record);
    }
  }

  (active, inactive)
}
