//! The reconciliation record — one row of the topic ↔ subject mapping.

use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// A topic together with the subjects whose base name matches it, or an
/// orphaned subject with no matching topic.
///
/// `topic` is `None` exactly when no broker topic matches the subject's
/// base name. At least one of `key`/`value` is always `Some`; rows where
/// both would be `None` never leave the reconciler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationRecord {
  pub topic: Option<String>,
  pub key:   Option<Subject>,
  pub value: Option<Subject>,
}

impl ReconciliationRecord {
  /// True when at least one subject field is populated.
  pub fn has_subject(&self) -> bool {
    self.key.is_some() || self.value.is_some()
  }

  /// The subjects carried by this record, key first.
  pub fn subjects(&self) -> impl Iterator<Item = &Subject> {
    self.key.iter().chain(self.value.iter())
  }
}
