//! Subject — a registry-side schema identifier.
//!
//! Under the topic-name strategy a subject is named `<topic>-key` or
//! `<topic>-value`. The suffix-stripped form is the subject's *base name*,
//! which is what gets matched against broker topic names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which half of a topic's messages a subject's schema describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectRole {
  Key,
  Value,
}

/// A schema-registry subject name.
///
/// Serializes as a bare JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(String);

impl Subject {
  pub fn new(name: impl Into<String>) -> Self { Self(name.into()) }

  pub fn as_str(&self) -> &str { &self.0 }

  /// The role implied by the `-key`/`-value` suffix.
  ///
  /// Subjects named under a different strategy have no role; they are never
  /// assigned to a reconciliation record.
  pub fn role(&self) -> Option<SubjectRole> {
    if self.0.ends_with("-key") {
      Some(SubjectRole::Key)
    } else if self.0.ends_with("-value") {
      Some(SubjectRole::Value)
    } else {
      None
    }
  }

  /// The subject name with its role suffix stripped. A subject without a
  /// role suffix is its own base name.
  pub fn base_name(&self) -> &str {
    self
      .0
      .strip_suffix("-key")
      .or_else(|| self.0.strip_suffix("-value"))
      .unwrap_or(&self.0)
  }
}

impl fmt::Display for Subject {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for Subject {
  fn from(name: &str) -> Self { Self(name.to_string()) }
}

impl From<String> for Subject {
  fn from(name: String) -> Self { Self(name) }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn key_suffix() {
    let s = Subject::new("orders-key");
    assert_eq!(s.role(), Some(SubjectRole::Key));
    assert_eq!(s.base_name(), "orders");
  }

  #[test]
  fn value_suffix() {
    let s = Subject::new("orders-value");
    assert_eq!(s.role(), Some(SubjectRole::Value));
    assert_eq!(s.base_name(), "orders");
  }

  #[test]
  fn no_suffix() {
    let s = Subject::new("orders");
    assert_eq!(s.role(), None);
    assert_eq!(s.base_name(), "orders");
  }

  #[test]
  fn suffix_only_names() {
    // Degenerate but legal registry names.
    assert_eq!(Subject::new("-key").base_name(), "");
    assert_eq!(Subject::new("-value").base_name(), "");
  }

  #[test]
  fn serializes_as_bare_string() {
    let json = serde_json::to_string(&Subject::new("orders-key")).unwrap();
    assert_eq!(json, "\"orders-key\"");
  }
}
