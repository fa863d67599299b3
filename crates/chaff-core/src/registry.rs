//! The `SchemaRegistry` capability and delete-call parameters.
//!
//! The trait is implemented by `chaff-registry` over HTTP; tests substitute
//! in-memory fakes. The deletion engine and the operator workflow depend on
//! this abstraction, not on any concrete client.

use std::fmt;

use crate::subject::Subject;

/// Whether a delete is reversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteType {
  /// Deregisters versions; the registry can restore them.
  Soft,
  /// Permanent removal. The registry requires the versions to have been
  /// soft-deleted first.
  Hard,
}

impl fmt::Display for DeleteType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DeleteType::Soft => f.write_str("soft"),
      DeleteType::Hard => f.write_str("hard"),
    }
  }
}

/// Which versions of a subject a delete applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionScope {
  All,
  Latest,
  Specific(u32),
}

impl fmt::Display for VersionScope {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      VersionScope::All => f.write_str("all"),
      VersionScope::Latest => f.write_str("latest"),
      VersionScope::Specific(version) => write!(f, "{version}"),
    }
  }
}

/// Abstraction over a schema registry.
pub trait SchemaRegistry {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All subject names known to the registry.
  async fn list_subjects(&self) -> Result<Vec<Subject>, Self::Error>;

  /// Delete `subject` under `scope`. `Ok(())` means the registry answered
  /// HTTP 200; any other status, timeout or transport failure is an error.
  async fn delete_subject(
    &self,
    subject: &Subject,
    scope: VersionScope,
    permanent: bool,
  ) -> Result<(), Self::Error>;
}
