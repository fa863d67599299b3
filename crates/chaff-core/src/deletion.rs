//! The deletion engine — per-subject delete calls, tallied for reporting.

use std::time::Duration;

use tracing::{info, warn};

use crate::{
  registry::{DeleteType, SchemaRegistry, VersionScope},
  subject::Subject,
};

/// Pause between successive delete calls in the main pass, to avoid
/// hammering the registry.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

// ─── Outcomes ────────────────────────────────────────────────────────────────

/// The result of one tallied delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
  pub subject:   Subject,
  pub succeeded: bool,
}

/// Aggregated outcomes of a deletion run. Covers the main pass only; the
/// soft pre-pass of a hard run is not tallied.
#[derive(Debug, Default)]
pub struct DeletionReport {
  pub outcomes: Vec<DeletionOutcome>,
}

impl DeletionReport {
  pub fn total(&self) -> usize { self.outcomes.len() }

  pub fn success_count(&self) -> usize {
    self.outcomes.iter().filter(|o| o.succeeded).count()
  }

  pub fn failure_count(&self) -> usize {
    self.outcomes.iter().filter(|o| !o.succeeded).count()
  }
}

// ─── Engine ──────────────────────────────────────────────────────────────────

/// Issues delete calls against a [`SchemaRegistry`] one subject at a time.
///
/// A hard run soft-deletes the whole list first: registries in the
/// Confluent lineage refuse a permanent delete of versions that were never
/// soft-deleted. An individual failure in either pass is logged and never
/// stops the batch; there are no retries.
pub struct DeletionEngine<R> {
  registry: R,
  pause:    Duration,
}

impl<R: SchemaRegistry> DeletionEngine<R> {
  pub fn new(registry: R) -> Self {
    Self { registry, pause: DEFAULT_PAUSE }
  }

  /// Replace the inter-call pause. Tests use [`Duration::ZERO`].
  pub fn with_pause(mut self, pause: Duration) -> Self {
    self.pause = pause;
    self
  }

  /// Run one deletion batch over `subjects`.
  ///
  /// For [`DeleteType::Hard`] every subject receives a soft delete first
  /// (log-only), then a permanent delete under the same `scope`. The pause
  /// applies after every main-pass call; the pre-pass runs unpaced.
  pub async fn run(
    &self,
    subjects: &[Subject],
    delete_type: DeleteType,
    scope: VersionScope,
  ) -> DeletionReport {
    if delete_type == DeleteType::Hard {
      self.soft_pre_pass(subjects, scope).await;
    }

    let permanent = delete_type == DeleteType::Hard;
    let mut report = DeletionReport::default();

    for subject in subjects {
      info!(%subject, %delete_type, %scope, "deleting subject");
      let succeeded = match self.registry.delete_subject(subject, scope, permanent).await {
        Ok(()) => {
          info!(%subject, "deleted");
          true
        }
        Err(error) => {
          warn!(%subject, %error, "delete failed");
          false
        }
      };
      report.outcomes.push(DeletionOutcome { subject: subject.clone(), succeeded });
      tokio::time::sleep(self.pause).await;
    }

    report
  }

  /// The reversible pass ahead of a permanent run. Failures are logged and
  /// otherwise ignored.
  async fn soft_pre_pass(&self, subjects: &[Subject], scope: VersionScope) {
    info!("soft-deleting all subjects ahead of the permanent pass");
    for subject in subjects {
      if let Err(error) = self.registry.delete_subject(subject, scope, false).await {
        warn!(%subject, %error, "soft delete failed");
      }
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::{Arc, Mutex};

  use super::*;

  #[derive(Debug, Clone, PartialEq, Eq)]
  struct Call {
    subject:   String,
    scope:     VersionScope,
    permanent: bool,
  }

  /// In-memory registry that records every delete call and fails the
  /// subjects it is told to fail.
  #[derive(Clone, Default)]
  struct FakeRegistry {
    calls: Arc<Mutex<Vec<Call>>>,
    fail:  Vec<String>,
  }

  impl FakeRegistry {
    fn failing(subjects: &[&str]) -> Self {
      Self {
        calls: Arc::default(),
        fail:  subjects.iter().map(|s| s.to_string()).collect(),
      }
    }

    fn calls(&self) -> Vec<Call> {
      self.calls.lock().unwrap().clone()
    }
  }

  impl SchemaRegistry for FakeRegistry {
    type Error = std::io::Error;

    async fn list_subjects(&self) -> Result<Vec<Subject>, Self::Error> {
      Ok(Vec::new())
    }

    async fn delete_subject(
      &self,
      subject: &Subject,
      scope: VersionScope,
      permanent: bool,
    ) -> Result<(), Self::Error> {
      self.calls.lock().unwrap().push(Call {
        subject: subject.as_str().to_string(),
        scope,
        permanent,
      });
      if self.fail.iter().any(|f| f == subject.as_str()) {
        return Err(std::io::Error::other("simulated registry failure"));
      }
      Ok(())
    }
  }

  fn subjects(names: &[&str]) -> Vec<Subject> {
    names.iter().map(|n| Subject::new(*n)).collect()
  }

  fn engine(registry: FakeRegistry) -> DeletionEngine<FakeRegistry> {
    DeletionEngine::new(registry).with_pause(Duration::ZERO)
  }

  #[tokio::test]
  async fn soft_run_issues_one_call_per_subject() {
    let registry = FakeRegistry::default();
    let report = engine(registry.clone())
      .run(&subjects(&["a-key", "b-value"]), DeleteType::Soft, VersionScope::All)
      .await;

    assert_eq!(
      registry.calls(),
      vec![
        Call { subject: "a-key".to_string(), scope: VersionScope::All, permanent: false },
        Call { subject: "b-value".to_string(), scope: VersionScope::All, permanent: false },
      ]
    );
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failure_count(), 0);
  }

  #[tokio::test]
  async fn hard_run_issues_soft_then_hard_with_same_scope() {
    let registry = FakeRegistry::default();
    engine(registry.clone())
      .run(&subjects(&["a-key", "b-value"]), DeleteType::Hard, VersionScope::Specific(3))
      .await;

    let calls = registry.calls();
    assert_eq!(calls.len(), 4);
    // Full soft pass first, then the permanent pass over the same list.
    assert!(calls[..2].iter().all(|c| !c.permanent));
    assert!(calls[2..].iter().all(|c| c.permanent));
    assert!(calls.iter().all(|c| c.scope == VersionScope::Specific(3)));
    assert_eq!(calls[0].subject, "a-key");
    assert_eq!(calls[2].subject, "a-key");
  }

  #[tokio::test]
  async fn hard_run_tallies_main_pass_only() {
    let registry = FakeRegistry::default();
    let report = engine(registry.clone())
      .run(&subjects(&["a-key", "b-value", "c-key"]), DeleteType::Hard, VersionScope::Latest)
      .await;

    assert_eq!(report.total(), 3);
    assert_eq!(report.success_count(), 3);
  }

  #[tokio::test]
  async fn failures_are_counted_and_do_not_stop_the_batch() {
    let registry = FakeRegistry::failing(&["b-value"]);
    let report = engine(registry.clone())
      .run(
        &subjects(&["a-key", "b-value", "c-key"]),
        DeleteType::Soft,
        VersionScope::All,
      )
      .await;

    assert_eq!(report.total(), 3);
    assert_eq!(report.success_count(), 2);
    assert_eq!(report.failure_count(), 1);
    // The subject after the failure was still processed.
    assert_eq!(registry.calls().last().unwrap().subject, "c-key");
  }

  #[tokio::test]
  async fn pre_pass_failures_do_not_affect_the_tally() {
    let registry = FakeRegistry::failing(&["a-key"]);
    let report = engine(registry.clone())
      .run(&subjects(&["a-key", "b-value"]), DeleteType::Hard, VersionScope::All)
      .await;

    // a-key fails in both passes; only the main-pass failure is tallied.
    assert_eq!(registry.calls().len(), 4);
    assert_eq!(report.total(), 2);
    assert_eq!(report.success_count(), 1);
    assert_eq!(report.failure_count(), 1);
  }

  #[tokio::test]
  async fn success_plus_failure_covers_the_input() {
    let registry = FakeRegistry::failing(&["a-key", "c-key"]);
    let input = subjects(&["a-key", "b-value", "c-key", "d-value"]);
    let report = engine(registry).run(&input, DeleteType::Soft, VersionScope::All).await;

    assert_eq!(report.success_count() + report.failure_count(), input.len());
  }
}
