//! The `TopicLister` capability.

/// Lists the topics that exist on the message broker.
///
/// Implementations exclude internal `_`-prefixed topics. A listing failure
/// is fatal to the run — there is no partial result to reconcile against.
pub trait TopicLister {
  type Error: std::error::Error + Send + Sync + 'static;

  async fn list_topics(&self) -> Result<Vec<String>, Self::Error>;
}
