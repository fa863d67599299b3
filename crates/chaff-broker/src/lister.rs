//! Topic listing via the broker's command-line tools.

use std::path::PathBuf;

use chaff_core::broker::TopicLister;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Settings for the stock `kafka-topics` invocation.
#[derive(Debug, Clone)]
pub struct BrokerConfig {
  /// The listing binary; `kafka-topics` unless overridden.
  pub topics_bin:       String,
  /// Broker bootstrap address, `host:port`.
  pub bootstrap_server: String,
  /// Client properties file passed as `--command-config`.
  pub command_config:   Option<PathBuf>,
}

/// [`TopicLister`] that runs an external listing command.
///
/// The command is expected to print one topic per stdout line. Blank lines
/// and `_`-prefixed internal topics are dropped; a non-zero exit fails the
/// whole run.
pub struct CommandTopicLister {
  program: String,
  args:    Vec<String>,
}

impl CommandTopicLister {
  /// The standard `kafka-topics --list` invocation for `config`.
  pub fn new(config: &BrokerConfig) -> Self {
    let mut args = vec![
      "--list".to_string(),
      "--bootstrap-server".to_string(),
      config.bootstrap_server.clone(),
    ];
    if let Some(path) = &config.command_config {
      args.push("--command-config".to_string());
      args.push(path.display().to_string());
    }
    Self { program: config.topics_bin.clone(), args }
  }

  /// Use an arbitrary command instead of `kafka-topics`. Any program that
  /// prints one topic per line works.
  pub fn with_command(program: impl Into<String>, args: Vec<String>) -> Self {
    Self { program: program.into(), args }
  }
}

impl TopicLister for CommandTopicLister {
  type Error = Error;

  async fn list_topics(&self) -> Result<Vec<String>> {
    debug!(program = %self.program, args = ?self.args, "listing topics");

    let output = Command::new(&self.program)
      .args(&self.args)
      .output()
      .await
      .map_err(|source| Error::Spawn { program: self.program.clone(), source })?;

    if !output.status.success() {
      return Err(Error::CommandFailed {
        program: self.program.clone(),
        status:  output.status,
        stderr:  String::from_utf8_lossy(&output.stderr).trim().to_string(),
      });
    }

    let stdout = String::from_utf8(output.stdout)
      .map_err(|_| Error::NonUtf8Output { program: self.program.clone() })?;

    Ok(
      stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('_'))
        .map(str::to_string)
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builds_the_standard_invocation() {
    let lister = CommandTopicLister::new(&BrokerConfig {
      topics_bin:       "kafka-topics".to_string(),
      bootstrap_server: "broker:9092".to_string(),
      command_config:   Some(PathBuf::from("/etc/kafka/client.properties")),
    });
    assert_eq!(lister.program, "kafka-topics");
    assert_eq!(
      lister.args,
      vec![
        "--list",
        "--bootstrap-server",
        "broker:9092",
        "--command-config",
        "/etc/kafka/client.properties",
      ]
    );
  }

  #[test]
  fn omits_command_config_when_unset() {
    let lister = CommandTopicLister::new(&BrokerConfig {
      topics_bin:       "kafka-topics".to_string(),
      bootstrap_server: "broker:9092".to_string(),
      command_config:   None,
    });
    assert_eq!(lister.args, vec!["--list", "--bootstrap-server", "broker:9092"]);
  }

  #[tokio::test]
  async fn filters_internal_topics_and_blank_lines() {
    let lister = CommandTopicLister::with_command(
      "printf",
      vec!["orders\\n_consumer_offsets\\n\\npayments\\n".to_string()],
    );
    let topics = lister.list_topics().await.unwrap();
    assert_eq!(topics, vec!["orders", "payments"]);
  }

  #[tokio::test]
  async fn non_zero_exit_is_a_command_failure() {
    let lister = CommandTopicLister::with_command("false", vec![]);
    let err = lister.list_topics().await.unwrap_err();
    assert!(matches!(err, Error::CommandFailed { .. }));
  }

  #[tokio::test]
  async fn missing_binary_is_a_spawn_error() {
    let lister = CommandTopicLister::with_command("chaff-no-such-binary", vec![]);
    let err = lister.list_topics().await.unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }));
  }
}
