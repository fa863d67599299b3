//! `chaff` — reconcile schema-registry subjects with broker topics and
//! clean up the orphans.
//!
//! # Usage
//!
//! ```
//! chaff --registry-url https://registry.internal:8081 --user ops --password secret \
//!       --bootstrap-server broker.internal:9092
//! chaff --config chaff.toml
//! ```

mod app;
mod snapshot;
mod workflow;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chaff_broker::{BrokerConfig, CommandTopicLister};
use chaff_registry::{RegistryClient, RegistryConfig};
use clap::Parser;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::workflow::StdinDriver;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "chaff", about = "Schema-registry cleanup for Kafka topics")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Base URL of the schema registry.
  #[arg(long, env = "CHAFF_REGISTRY_URL")]
  registry_url: Option<String>,

  /// Registry username.
  #[arg(long, env = "CHAFF_USER")]
  user: Option<String>,

  /// Registry password (plaintext).
  #[arg(long, env = "CHAFF_PASSWORD")]
  password: Option<String>,

  /// PEM CA certificate to trust for the registry's TLS endpoint.
  #[arg(long, env = "CHAFF_CA_CERT", value_name = "FILE")]
  ca_cert: Option<PathBuf>,

  /// Topic-listing binary.
  #[arg(long, env = "CHAFF_TOPICS_BIN")]
  topics_bin: Option<String>,

  /// Broker bootstrap address, host:port.
  #[arg(long, env = "CHAFF_BOOTSTRAP_SERVER")]
  bootstrap_server: Option<String>,

  /// Client properties file passed to the topic-listing command.
  #[arg(long, env = "CHAFF_COMMAND_CONFIG", value_name = "FILE")]
  command_config: Option<PathBuf>,

  /// Directory the snapshot files are written to.
  #[arg(long, env = "CHAFF_OUT_DIR", value_name = "DIR")]
  out_dir: Option<PathBuf>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  registry: RegistrySection,
  #[serde(default)]
  broker:   BrokerSection,
  #[serde(default)]
  out_dir:  Option<PathBuf>,
}

#[derive(Deserialize, Default)]
struct RegistrySection {
  #[serde(default)]
  url:      String,
  #[serde(default)]
  username: String,
  #[serde(default)]
  password: String,
  #[serde(default)]
  ca_cert:  Option<PathBuf>,
}

#[derive(Deserialize, Default)]
struct BrokerSection {
  #[serde(default)]
  topics_bin:       String,
  #[serde(default)]
  bootstrap_server: String,
  #[serde(default)]
  command_config:   Option<PathBuf>,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let registry_cfg = RegistryConfig {
    base_url: args
      .registry_url
      .or_else(|| (!file_cfg.registry.url.is_empty()).then(|| file_cfg.registry.url.clone()))
      .unwrap_or_else(|| "http://localhost:8081".to_string()),
    username: args
      .user
      .or_else(|| (!file_cfg.registry.username.is_empty()).then(|| file_cfg.registry.username.clone()))
      .unwrap_or_default(),
    password: args
      .password
      .or_else(|| (!file_cfg.registry.password.is_empty()).then(|| file_cfg.registry.password.clone()))
      .unwrap_or_default(),
    ca_cert:  args.ca_cert.or(file_cfg.registry.ca_cert),
  };

  let broker_cfg = BrokerConfig {
    topics_bin:       args
      .topics_bin
      .or_else(|| (!file_cfg.broker.topics_bin.is_empty()).then(|| file_cfg.broker.topics_bin.clone()))
      .unwrap_or_else(|| "kafka-topics".to_string()),
    bootstrap_server: args
      .bootstrap_server
      .or_else(|| {
        (!file_cfg.broker.bootstrap_server.is_empty())
          .then(|| file_cfg.broker.bootstrap_server.clone())
      })
      .unwrap_or_else(|| "localhost:9092".to_string()),
    command_config:   args.command_config.or(file_cfg.broker.command_config),
  };

  let out_dir = args
    .out_dir
    .or(file_cfg.out_dir)
    .unwrap_or_else(|| PathBuf::from("."));

  let registry = RegistryClient::new(registry_cfg).context("building registry client")?;
  let lister = CommandTopicLister::new(&broker_cfg);
  let mut driver = StdinDriver::new();

  app::run(registry, &lister, &mut driver, &out_dir).await
}
