//! Error types for the registry client.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to build HTTP client: {0}")]
  BuildClient(#[source] reqwest::Error),

  #[error("reading CA certificate {path}: {source}")]
  ReadCaCert {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid CA certificate {path}: {source}")]
  InvalidCaCert {
    path:   PathBuf,
    #[source]
    source: reqwest::Error,
  },

  #[error("GET /subjects failed: {0}")]
  ListSubjects(#[source] reqwest::Error),

  #[error("GET /subjects → {0}")]
  ListStatus(reqwest::StatusCode),

  #[error("deserialising subject list: {0}")]
  Deserialize(#[source] reqwest::Error),

  #[error("DELETE {path} failed: {source}")]
  Delete {
    path:   String,
    #[source]
    source: reqwest::Error,
  },

  #[error("DELETE {path} → {status}")]
  UnexpectedStatus {
    path:   String,
    status: reqwest::StatusCode,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
