//! Error types for the topic lister.

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("spawning `{program}`: {source}")]
  Spawn {
    program: String,
    #[source]
    source:  std::io::Error,
  },

  #[error("`{program}` exited with {status}: {stderr}")]
  CommandFailed {
    program: String,
    status:  ExitStatus,
    stderr:  String,
  },

  #[error("`{program}` produced non-UTF-8 output")]
  NonUtf8Output { program: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
