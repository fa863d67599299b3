//! HTTP client for a Confluent-compatible schema registry.
//!
//! Implements [`chaff_core::registry::SchemaRegistry`] over reqwest with
//! basic auth and optional custom CA trust. No retries; every call maps to
//! exactly one request.

pub mod client;
pub mod error;

pub use client::{RegistryClient, RegistryConfig};
pub use error::{Error, Result};
