//! Core types and trait definitions for the chaff schema-cleanup tool.
//!
//! This crate is deliberately free of HTTP and process-spawning
//! dependencies. The collaborator crates (`chaff-registry`, `chaff-broker`)
//! implement the capability traits defined here; the reconciler, classifier
//! and deletion engine are all expressed against those traits and plain
//! data.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod broker;
pub mod classify;
pub mod deletion;
pub mod reconcile;
pub mod record;
pub mod registry;
pub mod subject;

pub use record::ReconciliationRecord;
pub use subject::Subject;
