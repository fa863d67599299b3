//! Broker topic listing for chaff.
//!
//! Implements [`chaff_core::broker::TopicLister`] by shelling out to the
//! broker's command-line tooling (`kafka-topics --list …` by default).

pub mod error;
pub mod lister;

pub use error::{Error, Result};
pub use lister::{BrokerConfig, CommandTopicLister};
