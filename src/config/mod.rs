//! Configuration module for the error reporter.

mod error;
mod helpers;
mod producer;
mod reporter_config;

pub use error::ConfigError;
pub use helpers::{
    deserialize_brokers, deserialize_duration_from_seconds, serialize_duration_to_seconds,
};
pub use producer::ProducerConfig;
pub use reporter_config::{ENV_PREFIX, ReporterConfig};
