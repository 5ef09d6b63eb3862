#![warn(missing_docs)]
//! Publishes structured error events from a host service onto a Kafka topic,
//! where a monitoring pipeline can aggregate and alert on them.

pub mod config;
pub mod models;
pub mod publisher;
pub mod reporter;
pub mod test_helpers;

pub use config::{ConfigError, ReporterConfig};
pub use models::ErrorEvent;
pub use publisher::{BrokerClient, PublisherError};
pub use reporter::{ErrorReporter, ReporterError, create, create_from_config, create_with_client};
