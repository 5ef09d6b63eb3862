use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::PublisherError;

/// A client that writes keyed messages to a message broker.
///
/// Implementations must be safe to use from many tasks at once; the reporter
/// shares a single client across all concurrent `report` calls.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BrokerClient: Send + Sync {
    /// Write one message to the specified topic with the given key and payload.
    async fn send(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublisherError>;

    /// Release the client's resources, waiting up to the specified timeout
    /// for outstanding deliveries.
    async fn close(&self, timeout: Duration) -> Result<(), PublisherError>;
}
