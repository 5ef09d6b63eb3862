//! The error reporter and the factory functions that build it.

mod error;
pub mod stacktrace;

use std::{fmt, time::Duration};

pub use error::ReporterError;

use crate::{
    config::ReporterConfig,
    models::{Envelope, ErrorEvent},
    publisher::{BrokerClient, KafkaBrokerClient, KeyGenerator, PublisherError, UuidKeyGenerator},
};

/// Publishes error events for one host service.
///
/// A reporter is created once, shared (e.g. behind an `Arc`) by every call
/// site that reports errors, and closed during shutdown. It does not retry,
/// buffer or batch: each `report` is exactly one broker write.
pub struct ErrorReporter {
    source: String,
    topic: String,
    capture_stacktrace: bool,
    close_timeout: Duration,
    client: Box<dyn BrokerClient>,
    keys: Box<dyn KeyGenerator>,
}

impl ErrorReporter {
    fn new(config: &ReporterConfig, client: Box<dyn BrokerClient>) -> Self {
        Self {
            source: config.source.clone(),
            topic: config.topic.clone(),
            capture_stacktrace: config.capture_stacktrace,
            close_timeout: config.close_timeout,
            client,
            keys: Box::new(UuidKeyGenerator),
        }
    }

    /// Replaces the generator used for message keys.
    pub fn with_key_generator(mut self, keys: impl KeyGenerator + 'static) -> Self {
        self.keys = Box::new(keys);
        self
    }

    /// Publishes one envelope for `event`.
    ///
    /// Errors from the broker client are returned unchanged. An envelope that
    /// cannot be encoded is dropped without error.
    pub async fn report(&self, event: &ErrorEvent) -> Result<(), PublisherError> {
        let stacktrace = if self.capture_stacktrace { Some(stacktrace::capture()) } else { None };
        let envelope = Envelope::new(&self.source, event, stacktrace);

        let payload = match serde_json::to_vec(&envelope) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, code = %event.code, "Discarding unencodable error event.");
                return Ok(());
            }
        };

        let key = self.keys.generate();
        tracing::trace!(key = %key, topic = %self.topic, "Publishing error event.");

        self.client.send(&self.topic, &key, &payload).await
    }

    /// Releases the broker client.
    ///
    /// Callers must let in-flight `report` calls finish first; taking `self`
    /// by value guarantees the client is closed only once.
    pub async fn close(self) -> Result<(), PublisherError> {
        tracing::debug!(source = %self.source, topic = %self.topic, "Closing error reporter.");
        self.client.close(self.close_timeout).await
    }
}

impl fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReporter").finish_non_exhaustive()
    }
}

/// Creates a Kafka-backed reporter with default producer settings.
pub fn create<S, B>(
    source: impl Into<String>,
    brokers: B,
    topic: impl Into<String>,
    secure: bool,
) -> Result<ErrorReporter, ReporterError>
where
    B: IntoIterator<Item = S>,
    S: Into<String>,
{
    create_from_config(&ReporterConfig::new(source, brokers, topic, secure))
}

/// Creates a Kafka-backed reporter from a full configuration.
pub fn create_from_config(config: &ReporterConfig) -> Result<ErrorReporter, ReporterError> {
    config.validate()?;
    let client = KafkaBrokerClient::from_config(config)?;
    Ok(ErrorReporter::new(config, Box::new(client)))
}

/// Creates a reporter that writes through a caller-provided broker client.
///
/// The configuration is validated exactly as for a Kafka-backed reporter.
pub fn create_with_client(
    config: &ReporterConfig,
    client: impl BrokerClient + 'static,
) -> Result<ErrorReporter, ReporterError> {
    config.validate()?;
    Ok(ErrorReporter::new(config, Box::new(client)))
}
