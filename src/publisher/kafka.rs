use std::time::Duration;

use rdkafka::{
    ClientConfig,
    producer::{FutureProducer, FutureRecord, Producer},
};

use crate::{
    config::ReporterConfig,
    publisher::{BrokerClient, PublisherError},
};

/// A Kafka broker client.
pub struct KafkaBrokerClient {
    producer: FutureProducer,
}

impl KafkaBrokerClient {
    /// Creates a new `KafkaBrokerClient` from the given `ReporterConfig`.
    ///
    /// No connection is attempted here; librdkafka connects in the background
    /// and any broker failure surfaces on the first `send`.
    pub fn from_config(config: &ReporterConfig) -> Result<Self, PublisherError> {
        let producer = client_config(config).create::<FutureProducer>()?;

        tracing::debug!(
            brokers = ?config.brokers,
            topic = %config.topic,
            secure = config.secure,
            "Kafka producer created."
        );

        Ok(Self { producer })
    }
}

/// Builds the librdkafka settings for a reporter configuration.
fn client_config(config: &ReporterConfig) -> ClientConfig {
    let mut client_config = ClientConfig::new();

    client_config
        .set("bootstrap.servers", config.brokers.join(","))
        // Keys are random, so hashing them spreads writes evenly over partitions
        // and therefore over the partition leaders.
        .set("partitioner", "consistent_random")
        .set("message.timeout.ms", config.producer.message_timeout_ms.to_string())
        .set("compression.codec", &config.producer.compression_codec)
        .set("acks", &config.producer.acks);

    // TLS uses the system trust store; no client certificate is presented.
    let protocol = if config.secure { "ssl" } else { "plaintext" };
    client_config.set("security.protocol", protocol);

    client_config
}

#[async_trait::async_trait]
impl BrokerClient for KafkaBrokerClient {
    async fn send(&self, topic: &str, key: &str, payload: &[u8]) -> Result<(), PublisherError> {
        let record = FutureRecord::to(topic).key(key).payload(payload);

        self.producer
            .send(record, Duration::from_secs(0))
            .await
            .map(|_| ())
            .map_err(|(kafka_error, _)| PublisherError::Kafka(kafka_error))
    }

    async fn close(&self, timeout: Duration) -> Result<(), PublisherError> {
        self.producer.flush(timeout).map_err(|e| e.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_plaintext() {
        let config = ReporterConfig::new(
            "billing-svc",
            ["kafka-1:9092", "kafka-2:9092"],
            "errors",
            false,
        );

        let client_config = client_config(&config);

        assert_eq!(client_config.get("bootstrap.servers"), Some("kafka-1:9092,kafka-2:9092"));
        assert_eq!(client_config.get("security.protocol"), Some("plaintext"));
        assert_eq!(client_config.get("partitioner"), Some("consistent_random"));
        assert_eq!(client_config.get("message.timeout.ms"), Some("5000"));
        assert_eq!(client_config.get("compression.codec"), Some("none"));
        assert_eq!(client_config.get("acks"), Some("all"));
    }

    #[test]
    fn test_client_config_secure() {
        let config = ReporterConfig::new("billing-svc", ["kafka-1:9094"], "errors", true);

        let client_config = client_config(&config);

        assert_eq!(client_config.get("security.protocol"), Some("ssl"));
        assert_eq!(client_config.get("ssl.certificate.location"), None);
        assert_eq!(client_config.get("ssl.key.location"), None);
    }

    #[tokio::test]
    async fn test_from_config_does_not_contact_brokers() {
        // Nothing listens on this port; creation must still succeed.
        let config = ReporterConfig::new("billing-svc", ["127.0.0.1:1"], "errors", false);

        let client = KafkaBrokerClient::from_config(&config).unwrap();

        assert!(client.close(Duration::from_secs(1)).await.is_ok());
    }
}
