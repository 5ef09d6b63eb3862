/// Error types for broker clients.
#[derive(Debug, thiserror::Error)]
pub enum PublisherError {
    /// Kafka error
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// Error raised by a non-Kafka broker client.
    #[error("Broker error: {0}")]
    Broker(String),
}
