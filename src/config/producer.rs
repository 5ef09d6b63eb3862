use serde::{Deserialize, Serialize};

/// Producer tuning passed through to librdkafka.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProducerConfig {
    /// The maximum time in milliseconds to wait for a message to be delivered,
    /// including the time spent resolving and connecting to brokers.
    /// librdkafka property: `message.timeout.ms`
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,

    /// The compression codec to use for compressing message sets.
    /// Common values: none, gzip, snappy, lz4, zstd.
    /// librdkafka property: `compression.codec`
    #[serde(default = "default_compression_codec")]
    pub compression_codec: String,

    /// The number of acknowledgments the producer requires the leader to have
    /// received before considering a request complete.
    /// librdkafka property: `acks`
    #[serde(default = "default_acks")]
    pub acks: String,
}

fn default_message_timeout_ms() -> u64 {
    5000
}
fn default_compression_codec() -> String {
    "none".to_string()
}
fn default_acks() -> String {
    "all".to_string()
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: default_message_timeout_ms(),
            compression_codec: default_compression_codec(),
            acks: default_acks(),
        }
    }
}
