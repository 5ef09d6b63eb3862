use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use super::{
    ConfigError, ProducerConfig, deserialize_brokers, deserialize_duration_from_seconds,
    serialize_duration_to_seconds,
};

/// Environment variable prefix used to override file settings, e.g.
/// `ERROR_REPORTER__TOPIC`.
pub const ENV_PREFIX: &str = "ERROR_REPORTER";

fn default_capture_stacktrace() -> bool {
    true
}

fn default_close_timeout() -> Duration {
    Duration::from_secs(5)
}

/// Configuration for an error reporter.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReporterConfig {
    /// Name of the service emitting error events.
    pub source: String,

    /// Kafka broker addresses, in order of preference.
    #[serde(deserialize_with = "deserialize_brokers")]
    pub brokers: Vec<String>,

    /// The topic error events are published to.
    pub topic: String,

    /// Whether to connect to the brokers over TLS.
    #[serde(default)]
    pub secure: bool,

    /// Whether to attach the call stack of `report` to each event.
    #[serde(default = "default_capture_stacktrace")]
    pub capture_stacktrace: bool,

    /// Producer-specific configuration properties.
    #[serde(default)]
    pub producer: ProducerConfig,

    /// How long `close` waits for in-flight deliveries, in seconds.
    #[serde(
        deserialize_with = "deserialize_duration_from_seconds",
        serialize_with = "serialize_duration_to_seconds",
        default = "default_close_timeout"
    )]
    pub close_timeout: Duration,
}

impl ReporterConfig {
    /// Creates a configuration with default producer settings.
    pub fn new<S, B>(
        source: impl Into<String>,
        brokers: B,
        topic: impl Into<String>,
        secure: bool,
    ) -> Self
    where
        B: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: source.into(),
            brokers: brokers.into_iter().map(Into::into).collect(),
            topic: topic.into(),
            secure,
            capture_stacktrace: default_capture_stacktrace(),
            producer: ProducerConfig::default(),
            close_timeout: default_close_timeout(),
        }
    }

    /// Loads `reporter.yaml` from `config_dir` (defaults to `configs`) and
    /// applies `ERROR_REPORTER__*` environment overrides on top of it.
    pub fn load(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir = config_dir.unwrap_or("configs");
        let settings = Config::builder()
            .add_source(File::with_name(&format!("{}/reporter.yaml", config_dir)))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Sets whether stack traces are captured.
    pub fn with_stacktrace(mut self, capture: bool) -> Self {
        self.capture_stacktrace = capture;
        self
    }

    /// Checks that source, brokers and topic are present, in that order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.is_empty() {
            return Err(ConfigError::MissingSource);
        }

        if self.brokers.is_empty() {
            return Err(ConfigError::NoBrokers);
        }

        if self.topic.is_empty() {
            return Err(ConfigError::MissingTopic);
        }

        Ok(())
    }
}
