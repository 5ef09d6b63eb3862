use thiserror::Error;

/// Errors raised while building or validating a reporter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The emitting service was not named.
    #[error("No error source provided.")]
    MissingSource,

    /// The broker list is empty.
    #[error("Broker list cannot be empty.")]
    NoBrokers,

    /// The destination topic was not named.
    #[error("Error topic name not provided.")]
    MissingTopic,

    /// The configuration file or environment could not be read.
    #[error("Failed to load reporter configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}
