use thiserror::Error;

use crate::{config::ConfigError, publisher::PublisherError};

/// Errors that prevent a reporter from being created.
#[derive(Debug, Error)]
pub enum ReporterError {
    /// The configuration is incomplete.
    #[error("Invalid reporter configuration: {0}")]
    Config(#[from] ConfigError),

    /// The broker client could not be constructed.
    #[error("Failed to create broker client: {0}")]
    Publisher(#[from] PublisherError),
}
