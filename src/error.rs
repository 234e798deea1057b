use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single simulation run.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Integration failed: {0}")]
    Integration(String),
}

/// Failures loading a run configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error deserializing config")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] SimError),
}

/// Shorthand used by the checks in `validate` methods.
pub(crate) fn invalid(msg: impl Into<String>) -> SimError {
    SimError::InvalidConfiguration(msg.into())
}
