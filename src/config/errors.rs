use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: [{0}] is required")]
    MissingField(&'static str),
    #[error("Configuration error: [{field}] is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String
    },
    #[error("Configuration error: could not read [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error("Configuration error: could not parse [{path}]: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error
    },
    #[error("Configuration error: no .cybersource file found in the working directory or home directory")]
    NotFound
}

impl ConfigError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField { field, reason: reason.into() }
    }
}
