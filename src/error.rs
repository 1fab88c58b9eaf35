//! Error types for catalog requests and configuration

use thiserror::Error;

/// Failure of a single catalog request.
///
/// Cloneable so it can ride inside iced messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Response status: {status} ({url})")]
    Status { status: u16, url: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Response body could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
