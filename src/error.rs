//! Error types for configuration and Places API calls.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single Places API request.
///
/// Never escapes the client's public operations: callers log it and skip the
/// unit of work it belongs to.
#[derive(Error, Debug)]
pub enum PlacesError {
    /// Connection, timeout or non-success HTTP status
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),

    /// API answered with a non-success `status`
    #[error("API returned status {status}: {}", .message.as_deref().unwrap_or("no error message"))]
    Status {
        status: String,
        message: Option<String>,
    },
}

impl PlacesError {
    pub fn status<S: Into<String>>(status: S, message: Option<String>) -> Self {
        Self::Status {
            status: status.into(),
            message,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        Self::Invalid(message.into())
    }
}
