//! Theme controller and storage errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the theme controller and its configuration.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown theme `{name}` (expected one of: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("system theme is disabled in this configuration")]
    SystemDisabled,

    #[error("invalid theme configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to read theme configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse theme configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("a theme controller is already installed")]
    AlreadyInstalled,
}

impl ThemeError {
    pub(crate) fn unknown(name: &str, available: &[String]) -> Self {
        Self::UnknownTheme {
            name: name.to_string(),
            available: available.join(", "),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Errors raised by a [`ThemeStorage`](super::ThemeStorage) backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is not a JSON object: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
