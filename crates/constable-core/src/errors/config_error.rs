//! Configuration loading errors.

use std::path::PathBuf;

use super::error_code::{self, ConstableErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid option {cop}.{key}: expected {expected}")]
    InvalidOption {
        cop: String,
        key: String,
        expected: &'static str,
    },

    #[error("Invalid pattern for {cop}: {message}")]
    InvalidPattern { cop: String, message: String },
}

impl ConstableErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO_ERROR,
            Self::Toml(_) => error_code::CONFIG_PARSE_ERROR,
            Self::InvalidOption { .. } => error_code::CONFIG_INVALID_OPTION,
            Self::InvalidPattern { .. } => error_code::CONFIG_INVALID_PATTERN,
        }
    }
}
