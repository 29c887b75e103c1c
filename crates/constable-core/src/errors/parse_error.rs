//! Parse-stage errors. Any of these makes the file uninspectable.

use std::path::PathBuf;

use super::error_code::{self, ConstableErrorCode};

/// Errors raised while turning a file into a processed source.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid UTF-8 in {name} at byte {valid_up_to}")]
    Encoding { name: String, valid_up_to: usize },

    #[error("Grammar not found for language: {language}")]
    GrammarNotFound { language: String },

    #[error("Parser failed on {name}: {message}")]
    TreeSitterError { name: String, message: String },
}

impl ConstableErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::PARSE_IO_ERROR,
            Self::Encoding { .. } => error_code::PARSE_ENCODING_ERROR,
            Self::GrammarNotFound { .. } => error_code::GRAMMAR_NOT_FOUND,
            Self::TreeSitterError { .. } => error_code::TREE_SITTER_ERROR,
        }
    }
}
