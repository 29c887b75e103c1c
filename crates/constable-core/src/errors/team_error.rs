//! Errors that escape `Team::inspect_file`.
//! Parse and cop failures are recorded, not raised; only these propagate.

use std::path::PathBuf;

use super::error_code::{self, ConstableErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum TeamError {
    #[error("Failed to write corrected source to {path}: {source}")]
    Rewrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConstableErrorCode for TeamError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Rewrite { .. } => error_code::REWRITE_IO_ERROR,
        }
    }
}
