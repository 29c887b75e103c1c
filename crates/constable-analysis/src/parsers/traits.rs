//! The parser contract the engine depends on.

use std::path::Path;

use constable_core::errors::ParseError;

use super::types::ProcessedSource;

/// A parser for one language.
///
/// Implementations only turn text into a [`ProcessedSource`]; reading and
/// decoding the file is shared here.
pub trait SourceParser: Send + Sync {
    /// Language name, for logs.
    fn language(&self) -> &str;

    /// Parse an in-memory buffer named `name`.
    fn parse_source(&self, name: &str, source: String) -> Result<ProcessedSource, ParseError>;

    /// Read, decode, and parse `path`.
    fn parse_file(&self, path: &Path) -> Result<ProcessedSource, ParseError> {
        let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.display().to_string();
        let source = String::from_utf8(bytes).map_err(|e| ParseError::Encoding {
            name: name.clone(),
            valid_up_to: e.utf8_error().valid_up_to(),
        })?;
        self.parse_source(&name, source)
    }
}
