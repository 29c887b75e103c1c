//! Stable error codes for surfacing errors to reporters.

pub const PARSE_IO_ERROR: &str = "PARSE_IO_ERROR";
pub const PARSE_ENCODING_ERROR: &str = "PARSE_ENCODING_ERROR";
pub const GRAMMAR_NOT_FOUND: &str = "GRAMMAR_NOT_FOUND";
pub const TREE_SITTER_ERROR: &str = "TREE_SITTER_ERROR";
pub const COP_FAILED: &str = "COP_FAILED";
pub const COP_PANICKED: &str = "COP_PANICKED";
pub const COP_INVALID_TEXT: &str = "COP_INVALID_TEXT";
pub const CONFIG_IO_ERROR: &str = "CONFIG_IO_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID_OPTION: &str = "CONFIG_INVALID_OPTION";
pub const CONFIG_INVALID_PATTERN: &str = "CONFIG_INVALID_PATTERN";
pub const REWRITE_IO_ERROR: &str = "REWRITE_IO_ERROR";

/// Implemented by every error enum in the workspace.
pub trait ConstableErrorCode {
    fn error_code(&self) -> &'static str;
}
