//! Error types, one enum per concern.

pub mod config_error;
pub mod cop_error;
pub mod error_code;
pub mod parse_error;
pub mod team_error;

pub use config_error::ConfigError;
pub use cop_error::CopError;
pub use parse_error::ParseError;
pub use team_error::TeamError;
