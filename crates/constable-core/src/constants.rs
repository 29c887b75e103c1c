//! Engine-wide constants.

/// Cop id attached to offences derived from parser diagnostics.
pub const SYNTAX_COP_ID: &str = "Syntax";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "CONSTABLE_LOG";

/// Filter used when `LOG_ENV_VAR` is unset and debug mode is off.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Filter used when `LOG_ENV_VAR` is unset and debug mode is on.
pub const DEBUG_LOG_FILTER: &str = "debug";

/// Logged after a recorded failure when debug mode is off.
pub const DEBUG_HINT: &str = "To see the complete backtrace run with debug enabled.";
