//! # constable-core
//!
//! Foundation crate for the Constable lint engine.
//! Defines the offence data model, errors, config, tracing, and constants.
//! The analysis crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ConstableConfig, CopConfig, CopOptions, RunOptions};
pub use errors::error_code::ConstableErrorCode;
pub use types::collections::FxHashMap;
pub use types::correction::Correction;
pub use types::node_kind::NodeKind;
pub use types::offence::{Diagnostic, Location, Offence, Severity};
