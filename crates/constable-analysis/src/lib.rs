//! # constable-analysis
//!
//! Lint engine for the Constable analysis tool.
//! Contains the parser seam, the single-pass commissioner, the corrector,
//! the per-run team, and the built-in cops.

pub mod cops;
pub mod engine;
pub mod parsers;

pub use cops::default_registry;
pub use engine::commissioner::{Commissioner, CopFailure};
pub use engine::cop::{Cop, CopContext, Findings};
pub use engine::corrector::{Corrector, DropReason, RewriteReport};
pub use engine::registry::CopRegistry;
pub use engine::team::{InspectedSource, Inspection, Team};
pub use parsers::ruby::RubyParser;
pub use parsers::traits::SourceParser;
pub use parsers::types::{ProcessedSource, SourceBuffer};
