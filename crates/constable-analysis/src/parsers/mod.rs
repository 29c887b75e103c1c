//! Parser seam: turns file content into a tree, diagnostics and a buffer.

pub mod error_tolerant;
pub mod ruby;
pub mod traits;
pub mod types;
