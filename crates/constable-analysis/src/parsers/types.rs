//! Parse output shared by every parser.

use std::ops::Range;

use constable_core::{Diagnostic, Location};

/// The text of one file plus a line index for cheap location lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    pub name: String,
    pub source: String,
    line_starts: Vec<usize>,
}

impl SourceBuffer {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Location of a byte range. Column counts characters from the line start.
    /// Offsets past the end clamp to it; offsets inside a character move back to its start.
    pub fn location(&self, range: Range<usize>) -> Location {
        let mut offset = range.start.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let line_start = self.line_starts[line_idx];
        let column = self.source[line_start..offset].chars().count() + 1;
        Location::new(line_idx + 1, column, range)
    }
}

/// Result of parsing one file: tree, parser diagnostics, and the buffer.
#[derive(Debug, Clone)]
pub struct ProcessedSource {
    pub buffer: SourceBuffer,
    pub tree: tree_sitter::Tree,
    pub diagnostics: Vec<Diagnostic>,
}

impl ProcessedSource {
    pub fn source(&self) -> &str {
        &self.buffer.source
    }

    pub fn name(&self) -> &str {
        &self.buffer.name
    }

    pub fn root_node(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}
