//! Ruby parser backed by tree-sitter-ruby.

use std::time::Instant;

use constable_core::errors::ParseError;
use tree_sitter::Parser;

use super::error_tolerant::collect_diagnostics;
use super::traits::SourceParser;
use super::types::{ProcessedSource, SourceBuffer};

/// Stateless; a tree-sitter parser is created per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RubyParser;

impl RubyParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for RubyParser {
    fn language(&self) -> &str {
        "ruby"
    }

    fn parse_source(&self, name: &str, source: String) -> Result<ProcessedSource, ParseError> {
        let start = Instant::now();

        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_ruby::LANGUAGE.into())
            .map_err(|_e| ParseError::GrammarNotFound {
                language: self.language().to_string(),
            })?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::TreeSitterError {
                name: name.to_string(),
                message: "tree-sitter returned None".to_string(),
            })?;

        let buffer = SourceBuffer::new(name, source);
        let diagnostics = collect_diagnostics(tree.root_node(), &buffer);

        tracing::debug!(
            file = name,
            diagnostics = diagnostics.len(),
            parse_time_us = start.elapsed().as_micros() as u64,
            "parsed source"
        );

        Ok(ProcessedSource {
            buffer,
            tree,
            diagnostics,
        })
    }
}
