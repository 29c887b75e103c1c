//! Syntax diagnostics from an error-tolerant tree.
//!
//! tree-sitter always yields a tree; broken input shows up as `ERROR` and
//! missing nodes. Each becomes one diagnostic.

use constable_core::{Diagnostic, Severity};
use tree_sitter::Node;

use super::types::SourceBuffer;

const SNIPPET_MAX_CHARS: usize = 20;

/// Walk the tree and report every error and missing node.
///
/// A root that is itself an error node means nothing was recognised and is
/// reported as fatal.
pub fn collect_diagnostics(root: Node<'_>, buffer: &SourceBuffer) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    if root.is_error() {
        diagnostics.push(Diagnostic::new(
            Severity::Fatal,
            buffer.location(root.byte_range()),
            "unable to parse source",
        ));
        return diagnostics;
    }
    if !root.has_error() {
        return diagnostics;
    }

    visit(root, buffer, &mut diagnostics);

    if diagnostics.is_empty() {
        diagnostics.push(Diagnostic::new(
            Severity::Error,
            buffer.location(root.byte_range()),
            "syntax error",
        ));
    }
    diagnostics
}

fn visit(node: Node<'_>, buffer: &SourceBuffer, out: &mut Vec<Diagnostic>) {
    if node.is_error() {
        out.push(Diagnostic::new(
            Severity::Error,
            buffer.location(node.byte_range()),
            unexpected_message(node, buffer),
        ));
        return;
    }
    if node.is_missing() {
        out.push(Diagnostic::new(
            Severity::Error,
            buffer.location(node.byte_range()),
            format!("missing `{}`", node.kind()),
        ));
        return;
    }
    if !node.has_error() {
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, buffer, out);
    }
}

fn unexpected_message(node: Node<'_>, buffer: &SourceBuffer) -> String {
    let text = buffer.source.get(node.byte_range()).unwrap_or("");
    let first_line = text.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        return "syntax error".to_string();
    }
    let snippet: String = first_line.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("unexpected `{}`", snippet)
}
