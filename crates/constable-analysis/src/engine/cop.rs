//! The cop contract and the per-file context handed to every callback.
//!
//! Cops are immutable during investigation. Everything a cop accumulates for
//! a file goes into a [`Findings`] value owned by that file's commissioner,
//! so nothing can leak from one file into the next.

use std::ops::Range;

use constable_core::errors::CopError;
use constable_core::{Correction, NodeKind, Offence, Severity};
use tree_sitter::Node;

use crate::parsers::types::SourceBuffer;

/// A pluggable analysis rule.
///
/// The commissioner calls `on_file` once per file, then `on_node` for every
/// node whose kind is listed in `node_kinds`, in tree order.
pub trait Cop: Send + Sync {
    /// Unique identifier, also the config table name.
    fn id(&self) -> &'static str;

    /// Severity of offences added without an explicit one.
    fn severity(&self) -> Severity {
        Severity::Convention
    }

    /// Node kinds this cop wants to visit. Empty means no node callbacks;
    /// use [`NodeKind::ALL`] to visit everything.
    fn node_kinds(&self) -> &[NodeKind] {
        &[]
    }

    /// Source-level check, run once before the traversal.
    fn on_file(&self, _cx: &mut CopContext<'_>) -> Result<(), CopError> {
        Ok(())
    }

    /// Called on entering a node during depth-first traversal.
    fn on_node(
        &self,
        _node: &Node<'_>,
        _kind: NodeKind,
        _cx: &mut CopContext<'_>,
    ) -> Result<(), CopError> {
        Ok(())
    }
}

/// Everything one cop produced for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    offences: Vec<Offence>,
    corrections: Vec<Correction>,
    ignored: Vec<Range<usize>>,
}

impl Findings {
    pub fn offences(&self) -> &[Offence] {
        &self.offences
    }

    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    pub fn is_empty(&self) -> bool {
        self.offences.is_empty() && self.corrections.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Offence>, Vec<Correction>) {
        (self.offences, self.corrections)
    }
}

/// Per-callback view of the file plus the cop's own accumulator.
pub struct CopContext<'a> {
    cop_id: &'static str,
    severity: Severity,
    buffer: &'a SourceBuffer,
    findings: &'a mut Findings,
}

impl<'a> CopContext<'a> {
    pub fn new(cop: &dyn Cop, buffer: &'a SourceBuffer, findings: &'a mut Findings) -> Self {
        Self {
            cop_id: cop.id(),
            severity: cop.severity(),
            buffer,
            findings,
        }
    }

    pub fn cop_id(&self) -> &'static str {
        self.cop_id
    }

    pub fn file_name(&self) -> &'a str {
        &self.buffer.name
    }

    pub fn source(&self) -> &'a str {
        &self.buffer.source
    }

    pub fn buffer(&self) -> &'a SourceBuffer {
        self.buffer
    }

    /// Source text of `node`.
    pub fn text(&self, node: &Node<'_>) -> Result<&'a str, CopError> {
        Ok(node.utf8_text(self.buffer.source.as_bytes())?)
    }

    pub fn add_offence(&mut self, node: &Node<'_>, message: impl Into<String>) {
        self.add_offence_at(node.byte_range(), message);
    }

    pub fn add_offence_at(&mut self, range: Range<usize>, message: impl Into<String>) {
        let severity = self.severity;
        self.add_offence_with_severity(range, severity, message);
    }

    pub fn add_offence_with_severity(
        &mut self,
        range: Range<usize>,
        severity: Severity,
        message: impl Into<String>,
    ) {
        let location = self.buffer.location(range);
        self.findings
            .offences
            .push(Offence::new(location, severity, self.cop_id, message));
    }

    /// Propose replacing `range` of the original buffer with `replacement`.
    pub fn add_correction(&mut self, range: Range<usize>, replacement: impl Into<String>) {
        self.findings
            .corrections
            .push(Correction::new(range, replacement, self.cop_id));
    }

    /// Skip `node` in later callbacks of this cop for this file.
    pub fn ignore_node(&mut self, node: &Node<'_>) {
        self.findings.ignored.push(node.byte_range());
    }

    pub fn is_ignored(&self, node: &Node<'_>) -> bool {
        let range = node.byte_range();
        self.findings.ignored.iter().any(|r| *r == range)
    }
}
