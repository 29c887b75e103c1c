//! Single-pass commissioner.
//!
//! Walks the tree once per file and hands each node to every cop that
//! declared interest in its kind. Every callback runs behind its own
//! `catch_unwind` boundary, so a cop that errors or panics on one node loses
//! only that callback.

use std::backtrace::Backtrace;
use std::panic::{self, AssertUnwindSafe};

use constable_core::errors::CopError;
use constable_core::{Correction, FxHashMap, NodeKind, Offence};
use smallvec::SmallVec;
use tree_sitter::Node;

use super::cop::{Cop, CopContext, Findings};
use crate::parsers::types::{ProcessedSource, SourceBuffer};

/// One isolated callback failure.
#[derive(Debug, Clone)]
pub struct CopFailure {
    pub cop_id: &'static str,
    /// `None` for the file-level hook.
    pub node_kind: Option<NodeKind>,
    /// 1-based line of the node being visited.
    pub line: Option<usize>,
    pub error: CopError,
    /// Captured only when backtraces are enabled.
    pub backtrace: Option<String>,
}

/// Drives one investigation over a borrowed cop pool.
pub struct Commissioner<'c> {
    cops: &'c [Box<dyn Cop>],
    /// NodeKind → indices into `cops`, in pool order.
    node_cops: FxHashMap<NodeKind, SmallVec<[usize; 4]>>,
    findings: Vec<Findings>,
    errors: Vec<CopFailure>,
    capture_backtraces: bool,
    nodes_visited: usize,
}

impl<'c> Commissioner<'c> {
    pub fn new(cops: &'c [Box<dyn Cop>]) -> Self {
        let mut node_cops: FxHashMap<NodeKind, SmallVec<[usize; 4]>> = FxHashMap::default();
        for (idx, cop) in cops.iter().enumerate() {
            for &kind in cop.node_kinds() {
                let slot = node_cops.entry(kind).or_default();
                if !slot.contains(&idx) {
                    slot.push(idx);
                }
            }
        }
        Self {
            cops,
            node_cops,
            findings: Vec::new(),
            errors: Vec::new(),
            capture_backtraces: false,
            nodes_visited: 0,
        }
    }

    /// Record a backtrace with every failure (debug mode).
    pub fn with_backtraces(mut self, enabled: bool) -> Self {
        self.capture_backtraces = enabled;
        self
    }

    /// Investigate one file and return every cop's offences.
    ///
    /// Findings and failures from a previous call are discarded first.
    pub fn investigate(&mut self, processed: &ProcessedSource) -> Vec<Offence> {
        self.findings = self.cops.iter().map(|_| Findings::default()).collect();
        self.errors.clear();
        self.nodes_visited = 0;

        let cops = self.cops;
        let buffer = &processed.buffer;
        for (idx, cop) in cops.iter().enumerate() {
            let cop = cop.as_ref();
            let mut cx = CopContext::new(cop, buffer, &mut self.findings[idx]);
            if let Some(error) = isolate(|| cop.on_file(&mut cx)) {
                self.record(cop.id(), None, None, error);
            }
        }

        let mut cursor = processed.root_node().walk();
        'walk: loop {
            let node = cursor.node();
            self.dispatch(&node, buffer);
            if cursor.goto_first_child() {
                continue;
            }
            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    break 'walk;
                }
            }
        }

        tracing::debug!(
            file = %buffer.name,
            nodes = self.nodes_visited,
            failures = self.errors.len(),
            "investigation finished"
        );

        self.findings
            .iter()
            .flat_map(|f| f.offences().iter().cloned())
            .collect()
    }

    fn dispatch(&mut self, node: &Node<'_>, buffer: &SourceBuffer) {
        self.nodes_visited += 1;
        let kind = NodeKind::from_grammar(node.kind());
        let Some(indices) = self.node_cops.get(&kind) else {
            return;
        };
        let cops = self.cops;
        for &idx in indices {
            let cop = cops[idx].as_ref();
            let mut cx = CopContext::new(cop, buffer, &mut self.findings[idx]);
            if let Some(error) = isolate(|| cop.on_node(node, kind, &mut cx)) {
                let line = node.start_position().row + 1;
                tracing::debug!(cop = cop.id(), kind = %kind, line, %error, "cop callback failed");
                self.errors.push(CopFailure {
                    cop_id: cop.id(),
                    node_kind: Some(kind),
                    line: Some(line),
                    error,
                    backtrace: capture(self.capture_backtraces),
                });
            }
        }
    }

    fn record(
        &mut self,
        cop_id: &'static str,
        node_kind: Option<NodeKind>,
        line: Option<usize>,
        error: CopError,
    ) {
        tracing::debug!(cop = cop_id, %error, "cop callback failed");
        self.errors.push(CopFailure {
            cop_id,
            node_kind,
            line,
            error,
            backtrace: capture(self.capture_backtraces),
        });
    }

    pub fn errors(&self) -> &[CopFailure] {
        &self.errors
    }

    /// Number of nodes entered by the last traversal.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Per-cop findings of the last investigation, in pool order.
    pub fn findings(&self) -> impl Iterator<Item = (&'static str, &Findings)> + '_ {
        self.cops.iter().map(|c| c.id()).zip(self.findings.iter())
    }

    /// Every correction proposed during the last investigation.
    pub fn corrections(&self) -> impl Iterator<Item = &Correction> + '_ {
        self.findings.iter().flat_map(|f| f.corrections().iter())
    }

    /// Consume the commissioner, keeping failures and corrections.
    pub fn finish(self) -> (Vec<CopFailure>, Vec<Correction>) {
        let corrections = self
            .findings
            .into_iter()
            .flat_map(|f| f.into_parts().1)
            .collect();
        (self.errors, corrections)
    }
}

fn isolate(callback: impl FnOnce() -> Result<(), CopError>) -> Option<CopError> {
    match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(Ok(())) => None,
        Ok(Err(error)) => Some(error),
        Err(payload) => Some(CopError::from_panic(&*payload)),
    }
}

fn capture(enabled: bool) -> Option<String> {
    enabled.then(|| Backtrace::force_capture().to_string())
}
