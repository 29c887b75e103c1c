//! Commissioner tests: single traversal, kind dispatch, failure isolation,
//! per-run findings.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use constable_analysis::{Commissioner, Cop, CopContext, ProcessedSource, RubyParser, SourceParser};
use constable_core::errors::CopError;
use constable_core::{ConstableErrorCode, NodeKind};
use tree_sitter::Node;

// ---- Helpers ----

fn parse(source: &str) -> ProcessedSource {
    RubyParser.parse_source("test.rb", source.to_string()).unwrap()
}

fn count_nodes(node: Node<'_>) -> usize {
    let mut cursor = node.walk();
    1 + node.children(&mut cursor).map(count_nodes).sum::<usize>()
}

/// Counts every node it is handed.
struct CountingCop {
    visits: Arc<AtomicUsize>,
}

impl CountingCop {
    fn new() -> (Self, Arc<AtomicUsize>) {
        let visits = Arc::new(AtomicUsize::new(0));
        (
            Self {
                visits: Arc::clone(&visits),
            },
            visits,
        )
    }
}

impl Cop for CountingCop {
    fn id(&self) -> &'static str {
        "Counting"
    }
    fn node_kinds(&self) -> &[NodeKind] {
        NodeKind::ALL
    }
    fn on_node(&self, _: &Node<'_>, _: NodeKind, _: &mut CopContext<'_>) -> Result<(), CopError> {
        self.visits.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Records the text of every plain symbol and reports each one.
struct SymbolCollector {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Cop for SymbolCollector {
    fn id(&self) -> &'static str {
        "Collector"
    }
    fn node_kinds(&self) -> &[NodeKind] {
        &[NodeKind::SimpleSymbol]
    }
    fn on_node(&self, node: &Node<'_>, _: NodeKind, cx: &mut CopContext<'_>) -> Result<(), CopError> {
        let text = cx.text(node)?;
        self.seen.lock().unwrap().push(text.to_string());
        cx.add_offence(node, format!("saw {text}"));
        Ok(())
    }
}

/// Fails on `:boom`, reports every other symbol.
struct Fragile {
    panic: bool,
}

impl Cop for Fragile {
    fn id(&self) -> &'static str {
        "Fragile"
    }
    fn node_kinds(&self) -> &[NodeKind] {
        &[NodeKind::SimpleSymbol]
    }
    fn on_node(&self, node: &Node<'_>, _: NodeKind, cx: &mut CopContext<'_>) -> Result<(), CopError> {
        if cx.text(node)? == ":boom" {
            if self.panic {
                panic!("boom at line {}", node.start_position().row + 1);
            }
            return Err(CopError::failed("cannot handle boom"));
        }
        cx.add_offence(node, "fragile offence");
        Ok(())
    }
}

/// Only has a file-level hook.
struct FileLevel {
    calls: Arc<AtomicUsize>,
}

impl Cop for FileLevel {
    fn id(&self) -> &'static str {
        "FileLevel"
    }
    fn on_file(&self, cx: &mut CopContext<'_>) -> Result<(), CopError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        let len = cx.source().len();
        cx.add_offence_at(0..len, "whole file");
        cx.add_correction(0..0, "# header\n");
        Ok(())
    }
    fn on_node(&self, _: &Node<'_>, _: NodeKind, _: &mut CopContext<'_>) -> Result<(), CopError> {
        panic!("no node kinds were declared");
    }
}

const THREE_SYMBOLS: &str = "a = :one\nb = :boom\nc = :two\n";

// ---- Traversal ----

#[test]
fn every_node_is_visited_exactly_once() {
    let processed = parse("class Foo\n  def bar(x)\n    x + :y.to_s\n  end\nend\n");
    let expected = count_nodes(processed.root_node());

    let (cop, visits) = CountingCop::new();
    let cops: Vec<Box<dyn Cop>> = vec![Box::new(cop)];
    let mut commissioner = Commissioner::new(&cops);
    commissioner.investigate(&processed);

    assert_eq!(visits.load(Ordering::Relaxed), expected);
    assert_eq!(commissioner.nodes_visited(), expected);
    assert!(commissioner.errors().is_empty());
}

#[test]
fn many_cops_share_one_walk() {
    let processed = parse(THREE_SYMBOLS);
    let total = count_nodes(processed.root_node());

    let (first, first_visits) = CountingCop::new();
    let (second, second_visits) = CountingCop::new();
    let cops: Vec<Box<dyn Cop>> = vec![Box::new(first), Box::new(second)];
    let mut commissioner = Commissioner::new(&cops);
    commissioner.investigate(&processed);

    assert_eq!(commissioner.nodes_visited(), total, "one walk, not one per cop");
    assert_eq!(first_visits.load(Ordering::Relaxed), total);
    assert_eq!(second_visits.load(Ordering::Relaxed), total);
}

#[test]
fn dispatch_is_keyed_by_node_kind_in_tree_order() {
    let processed = parse("a = :x\nb = 'str'\nc = [:y, :z]\n");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let cops: Vec<Box<dyn Cop>> = vec![Box::new(SymbolCollector {
        seen: Arc::clone(&seen),
    })];

    let offences = Commissioner::new(&cops).investigate(&processed);

    assert_eq!(*seen.lock().unwrap(), vec![":x", ":y", ":z"]);
    assert_eq!(offences.len(), 3);
    assert!(offences.iter().all(|o| o.cop_id() == "Collector"));
}

#[test]
fn file_hook_runs_once_and_node_hook_never_without_kinds() {
    let processed = parse(THREE_SYMBOLS);
    let calls = Arc::new(AtomicUsize::new(0));
    let cops: Vec<Box<dyn Cop>> = vec![Box::new(FileLevel {
        calls: Arc::clone(&calls),
    })];
    let mut commissioner = Commissioner::new(&cops);

    let offences = commissioner.investigate(&processed);

    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(offences.len(), 1);
    assert!(commissioner.errors().is_empty(), "on_node must not be called");
    assert_eq!(commissioner.corrections().count(), 1);
}

// ---- Isolation ----

#[test]
fn returned_error_only_costs_that_callback() {
    let processed = parse(THREE_SYMBOLS);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let cops: Vec<Box<dyn Cop>> = vec![
        Box::new(Fragile { panic: false }),
        Box::new(SymbolCollector {
            seen: Arc::clone(&seen),
        }),
    ];
    let mut commissioner = Commissioner::new(&cops);

    let offences = commissioner.investigate(&processed);

    let fragile: Vec<_> = offences.iter().filter(|o| o.cop_id() == "Fragile").collect();
    assert_eq!(fragile.len(), 2, "offences before and after the failure survive");
    assert_eq!(fragile[0].line(), 1);
    assert_eq!(fragile[1].line(), 3);
    assert_eq!(seen.lock().unwrap().len(), 3, "other cops see every node");

    let errors = commissioner.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].cop_id, "Fragile");
    assert_eq!(errors[0].node_kind, Some(NodeKind::SimpleSymbol));
    assert_eq!(errors[0].line, Some(2));
    assert_eq!(errors[0].error, CopError::failed("cannot handle boom"));
    assert!(errors[0].backtrace.is_none());
}

#[test]
fn panics_are_caught_and_recorded() {
    let processed = parse(THREE_SYMBOLS);
    let cops: Vec<Box<dyn Cop>> = vec![Box::new(Fragile { panic: true })];
    let mut commissioner = Commissioner::new(&cops).with_backtraces(true);

    let offences = commissioner.investigate(&processed);

    assert_eq!(offences.len(), 2);
    let errors = commissioner.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error.error_code(), "COP_PANICKED");
    assert_eq!(errors[0].error.to_string(), "cop panicked: boom at line 2");
    assert!(errors[0].backtrace.is_some());
}

// ---- Lifecycle ----

#[test]
fn each_investigation_starts_from_empty_findings() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let cops: Vec<Box<dyn Cop>> = vec![
        Box::new(Fragile { panic: false }),
        Box::new(SymbolCollector {
            seen: Arc::clone(&seen),
        }),
    ];
    let mut commissioner = Commissioner::new(&cops);

    let first = commissioner.investigate(&parse(THREE_SYMBOLS));
    assert_eq!(first.len(), 5);
    assert_eq!(commissioner.errors().len(), 1);

    let second = commissioner.investigate(&parse("x = :only\n"));
    assert_eq!(second.len(), 2);
    assert!(second.iter().all(|o| o.line() == 1));
    assert!(commissioner.errors().is_empty(), "failures are per run");
}

#[test]
fn finish_hands_back_every_correction() {
    let calls = Arc::new(AtomicUsize::new(0));
    let cops: Vec<Box<dyn Cop>> = vec![
        Box::new(FileLevel {
            calls: Arc::clone(&calls),
        }),
        Box::new(Fragile { panic: false }),
    ];
    let mut commissioner = Commissioner::new(&cops);
    commissioner.investigate(&parse(THREE_SYMBOLS));

    let ids: Vec<_> = commissioner.findings().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["FileLevel", "Fragile"]);

    let (errors, corrections) = commissioner.finish();
    assert_eq!(errors.len(), 1);
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].cop_id, "FileLevel");
    assert_eq!(corrections[0].range, 0..0);
}
