//! SymbolName: symbols and hash labels must be snake_case.

use constable_core::errors::{ConfigError, CopError};
use constable_core::{CopOptions, NodeKind, RunOptions};
use regex::Regex;
use tree_sitter::Node;

use super::naming::{split_suffix, starts_with_letter, to_snake_case};
use crate::engine::cop::{Cop, CopContext};

const MSG: &str = "Use snake_case for symbols.";

const SNAKE_CASE: &str = r"^@{0,2}[\da-z_]+[!?=]?$";
const CAMEL_CASE: &str = r"^@{0,2}[A-Za-z][\dA-Za-z]*[!?=]?$";
const SNAKE_CASE_WITH_DOTS: &str = r"^@{0,2}[\da-z_.]+[!?=]?$";

const KINDS: &[NodeKind] = &[
    NodeKind::Call,
    NodeKind::SimpleSymbol,
    NodeKind::DelimitedSymbol,
    NodeKind::HashKeySymbol,
    NodeKind::BareSymbol,
];

pub struct SymbolName {
    allow_camel_case: bool,
    allow_dots: bool,
    snake_case: Regex,
    camel_case: Regex,
    snake_case_with_dots: Regex,
}

impl SymbolName {
    pub const ID: &'static str = "SymbolName";

    pub fn new(options: &CopOptions<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            allow_camel_case: options.bool("AllowCamelCase", true)?,
            allow_dots: options.bool("AllowDots", false)?,
            snake_case: compile(SNAKE_CASE)?,
            camel_case: compile(CAMEL_CASE)?,
            snake_case_with_dots: compile(SNAKE_CASE_WITH_DOTS)?,
        })
    }

    pub fn build(options: &CopOptions<'_>, _run: &RunOptions) -> Result<Box<dyn Cop>, ConfigError> {
        Ok(Box::new(Self::new(options)?))
    }

    fn is_accepted(&self, name: &str) -> bool {
        self.snake_case.is_match(name)
            || (self.allow_camel_case && self.camel_case.is_match(name))
            || (self.allow_dots && self.snake_case_with_dots.is_match(name))
    }

    /// `name` rewritten to snake_case, if that yields a different valid name.
    fn corrected(&self, name: &str) -> Option<String> {
        if name.contains('.') {
            return None;
        }
        let (base, suffix) = split_suffix(name);
        let fixed = format!("{}{suffix}", to_snake_case(base));
        (fixed != name && self.snake_case.is_match(&fixed)).then_some(fixed)
    }

    /// `private_constant :FOO, :BAR` names constants, not symbols.
    fn ignore_private_constant_args(
        &self,
        node: &Node<'_>,
        cx: &mut CopContext<'_>,
    ) -> Result<(), CopError> {
        if node.child_by_field_name("receiver").is_some() {
            return Ok(());
        }
        let Some(method) = node.child_by_field_name("method") else {
            return Ok(());
        };
        if cx.text(&method)? != "private_constant" {
            return Ok(());
        }
        let Some(args) = node.child_by_field_name("arguments") else {
            return Ok(());
        };
        let mut cursor = args.walk();
        for arg in args.named_children(&mut cursor) {
            if NodeKind::from_grammar(arg.kind()).is_symbol() {
                cx.ignore_node(&arg);
            }
        }
        Ok(())
    }

    fn check_symbol(
        &self,
        node: &Node<'_>,
        kind: NodeKind,
        cx: &mut CopContext<'_>,
    ) -> Result<(), CopError> {
        if cx.is_ignored(node) {
            return Ok(());
        }
        let text = cx.text(node)?;
        let Some((name, offset)) = symbol_name(kind, text) else {
            return Ok(());
        };
        if !starts_with_letter(name.trim_start_matches('@')) || self.is_accepted(name) {
            return Ok(());
        }

        cx.add_offence(node, MSG);
        if kind == NodeKind::DelimitedSymbol {
            return Ok(());
        }
        if let Some(fixed) = self.corrected(name) {
            let start = node.start_byte() + offset;
            cx.add_correction(start..start + name.len(), fixed);
        }
        Ok(())
    }
}

impl Cop for SymbolName {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn node_kinds(&self) -> &[NodeKind] {
        KINDS
    }

    fn on_node(
        &self,
        node: &Node<'_>,
        kind: NodeKind,
        cx: &mut CopContext<'_>,
    ) -> Result<(), CopError> {
        match kind {
            NodeKind::Call => self.ignore_private_constant_args(node, cx),
            _ => self.check_symbol(node, kind, cx),
        }
    }
}

/// The checked name and its byte offset inside the node text.
fn symbol_name(kind: NodeKind, text: &str) -> Option<(&str, usize)> {
    match kind {
        NodeKind::SimpleSymbol => text.strip_prefix(':').map(|name| (name, 1)),
        NodeKind::DelimitedSymbol => {
            let quoted = text.strip_prefix(':')?;
            if quoted.len() < 2 {
                return None;
            }
            let name = quoted.get(1..quoted.len() - 1)?;
            // Interpolated symbols have no static name.
            (!name.contains("#{")).then_some((name, 2))
        }
        NodeKind::HashKeySymbol => Some((text, 0)),
        // `%i[..]` elements; `%I[..]` ones may interpolate.
        NodeKind::BareSymbol => (!text.contains("#{")).then_some((text, 0)),
        _ => None,
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        cop: SymbolName::ID.to_string(),
        message: e.to_string(),
    })
}
