//! MethodName: method definitions must be snake_case.

use constable_core::errors::{ConfigError, CopError};
use constable_core::{CopOptions, NodeKind, RunOptions};
use regex::Regex;
use tree_sitter::Node;

use super::naming::split_suffix;
use crate::engine::cop::{Cop, CopContext};

const MSG: &str = "Use snake_case for methods.";
const SNAKE_CASE: &str = r"^[\da-z_]+$";

pub struct MethodName {
    snake_case: Regex,
}

impl MethodName {
    pub const ID: &'static str = "MethodName";

    pub fn build(_options: &CopOptions<'_>, _run: &RunOptions) -> Result<Box<dyn Cop>, ConfigError> {
        let snake_case = Regex::new(SNAKE_CASE).map_err(|e| ConfigError::InvalidPattern {
            cop: Self::ID.to_string(),
            message: e.to_string(),
        })?;
        Ok(Box::new(Self { snake_case }))
    }
}

impl Cop for MethodName {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn node_kinds(&self) -> &[NodeKind] {
        &[NodeKind::Method, NodeKind::SingletonMethod]
    }

    fn on_node(
        &self,
        node: &Node<'_>,
        _kind: NodeKind,
        cx: &mut CopContext<'_>,
    ) -> Result<(), CopError> {
        let Some(name_node) = node.child_by_field_name("name") else {
            return Ok(());
        };
        // `def ==(other)`, `def [](key)` and friends.
        if name_node.kind() == "operator" {
            return Ok(());
        }
        let (name, _) = split_suffix(cx.text(&name_node)?);
        if name.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
            && !self.snake_case.is_match(name)
        {
            cx.add_offence(&name_node, MSG);
        }
        Ok(())
    }
}
