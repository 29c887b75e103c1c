//! Closed set of syntax node kinds cops can subscribe to.
//!
//! Grammar node names are mapped onto this enum once per node so dispatch is
//! an exhaustive match instead of a lookup by method name. Anything the
//! engine does not model is `Other`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    Assignment,
    Call,
    ArgumentList,
    Hash,
    Pair,
    SimpleSymbol,
    DelimitedSymbol,
    HashKeySymbol,
    BareSymbol,
    Identifier,
    Constant,
    Method,
    SingletonMethod,
    Class,
    Module,
    Alias,
    String,
    Comment,
    Error,
    Other,
}

impl NodeKind {
    /// Every kind, for cops that want to see the whole tree.
    pub const ALL: &'static [NodeKind] = &[
        Self::Program,
        Self::Assignment,
        Self::Call,
        Self::ArgumentList,
        Self::Hash,
        Self::Pair,
        Self::SimpleSymbol,
        Self::DelimitedSymbol,
        Self::HashKeySymbol,
        Self::BareSymbol,
        Self::Identifier,
        Self::Constant,
        Self::Method,
        Self::SingletonMethod,
        Self::Class,
        Self::Module,
        Self::Alias,
        Self::String,
        Self::Comment,
        Self::Error,
        Self::Other,
    ];

    /// Map a grammar node name onto the closed set.
    pub fn from_grammar(kind: &str) -> Self {
        match kind {
            "program" => Self::Program,
            "assignment" | "operator_assignment" => Self::Assignment,
            "call" => Self::Call,
            "argument_list" => Self::ArgumentList,
            "hash" => Self::Hash,
            "pair" => Self::Pair,
            "simple_symbol" => Self::SimpleSymbol,
            "delimited_symbol" => Self::DelimitedSymbol,
            "hash_key_symbol" => Self::HashKeySymbol,
            "bare_symbol" => Self::BareSymbol,
            "identifier" => Self::Identifier,
            "constant" => Self::Constant,
            "method" => Self::Method,
            "singleton_method" => Self::SingletonMethod,
            "class" => Self::Class,
            "module" => Self::Module,
            "alias" => Self::Alias,
            "string" => Self::String,
            "comment" => Self::Comment,
            "ERROR" => Self::Error,
            _ => Self::Other,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Assignment => "assignment",
            Self::Call => "call",
            Self::ArgumentList => "argument_list",
            Self::Hash => "hash",
            Self::Pair => "pair",
            Self::SimpleSymbol => "simple_symbol",
            Self::DelimitedSymbol => "delimited_symbol",
            Self::HashKeySymbol => "hash_key_symbol",
            Self::BareSymbol => "bare_symbol",
            Self::Identifier => "identifier",
            Self::Constant => "constant",
            Self::Method => "method",
            Self::SingletonMethod => "singleton_method",
            Self::Class => "class",
            Self::Module => "module",
            Self::Alias => "alias",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Error => "error",
            Self::Other => "other",
        }
    }

    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            Self::SimpleSymbol | Self::DelimitedSymbol | Self::HashKeySymbol | Self::BareSymbol
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
