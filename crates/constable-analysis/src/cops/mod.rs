//! Built-in cops.

pub mod method_name;
pub mod naming;
pub mod symbol_name;
pub mod trailing_whitespace;

use crate::engine::registry::CopRegistry;

pub use method_name::MethodName;
pub use symbol_name::SymbolName;
pub use trailing_whitespace::TrailingWhitespace;

/// Registry holding every built-in cop, in execution order.
pub fn default_registry() -> CopRegistry {
    let mut registry = CopRegistry::new();
    registry
        .register(
            SymbolName::ID,
            "Symbols and hash labels use snake_case.",
            SymbolName::build,
        )
        .register(
            MethodName::ID,
            "Method definitions use snake_case.",
            MethodName::build,
        )
        .register(
            TrailingWhitespace::ID,
            "Lines do not end in spaces or tabs.",
            TrailingWhitespace::build,
        );
    registry
}
