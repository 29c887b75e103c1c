//! Configuration: per-cop tables plus per-run options.

pub mod cop_config;
pub mod run_options;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use cop_config::{CopConfig, CopOptions};
pub use run_options::RunOptions;

/// Top-level configuration: one table per cop id.
///
/// ```toml
/// [SymbolName]
/// Enabled = true
/// AllowCamelCase = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct ConstableConfig {
    cops: BTreeMap<String, CopConfig>,
}

impl ConstableConfig {
    /// Load config from a TOML string, falling back to defaults for missing cops.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Cops without a table, or without an `Enabled` key, are enabled.
    pub fn is_enabled(&self, cop_id: &str) -> bool {
        self.cop(cop_id).and_then(|c| c.enabled).unwrap_or(true)
    }

    /// Options for `cop_id`; empty when the cop has no table.
    pub fn cop_options<'a>(&'a self, cop_id: &'a str) -> CopOptions<'a> {
        CopOptions::new(cop_id, self.cop(cop_id).map(|c| &c.options))
    }

    /// Builder used by tests and drivers that assemble config in code.
    pub fn with_cop(mut self, cop_id: impl Into<String>, config: CopConfig) -> Self {
        self.cops.insert(cop_id.into(), config);
        self
    }

    pub fn cop(&self, cop_id: &str) -> Option<&CopConfig> {
        self.cops.get(cop_id)
    }
}
