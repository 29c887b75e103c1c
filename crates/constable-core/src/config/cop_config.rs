//! Per-cop configuration table and typed option lookups.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// One cop's table. Everything except `Enabled` is opaque to the engine and
/// forwarded to the cop constructor.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CopConfig {
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub options: toml::Table,
}

impl CopConfig {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            options: toml::Table::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Read-only view over one cop's options.
#[derive(Debug, Clone, Copy)]
pub struct CopOptions<'a> {
    cop_id: &'a str,
    table: Option<&'a toml::Table>,
}

impl<'a> CopOptions<'a> {
    pub fn new(cop_id: &'a str, table: Option<&'a toml::Table>) -> Self {
        Self { cop_id, table }
    }

    pub fn empty(cop_id: &'a str) -> Self {
        Self { cop_id, table: None }
    }

    pub fn cop_id(&self) -> &str {
        self.cop_id
    }

    pub fn get(&self, key: &str) -> Option<&'a toml::Value> {
        self.table.and_then(|t| t.get(key))
    }

    /// Boolean option, `default` when missing. A non-boolean value is an error.
    pub fn bool(&self, key: &str, default: bool) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(toml::Value::Boolean(b)) => Ok(*b),
            Some(_) => Err(self.invalid(key, "a boolean")),
        }
    }

    pub fn int(&self, key: &str, default: i64) -> Result<i64, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(toml::Value::Integer(i)) => Ok(*i),
            Some(_) => Err(self.invalid(key, "an integer")),
        }
    }

    pub fn str(&self, key: &str) -> Result<Option<&'a str>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.invalid(key, "a string")),
        }
    }

    fn invalid(&self, key: &str, expected: &'static str) -> ConfigError {
        ConfigError::InvalidOption {
            cop: self.cop_id.to_string(),
            key: key.to_string(),
            expected,
        }
    }
}
