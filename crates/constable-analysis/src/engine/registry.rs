//! Cop registry: ordered constructors filtered by configuration.

use constable_core::errors::ConfigError;
use constable_core::{ConstableConfig, CopOptions, RunOptions};

use super::cop::Cop;

/// Builds a cop from its config table and the run options.
pub type CopConstructor = fn(&CopOptions<'_>, &RunOptions) -> Result<Box<dyn Cop>, ConfigError>;

struct RegisteredCop {
    id: &'static str,
    description: &'static str,
    constructor: CopConstructor,
}

/// Ordered list of available cops. Registration order is execution order.
#[derive(Default)]
pub struct CopRegistry {
    cops: Vec<RegisteredCop>,
}

impl CopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cop. A later registration with the same id replaces the
    /// earlier one in place.
    pub fn register(
        &mut self,
        id: &'static str,
        description: &'static str,
        constructor: CopConstructor,
    ) -> &mut Self {
        let entry = RegisteredCop {
            id,
            description,
            constructor,
        };
        match self.cops.iter_mut().find(|c| c.id == id) {
            Some(existing) => *existing = entry,
            None => self.cops.push(entry),
        }
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cops.iter().map(|c| c.id)
    }

    pub fn description(&self, id: &str) -> Option<&'static str> {
        self.cops.iter().find(|c| c.id == id).map(|c| c.description)
    }

    pub fn len(&self) -> usize {
        self.cops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cops.is_empty()
    }

    /// Instantiate every enabled cop, in registration order.
    ///
    /// Constructor failures do not stop the others; they are returned next to
    /// the cops that did build.
    pub fn build_enabled(
        &self,
        config: &ConstableConfig,
        options: &RunOptions,
    ) -> (Vec<Box<dyn Cop>>, Vec<(&'static str, ConfigError)>) {
        let mut cops = Vec::with_capacity(self.cops.len());
        let mut errors = Vec::new();
        for entry in &self.cops {
            if !config.is_enabled(entry.id) {
                tracing::debug!(cop = entry.id, "cop disabled by configuration");
                continue;
            }
            match (entry.constructor)(&config.cop_options(entry.id), options) {
                Ok(cop) => cops.push(cop),
                Err(e) => errors.push((entry.id, e)),
            }
        }
        (cops, errors)
    }
}

impl std::fmt::Debug for CopRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.cops.iter().map(|c| (c.id, c.description)))
            .finish()
    }
}
