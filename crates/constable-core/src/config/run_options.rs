//! Options for one run, supplied by the driver.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RunOptions {
    /// Rewrite files with the merged corrections.
    pub autocorrect: bool,
    /// Log full failure detail and backtraces.
    pub debug: bool,
}

impl RunOptions {
    pub fn autocorrecting() -> Self {
        Self {
            autocorrect: true,
            ..Self::default()
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
