//! Tracing initialisation.
//!
//! Library code only emits through the `tracing` facade. A driver calls
//! [`init_tracing`] once to install a subscriber; later calls are no-ops.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Install a global fmt subscriber filtered by `CONSTABLE_LOG`.
///
/// Falls back to `warn`, or `debug` when `debug` is set. Returns `false` if a
/// global subscriber was already installed.
pub fn init_tracing(debug: bool) -> bool {
    let fallback = if debug { DEBUG_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
