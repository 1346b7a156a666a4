//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout carries only the demo output. The filter is
//! read from `RUST_LOG`; without it only warnings and errors are shown.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global stderr subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}
