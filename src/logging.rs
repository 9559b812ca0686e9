//! Diagnostic logging setup
//!
//! Events go to stderr so they never mix with command output on stdout.

use crate::constants::logging::{DEFAULT_LEVEL, LOG_ENV};
use tracing_subscriber::EnvFilter;

/// Pick the filter directive: `--verbose` wins, then `GG_LOG`, then the default
pub fn filter_directive(verbose: bool, env_value: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    match env_value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Install the global subscriber. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbose, env_value.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
