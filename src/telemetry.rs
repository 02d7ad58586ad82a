//! Tracing/logging initialization

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,twit_api=debug,tower_http=info";

/// Initialize tracing for the process, configurable via RUST_LOG.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
