//! Tracing/logging initialization shared by every binary embedding the
//! client.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// Filter defaults to `info` and is overridable via `RUST_LOG`. Safe to
/// call more than once; later calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
