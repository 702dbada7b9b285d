//! Logging initialization.
//!
//! The pipeline is embedded in a host process, so initialization is
//! best-effort: if the host already installed a tracing subscriber, ours
//! quietly steps aside. Filtering follows `RUST_LOG` with an `info`
//! default.

use tracing_subscriber::EnvFilter;

/// Initializes stderr logging for the pipeline.
///
/// Safe to call more than once; only the first subscriber wins.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
