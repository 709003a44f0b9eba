//! Logging setup
//!
//! Console logging with an env-filter; `RUST_LOG` overrides the level
//! passed in. The completion phase relies on this for its
//! logged-and-swallowed collaborator failures, and the revenue log
//! observer emits under the `revenue` target.

use tracing_subscriber::EnvFilter;

/// Initialise the logging system.
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}
