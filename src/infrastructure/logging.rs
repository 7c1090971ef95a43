//! Logging initialization.
//!
//! Console logging through `tracing`, filterable with `RUST_LOG`
//! (default `info`).

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber. Call once at startup.
pub fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
