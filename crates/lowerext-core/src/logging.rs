//! Logging init: stderr only, filtered by `RUST_LOG`.
//!
//! The tool keeps no state between runs, so unlike a long-running daemon
//! there is no log file; diagnostics share stderr with clap's errors while
//! the per-file report goes to stdout.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,lowerext=info,lowerext_core=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize structured logging to stderr.
/// Returns Err if a global subscriber is already installed (e.g. in tests).
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))?;
    Ok(())
}
