//! Logging setup for the command-line front end.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "stellar=debug,stellar_calc=debug",
        _ => "trace",
    }
}

/// Installs a stderr `fmt` subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("tracing init failed: {e}"))
}
