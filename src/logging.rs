//! Logging setup shared by the CLI entry point.
//!
//! Diagnostics go through `tracing`; the stdout/stderr success and failure
//! lines the tool is contracted to print are emitted separately in `main`.

use crate::Result;
use tracing_subscriber::EnvFilter;

/// Initializes structured logging based on verbosity level.
///
/// `RUST_LOG` takes precedence when set; otherwise the level is derived
/// from the flags (0=INFO, 1=DEBUG, 2+=TRACE, quiet=ERROR).
///
/// # Errors
/// Returns a configuration error if a global subscriber is already set.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| {
            crate::error::ExportError::configuration(format!(
                "Failed to initialize logging: {e}"
            ))
        })?;

    Ok(())
}
