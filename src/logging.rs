// src/logging.rs
// =============================================================================
// Sets up `tracing` so the library's info!/warn!/debug! events are printed.
//
// Logs go to stderr and the report goes to stdout, so
// `image-fetcher --json ... > report.json` still gives a clean JSON file.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr, leaving stdout for the report.
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when verbose.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized at level {}", default_level);

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is EnvFilter?
//    - It decides which log events are shown
//    - RUST_LOG=debug or RUST_LOG=image_fetcher=debug overrides our default
//
// 2. Why try_init() and not init()?
//    - init() panics if a logger is already installed
//    - try_init() returns an error we can report with the ? operator
// -----------------------------------------------------------------------------
