//! Tracing subscriber setup.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `default_level` applies unless `RUST_LOG` is set.
/// Output goes to stderr so it never mixes with tables printed on stdout.
pub fn init_tracing(default_level: &str) -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Config(format!("failed to initialize tracing subscriber: {e}")))
}
