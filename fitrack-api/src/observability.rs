//! Structured logging bootstrap

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Install a JSON `tracing` subscriber filtered by the configured log level
///
/// An unparseable level falls back to `info`. `RUST_LOG` is not consulted;
/// set `FITRACK_SERVICE__LOG_LEVEL` instead.
///
/// # Errors
///
/// [`Error::Internal`] when a global subscriber is already installed.
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(&config.service.log_level))
        .try_init()
        .map_err(|e| Error::Internal(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::info!(
        environment = %config.service.environment,
        "Tracing initialized for service: {}", config.service.name
    );

    Ok(())
}

/// Build the level filter, falling back to `info` when `level` does not parse
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
