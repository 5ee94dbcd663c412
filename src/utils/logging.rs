//! Structured logging setup.
//!
//! The library itself only emits `tracing` events; embedding applications
//! call [`init_logging`] once at startup, or install their own subscriber.

use crate::config::LoggingConfig;
use crate::error::{BridgeError, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` wins over the configured level when set
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str().to_ascii_lowercase()))
}

/// Install the global subscriber described by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(true);

    let installed = if config.json_format {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| BridgeError::Custom(format!("Failed to initialize logging: {e}")))?;

    info!(app = %config.app_name, level = %config.log_level, "Logging initialized");
    Ok(())
}
