//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for qrcode-i18n.

use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{I18nError, Result};

/// Initialize logging based on configuration.
///
/// When a log directory is configured the returned guard must be kept alive
/// for buffered lines to reach the file.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| I18nError::Config(format!("Invalid log filter {}: {}", config.level, e)))?;

    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "qrcode-i18n.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| I18nError::Config(format!("Failed to install log subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a bundle that passed validation
pub fn log_bundle_loaded(locale: &str, source: &str, key_count: usize) {
    info!(
        locale = locale,
        source = source,
        key_count = key_count,
        "Translation bundle loaded"
    );
}

/// Log an active-locale change
pub fn log_locale_change(from: &str, to: &str) {
    debug!(from = from, to = to, "Active locale changed");
}

/// Log a configured bundle source that could not be loaded
pub fn log_source_failure(locale: &str, source: &str, error: &I18nError) {
    warn!(
        locale = locale,
        source = source,
        error = %error,
        recoverable = error.is_recoverable(),
        "Failed to load configured translation bundle"
    );
}
