//! Error handling for qrcode-i18n
//!
//! This module defines the error type returned by load-time operations.
//! Lookup-time problems never surface here; they are reported through
//! [`crate::i18n::diagnostics`] and resolved to a safe default instead.

use thiserror::Error;

use crate::i18n::schema::SchemaViolation;

/// Main error type for translation loading and configuration
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Invalid translation bundle for locale '{locale}': {}", describe_violations(.violations))]
    Validation {
        locale: String,
        violations: Vec<SchemaViolation>,
    },

    #[error("Failed to parse JSON for locale '{locale}': {source}")]
    Parse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load translation for locale '{locale}' from {location}: HTTP status {status}")]
    Transport {
        locale: String,
        location: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to load translation for locale '{locale}' from {location}: {source}")]
    Http {
        locale: String,
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid translation location '{location}': {source}")]
    InvalidLocation {
        location: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to read translation file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

/// Result type alias for qrcode-i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

fn describe_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl I18nError {
    /// Check if retrying the same load could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            I18nError::Transport { status, .. } => status.is_server_error(),
            I18nError::Http { .. } => true,
            I18nError::Io { .. } => true,
            I18nError::Validation { .. } => false,
            I18nError::Parse { .. } => false,
            I18nError::InvalidLocation { .. } => false,
            I18nError::Config(_) => false,
            I18nError::ConfigLoad(_) => false,
        }
    }

    /// Locale the failed operation was loading, if any
    pub fn locale(&self) -> Option<&str> {
        match self {
            I18nError::Validation { locale, .. }
            | I18nError::Parse { locale, .. }
            | I18nError::Transport { locale, .. }
            | I18nError::Http { locale, .. } => Some(locale),
            _ => None,
        }
    }

    /// Schema violations carried by a validation failure
    pub fn violations(&self) -> &[SchemaViolation] {
        match self {
            I18nError::Validation { violations, .. } => violations,
            _ => &[],
        }
    }
}
