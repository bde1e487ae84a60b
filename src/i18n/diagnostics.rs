//! Soft-failure reporting
//!
//! Lookups never fail their caller. When something is off (unknown key,
//! unsupported locale, rejected built-in bundle) the service emits a
//! [`Diagnostic`] through an injectable [`DiagnosticSink`] and carries on with
//! a safe default.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::{error, warn};

/// A non-fatal problem observed by the locale service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    UnsupportedLocale { requested: String, fallback: String },
    MissingKey { locale: String, key: String },
    NotAString { locale: String, key: String },
    NoTranslations { locale: String },
    BuiltInRejected { locale: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedLocale { requested, fallback } => write!(
                f,
                "Locale {} is not supported. Falling back to {}.",
                requested, fallback
            ),
            Diagnostic::MissingKey { key, .. } => write!(f, "Translation key not found: {}", key),
            Diagnostic::NotAString { key, .. } => {
                write!(f, "Translation value is not a string: {}", key)
            }
            Diagnostic::NoTranslations { locale } => {
                write!(f, "No translations available for locale {}", locale)
            }
            Diagnostic::BuiltInRejected { locale, reason } => {
                write!(f, "Failed to initialize translations for {}: {}", locale, reason)
            }
        }
    }
}

/// Receiver for service diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Default sink: forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::UnsupportedLocale { requested, fallback } => {
                warn!(requested = %requested, fallback = %fallback, "{}", diagnostic)
            }
            Diagnostic::MissingKey { locale, key } | Diagnostic::NotAString { locale, key } => {
                warn!(locale = %locale, key = %key, "{}", diagnostic)
            }
            Diagnostic::NoTranslations { locale } => error!(locale = %locale, "{}", diagnostic),
            Diagnostic::BuiltInRejected { locale, .. } => {
                error!(locale = %locale, "{}", diagnostic)
            }
        }
    }
}

/// Sink that keeps every diagnostic in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    events: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn emit(&self, diagnostic: &Diagnostic) {
        if let Ok(mut events) = self.events.lock() {
            events.push(diagnostic.clone());
        }
    }
}
