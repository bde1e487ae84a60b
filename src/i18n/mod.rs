//! Internationalization module
//!
//! This module handles locale resolution for the scanner UI strings.
//! It provides bundle validation and loading, locale detection, override
//! layering and message formatting.

pub mod diagnostics;
pub mod format;
pub mod loader;
pub mod locale;
pub mod merge;
pub mod schema;
pub mod service;
pub mod sources;

// Re-export commonly used i18n components
pub use diagnostics::{Diagnostic, DiagnosticSink, RecordingDiagnostics, TracingDiagnostics};
pub use format::{format_message, params, TranslationParams};
pub use loader::{HttpBundleFetcher, TranslationLoader};
pub use locale::{EnvLocaleSource, FixedLocaleSource, LocaleSource, SupportedLocale, DEFAULT_LOCALE};
pub use schema::{Bundle, SchemaViolation};
pub use service::{LanguageStats, LocaleService, TranslationStats, TranslationStore};
pub use sources::{load_configured_bundles, SourceFailure};
