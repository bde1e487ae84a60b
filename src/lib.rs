//! qrcode-i18n
//!
//! Locale resolution and string interpolation for QR code scanner UIs.
//! Given a requested locale and a dotted translation key it returns a
//! localized, parameter-substituted string, falling back deterministically
//! when a locale, key or value is missing or malformed.

pub mod config;
pub mod i18n;
pub mod strings;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{I18nError, Result};

// Re-export main components for easy access
pub use i18n::{Bundle, LocaleService, TranslationLoader, TranslationParams};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
