//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

use crate::i18n::locale::DEFAULT_LOCALE;
use crate::utils::errors::Result;

/// Environment variable naming an alternative config file
pub const CONFIG_PATH_ENV: &str = "QRCODE_I18N_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Internationalization configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Locale every lookup falls back to; must ship with the library
    pub default_locale: String,
    /// Pick the active locale from the environment at startup
    pub detect_locale: bool,
    /// Extra bundles to load at startup
    #[serde(default)]
    pub bundles: Vec<BundleSourceConfig>,
}

/// One extra bundle, read from exactly one of `path` or `url`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BundleSourceConfig {
    pub locale: String,
    pub path: Option<String>,
    pub url: Option<String>,
}

/// HTTP client configuration for remote bundles
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling log files; stderr only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self> {
        let file = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "qrcode-i18n".to_string());
        Self::from_file(&file)
    }

    /// Load settings from `file` (extension optional) layered under the environment
    pub fn from_file(file: &str) -> Result<Self> {
        let defaults = Self::default();
        let settings = config::Config::builder()
            .set_default("i18n.default_locale", defaults.i18n.default_locale)?
            .set_default("i18n.detect_locale", defaults.i18n.detect_locale)?
            .set_default("http.user_agent", defaults.http.user_agent)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("QRCODE_I18N").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        super::validation::validate_settings(self)
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            detect_locale: true,
            bundles: Vec::new(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_path: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
