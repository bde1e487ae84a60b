//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::i18n::locale::{is_built_in, BUILT_IN_BUNDLES};
use crate::utils::errors::{I18nError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_i18n_config(&settings.i18n)?;
    validate_http_config(&settings.http)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate internationalization configuration
fn validate_i18n_config(config: &super::I18nConfig) -> Result<()> {
    if config.default_locale.is_empty() {
        return Err(I18nError::Config("Default locale is required".to_string()));
    }

    if !is_built_in(&config.default_locale) {
        let built_in: Vec<&str> = BUILT_IN_BUNDLES.iter().map(|(locale, _)| *locale).collect();
        return Err(I18nError::Config(format!(
            "Default locale must ship with the library: {}. Built-in locales: {:?}",
            config.default_locale, built_in
        )));
    }

    for (index, source) in config.bundles.iter().enumerate() {
        validate_bundle_source(index, source)?;
    }

    Ok(())
}

/// Validate one extra bundle source
fn validate_bundle_source(index: usize, source: &super::BundleSourceConfig) -> Result<()> {
    if source.locale.trim().is_empty() {
        return Err(I18nError::Config(format!(
            "Bundle source #{} is missing a locale",
            index
        )));
    }

    match (&source.path, &source.url) {
        (Some(_), Some(_)) | (None, None) => Err(I18nError::Config(format!(
            "Bundle source for locale {} must set exactly one of path or url",
            source.locale
        ))),
        (Some(path), None) if path.is_empty() => Err(I18nError::Config(format!(
            "Bundle source for locale {} has an empty path",
            source.locale
        ))),
        (Some(_), None) => Ok(()),
        (None, Some(url)) => {
            let parsed = Url::parse(url).map_err(|source_err| I18nError::InvalidLocation {
                location: url.clone(),
                source: source_err,
            })?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(I18nError::Config(format!(
                    "Bundle source for locale {} must use http or https: {}",
                    source.locale, url
                )));
            }
            Ok(())
        }
    }
}

/// Validate HTTP configuration
fn validate_http_config(config: &super::HttpConfig) -> Result<()> {
    if config.user_agent.is_empty() {
        return Err(I18nError::Config("HTTP user agent is required".to_string()));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(I18nError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(I18nError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
