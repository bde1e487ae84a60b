//! Translation loader
//!
//! Turns untrusted input (a JSON value, a JSON string, a file or a remote
//! resource) into a validated [`Bundle`], keeping its own locale-keyed cache of
//! everything it has loaded. The cache is independent of the bundle table held
//! by [`crate::i18n::LocaleService`].

use std::collections::HashMap;
use std::path::Path;

use reqwest::Client;
use serde_json::Value;
use tokio::fs;
use tracing::debug;
use url::Url;

use crate::config::HttpConfig;
use crate::i18n::schema::Bundle;
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging;

/// Network half of a remote load.
///
/// Cheap to clone; a clone can be awaited without holding any borrow of the
/// loader or the service, and the body handed back for registration afterwards.
#[derive(Debug, Clone, Default)]
pub struct HttpBundleFetcher {
    client: Client,
}

impl HttpBundleFetcher {
    /// Create a fetcher from HTTP settings
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| I18nError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Issue one GET to `location` and return the body of a 2xx response
    pub async fn fetch(&self, locale: &str, location: &str) -> Result<String> {
        let url = Url::parse(location).map_err(|source| I18nError::InvalidLocation {
            location: location.to_string(),
            source,
        })?;

        debug!(locale = %locale, url = %url, "Fetching remote translation");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| I18nError::Http {
                locale: locale.to_string(),
                location: location.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(I18nError::Transport {
                locale: locale.to_string(),
                location: location.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| I18nError::Http {
            locale: locale.to_string(),
            location: location.to_string(),
            source,
        })
    }
}

/// Validating loader with a locale-keyed cache
#[derive(Debug, Clone, Default)]
pub struct TranslationLoader {
    cache: HashMap<String, Bundle>,
    fetcher: HttpBundleFetcher,
}

impl TranslationLoader {
    pub fn new(fetcher: HttpBundleFetcher) -> Self {
        Self {
            cache: HashMap::new(),
            fetcher,
        }
    }

    /// Validate a JSON value and cache it as the bundle for `locale`
    pub fn load_from_object(&mut self, locale: &str, raw: Value) -> Result<Bundle> {
        let bundle = Bundle::try_from_value(raw).map_err(|violations| I18nError::Validation {
            locale: locale.to_string(),
            violations,
        })?;

        self.cache.insert(locale.to_string(), bundle.clone());
        debug!(locale = %locale, keys = bundle.key_count(), "Cached translation bundle");
        Ok(bundle)
    }

    /// Parse a JSON string, then validate it like [`Self::load_from_object`]
    pub fn load_from_string(&mut self, locale: &str, raw_json: &str) -> Result<Bundle> {
        let raw: Value = serde_json::from_str(raw_json).map_err(|source| I18nError::Parse {
            locale: locale.to_string(),
            source,
        })?;
        self.load_from_object(locale, raw)
    }

    /// Fetch `location` and load the body like [`Self::load_from_string`]
    pub async fn load_from_remote(&mut self, locale: &str, location: &str) -> Result<Bundle> {
        let body = self.fetcher.fetch(locale, location).await?;
        let bundle = self.load_from_string(locale, &body)?;
        logging::log_bundle_loaded(locale, location, bundle.key_count());
        Ok(bundle)
    }

    /// Read a JSON file and load it like [`Self::load_from_string`]
    pub async fn load_from_file(&mut self, locale: &str, path: impl AsRef<Path>) -> Result<Bundle> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).await.map_err(|source| I18nError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let bundle = self.load_from_string(locale, &content)?;
        logging::log_bundle_loaded(locale, &path.display().to_string(), bundle.key_count());
        Ok(bundle)
    }

    pub fn get_cached(&self, locale: &str) -> Option<&Bundle> {
        self.cache.get(locale)
    }

    pub fn is_cached(&self, locale: &str) -> bool {
        self.cache.contains_key(locale)
    }

    /// Drop every cached bundle
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.cache.keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Template bundle for authoring a new locale
    pub fn build_template() -> Bundle {
        Bundle::template()
    }

    pub fn fetcher(&self) -> &HttpBundleFetcher {
        &self.fetcher
    }
}
