//! Startup loading of configured bundle sources
//!
//! All sources are read concurrently; bundles are then validated and
//! registered one at a time in configuration order, so a later source for the
//! same locale replaces an earlier one.

use futures::future::join_all;
use tokio::fs;

use crate::config::BundleSourceConfig;
use crate::i18n::loader::HttpBundleFetcher;
use crate::i18n::schema::Bundle;
use crate::i18n::service::LocaleService;
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging;

/// A configured source that could not be loaded
#[derive(Debug)]
pub struct SourceFailure {
    pub locale: String,
    pub origin: String,
    pub error: I18nError,
}

/// Load every configured source into `service`, returning the failures.
///
/// A failing source never prevents the others from loading.
pub async fn load_configured_bundles(
    service: &mut LocaleService,
    sources: &[BundleSourceConfig],
) -> Vec<SourceFailure> {
    let fetcher = service.fetcher();
    let bodies = join_all(sources.iter().map(|source| read_source(&fetcher, source))).await;

    let mut failures = Vec::new();
    for (source, body) in sources.iter().zip(bodies) {
        let origin = origin(source);
        let result =
            body.and_then(|body| service.load_translation_from_string(&source.locale, &body));

        match result {
            Ok(()) => {
                let key_count = service
                    .loader()
                    .get_cached(&source.locale)
                    .map(Bundle::key_count)
                    .unwrap_or(0);
                logging::log_bundle_loaded(&source.locale, &origin, key_count);
            }
            Err(error) => {
                logging::log_source_failure(&source.locale, &origin, &error);
                failures.push(SourceFailure {
                    locale: source.locale.clone(),
                    origin,
                    error,
                });
            }
        }
    }

    failures
}

async fn read_source(fetcher: &HttpBundleFetcher, source: &BundleSourceConfig) -> Result<String> {
    match (&source.path, &source.url) {
        (Some(path), _) => fs::read_to_string(path).await.map_err(|e| I18nError::Io {
            path: path.clone(),
            source: e,
        }),
        (None, Some(url)) => fetcher.fetch(&source.locale, url).await,
        (None, None) => Err(I18nError::Config(format!(
            "Bundle source for locale {} has neither path nor url",
            source.locale
        ))),
    }
}

fn origin(source: &BundleSourceConfig) -> String {
    source
        .path
        .clone()
        .or_else(|| source.url.clone())
        .unwrap_or_else(|| "<unset>".to_string())
}
