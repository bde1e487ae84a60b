//! Locale resolution service
//!
//! Owns the active locale, the table of registered bundles and the table of
//! per-locale overrides, and serves dotted-key lookups with parameter
//! substitution.
//!
//! # Failure policy
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Unknown key path | Diagnostic, returns the key itself |
//! | Leaf is not a string | Diagnostic, returns the key itself |
//! | Unregistered locale requested | Diagnostic, active locale becomes the default |
//! | Built-in bundle fails validation | Diagnostic, service still initializes |
//! | Malformed bundle passed to a loader | `Err`, nothing registered |
//!
//! Every public operation first runs [`LocaleService::initialize`], which loads
//! the embedded bundles exactly once per lifecycle.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::config::I18nConfig;
use crate::i18n::diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
use crate::i18n::format::{format_message, TranslationParams};
use crate::i18n::loader::{HttpBundleFetcher, TranslationLoader};
use crate::i18n::locale::{EnvLocaleSource, LocaleSource, BUILT_IN_BUNDLES};
use crate::i18n::merge::deep_merge;
use crate::i18n::schema::{count_leaves, Bundle};
use crate::utils::errors::Result;
use crate::utils::logging;

/// Bundle and override tables.
///
/// Both are ordered by locale identifier, which also fixes the order in which
/// language-tag detection considers candidates.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    bundles: BTreeMap<String, Bundle>,
    overrides: BTreeMap<String, Map<String, Value>>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with `bundle` pre-registered for `locale`
    pub fn with_bundle(mut self, locale: impl Into<String>, bundle: Bundle) -> Self {
        self.bundles.insert(locale.into(), bundle);
        self
    }

    pub fn bundle(&self, locale: &str) -> Option<&Bundle> {
        self.bundles.get(locale)
    }
}

/// Translation statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    pub active_locale: String,
    pub languages: Vec<LanguageStats>,
}

/// Language-specific statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub code: String,
    pub key_count: usize,
    pub override_count: usize,
}

enum LookupFailure {
    Missing,
    NotAString,
    NoTranslations,
}

/// Process-wide locale state, held as an explicit object.
///
/// Construct one per application (or per test) and share it the way the rest
/// of the application shares services.
pub struct LocaleService {
    store: TranslationStore,
    loader: TranslationLoader,
    default_locale: String,
    active_locale: String,
    initialized: bool,
    effective: HashMap<String, Map<String, Value>>,
    diagnostics: Arc<dyn DiagnosticSink>,
    locale_source: Arc<dyn LocaleSource>,
}

impl std::fmt::Debug for LocaleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleService")
            .field("default_locale", &self.default_locale)
            .field("active_locale", &self.active_locale)
            .field("initialized", &self.initialized)
            .field("locales", &self.store.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for LocaleService {
    fn default() -> Self {
        Self::new(&I18nConfig::default())
    }
}

impl LocaleService {
    /// Create an uninitialized service
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            store: TranslationStore::default(),
            loader: TranslationLoader::default(),
            default_locale: config.default_locale.clone(),
            active_locale: config.default_locale.clone(),
            initialized: false,
            effective: HashMap::new(),
            diagnostics: Arc::new(TracingDiagnostics),
            locale_source: Arc::new(EnvLocaleSource),
        }
    }

    /// Start from a pre-populated store instead of an empty one
    pub fn with_store(mut self, store: TranslationStore) -> Self {
        self.store = store;
        self.effective.clear();
        self
    }

    pub fn with_loader(mut self, loader: TranslationLoader) -> Self {
        self.loader = loader;
        self
    }

    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn with_locale_source(mut self, source: Arc<dyn LocaleSource>) -> Self {
        self.locale_source = source;
        self
    }

    /// Load the embedded bundles. Runs once per lifecycle.
    ///
    /// A built-in bundle that fails validation is reported and skipped; the
    /// service is still marked initialized and never retries.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        for (locale, raw) in BUILT_IN_BUNDLES {
            if self.store.bundles.contains_key(locale) {
                continue;
            }
            match self.loader.load_from_string(locale, raw) {
                Ok(bundle) => {
                    self.store.bundles.insert(locale.to_string(), bundle);
                }
                Err(e) => self.emit(Diagnostic::BuiltInRejected {
                    locale: locale.to_string(),
                    reason: e.to_string(),
                }),
            }
        }
        self.effective.clear();

        debug!(
            locales = ?self.store.bundles.keys().collect::<Vec<_>>(),
            "Locale service initialized"
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Drop every registered bundle and override and return to the
    /// uninitialized state. The loader's cache is left alone.
    pub fn reset(&mut self) {
        self.store = TranslationStore::default();
        self.effective.clear();
        self.active_locale = self.default_locale.clone();
        self.initialized = false;
    }

    /// Switch the active locale.
    ///
    /// An unregistered locale is reported and the active locale is reset to
    /// the default one rather than left where it was.
    pub fn set_active_locale(&mut self, locale: &str) {
        self.initialize();

        let next = if self.store.bundles.contains_key(locale) {
            locale.to_string()
        } else {
            self.emit(Diagnostic::UnsupportedLocale {
                requested: locale.to_string(),
                fallback: self.default_locale.clone(),
            });
            self.default_locale.clone()
        };

        if next != self.active_locale {
            logging::log_locale_change(&self.active_locale, &next);
        }
        self.active_locale = next;
    }

    pub fn active_locale(&mut self) -> &str {
        self.initialize();
        &self.active_locale
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Insert or replace the full bundle for `locale`
    pub fn register_bundle(&mut self, locale: &str, bundle: Bundle) {
        self.initialize();
        self.store.bundles.insert(locale.to_string(), bundle);
        self.effective.clear();
        debug!(locale = %locale, "Registered translation bundle");
    }

    /// Alias of [`Self::register_bundle`]
    pub fn add_locale(&mut self, locale: &str, bundle: Bundle) {
        self.register_bundle(locale, bundle);
    }

    /// Layer `partial` on top of any overrides already registered for `locale`.
    ///
    /// Later registrations win on conflicting leaves; sibling keys survive.
    /// No base bundle is needed for `locale` yet.
    pub fn register_overrides(&mut self, locale: &str, partial: Map<String, Value>) {
        self.initialize();
        let merged = match self.store.overrides.get(locale) {
            Some(existing) => deep_merge(existing, &partial),
            None => partial,
        };
        self.store.overrides.insert(locale.to_string(), merged);
        self.effective.clear();
        debug!(locale = %locale, "Registered translation overrides");
    }

    /// Validate `raw` through the loader, then register it
    pub fn load_translation_from_object(&mut self, locale: &str, raw: Value) -> Result<()> {
        self.initialize();
        let bundle = self.loader.load_from_object(locale, raw)?;
        self.register_bundle(locale, bundle);
        Ok(())
    }

    /// Parse and validate `raw_json` through the loader, then register it
    pub fn load_translation_from_string(&mut self, locale: &str, raw_json: &str) -> Result<()> {
        self.initialize();
        let bundle = self.loader.load_from_string(locale, raw_json)?;
        self.register_bundle(locale, bundle);
        Ok(())
    }

    /// Read, validate and register a bundle file
    pub async fn load_translation_from_file(
        &mut self,
        locale: &str,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        self.initialize();
        let bundle = self.loader.load_from_file(locale, path).await?;
        self.register_bundle(locale, bundle);
        Ok(())
    }

    /// Fetch, validate and register a remote bundle.
    ///
    /// To keep serving lookups while the request is in flight, await
    /// [`Self::fetcher`] instead and pass the body to
    /// [`Self::load_translation_from_string`].
    pub async fn load_translation_from_url(&mut self, locale: &str, location: &str) -> Result<()> {
        self.initialize();
        let bundle = self.loader.load_from_remote(locale, location).await?;
        self.register_bundle(locale, bundle);
        Ok(())
    }

    /// A detached handle for the network half of a remote load
    pub fn fetcher(&self) -> HttpBundleFetcher {
        self.loader.fetcher().clone()
    }

    pub fn loader(&self) -> &TranslationLoader {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut TranslationLoader {
        &mut self.loader
    }

    /// Resolve `key` (e.g. `html5QrcodeScanner.scanningStatus`) for the active
    /// locale and substitute `params`.
    ///
    /// Never fails: an unresolvable key is reported and returned unchanged.
    pub fn translate(&mut self, key: &str, params: Option<&TranslationParams>) -> String {
        self.initialize();

        match self.lookup(key) {
            Ok(template) => format_message(&template, params),
            Err(failure) => {
                let locale = self.active_locale.clone();
                let diagnostic = match failure {
                    LookupFailure::Missing => Diagnostic::MissingKey {
                        locale,
                        key: key.to_string(),
                    },
                    LookupFailure::NotAString => Diagnostic::NotAString {
                        locale,
                        key: key.to_string(),
                    },
                    LookupFailure::NoTranslations => Diagnostic::NoTranslations { locale },
                };
                self.emit(diagnostic);
                key.to_string()
            }
        }
    }

    /// Shorthand for [`Self::translate`] without parameters
    pub fn t(&mut self, key: &str) -> String {
        self.translate(key, None)
    }

    fn lookup(&mut self, key: &str) -> std::result::Result<String, LookupFailure> {
        let tree = self
            .effective_tree()
            .ok_or(LookupFailure::NoTranslations)?;

        let mut node: Option<&Value> = None;
        for segment in key.split('.') {
            let map = match node {
                None => tree,
                Some(Value::Object(map)) => map,
                Some(_) => return Err(LookupFailure::Missing),
            };
            node = Some(map.get(segment).ok_or(LookupFailure::Missing)?);
        }

        match node {
            Some(Value::String(text)) => Ok(text.clone()),
            _ => Err(LookupFailure::NotAString),
        }
    }

    /// Base bundle for the active locale (or the default locale when the active
    /// one has none) with the active locale's overrides layered on top.
    fn effective_tree(&mut self) -> Option<&Map<String, Value>> {
        let locale = self.active_locale.clone();
        let base = self
            .store
            .bundles
            .get(&locale)
            .or_else(|| self.store.bundles.get(&self.default_locale))?;

        let Some(overrides) = self.store.overrides.get(&locale) else {
            return Some(base.as_map());
        };

        if !self.effective.contains_key(&locale) {
            let merged = deep_merge(base.as_map(), overrides);
            self.effective.insert(locale.clone(), merged);
        }
        self.effective.get(&locale)
    }

    /// Owned copy of the effective bundle for the active locale
    pub fn effective_bundle(&mut self) -> Option<Map<String, Value>> {
        self.initialize();
        self.effective_tree().cloned()
    }

    /// Accumulated overrides for `locale`
    pub fn overrides_for(&mut self, locale: &str) -> Option<&Map<String, Value>> {
        self.initialize();
        self.store.overrides.get(locale)
    }

    pub fn is_registered(&mut self, locale: &str) -> bool {
        self.initialize();
        self.store.bundles.contains_key(locale)
    }

    pub fn registered_locales(&mut self) -> Vec<String> {
        self.initialize();
        self.store.bundles.keys().cloned().collect()
    }

    /// Pick the active locale from the injected [`LocaleSource`].
    ///
    /// Tries an exact case-insensitive match against registered locales, then
    /// the primary subtag as a case-insensitive prefix, then the default
    /// locale. The result is applied and returned.
    pub fn detect_active_locale(&mut self) -> String {
        self.initialize();

        let tag = self.locale_source.language_tag();
        let detected = tag
            .as_deref()
            .and_then(|tag| self.match_language_tag(tag))
            .unwrap_or_else(|| self.default_locale.clone());

        debug!(tag = ?tag, detected = %detected, "Detected locale");
        self.set_active_locale(&detected);
        detected
    }

    /// Registered locale matching `tag`, without changing any state
    pub fn match_language_tag(&mut self, tag: &str) -> Option<String> {
        self.initialize();

        let wanted = tag.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        if let Some(exact) = self
            .store
            .bundles
            .keys()
            .find(|locale| locale.to_lowercase() == wanted)
        {
            return Some(exact.clone());
        }

        let primary = wanted.split('-').next().unwrap_or(&wanted);
        if primary.is_empty() {
            return None;
        }
        self.store
            .bundles
            .keys()
            .find(|locale| locale.to_lowercase().starts_with(primary))
            .cloned()
    }

    /// Key counts per registered locale
    pub fn stats(&mut self) -> TranslationStats {
        self.initialize();

        let languages = self
            .store
            .bundles
            .iter()
            .map(|(code, bundle)| LanguageStats {
                code: code.clone(),
                key_count: bundle.key_count(),
                override_count: self
                    .store
                    .overrides
                    .get(code)
                    .map(count_leaves)
                    .unwrap_or(0),
            })
            .collect();

        TranslationStats {
            active_locale: self.active_locale.clone(),
            languages,
        }
    }

    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.emit(&diagnostic);
    }
}
