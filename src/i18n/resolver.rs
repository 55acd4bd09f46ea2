//! Translation resolver: bundle loading, caching and key lookup with fallback.
//!
//! Rendering code never touches bundles directly. It asks the resolver to
//! `activate` a locale and reads every string through
//! [`ResolutionContext::t`].
//!
//! # Fallback rules
//!
//! - Unsupported locale: the default locale is used instead, silently.
//! - Bundle fails to load: the default locale's bundle is substituted and the
//!   substitution is cached under the requested locale. When the default
//!   bundle itself fails, the error is returned to the caller.
//! - Missing key: a warning is logged and the raw key is returned. There is
//!   no cascade to the default locale's value for that key.

use crate::i18n::{I18nError, Locale, TranslationBundle, TranslationMetrics};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

/// File name of the bundle inside each locale directory.
pub const BUNDLE_FILE_NAME: &str = "common.json";

/// Where bundle documents come from.
pub trait BundleSource: Send + Sync {
    /// Read the raw JSON document for `locale`.
    fn read(&self, locale: Locale) -> Result<String, I18nError>;
}

/// Reads `<root>/<code>/common.json`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn bundle_path(&self, locale: Locale) -> PathBuf {
        self.root.join(locale.code()).join(BUNDLE_FILE_NAME)
    }
}

impl BundleSource for DirectorySource {
    fn read(&self, locale: Locale) -> Result<String, I18nError> {
        let path = self.bundle_path(locale);
        std::fs::read_to_string(&path)
            .map_err(|e| I18nError::load(locale.code(), format!("{}: {}", path.display(), e)))
    }
}

/// In-memory documents keyed by locale.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<Locale, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the document for a locale.
    pub fn with(mut self, locale: Locale, document: impl Into<String>) -> Self {
        self.documents.insert(locale, document.into());
        self
    }
}

impl BundleSource for MemorySource {
    fn read(&self, locale: Locale) -> Result<String, I18nError> {
        self.documents
            .get(&locale)
            .cloned()
            .ok_or_else(|| I18nError::load(locale.code(), "no bundle source registered"))
    }
}

/// Process-scoped cache of parsed bundles.
///
/// Populated lazily, never invalidated. Concurrent first loads of the same
/// locale may both parse; the first insert wins and later ones reuse it.
#[derive(Debug, Default)]
pub struct BundleCache {
    bundles: RwLock<HashMap<Locale, Arc<TranslationBundle>>>,
}

impl BundleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: Locale) -> Option<Arc<TranslationBundle>> {
        self.bundles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locale)
            .cloned()
    }

    /// Store `bundle` under `locale` unless another thread got there first.
    /// Returns the bundle that ended up cached.
    pub fn insert(&self, locale: Locale, bundle: Arc<TranslationBundle>) -> Arc<TranslationBundle> {
        let mut bundles = self.bundles.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(bundles.entry(locale).or_insert(bundle))
    }

    pub fn len(&self) -> usize {
        self.bundles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads, caches and hands out bundles.
pub struct TranslationResolver {
    source: Box<dyn BundleSource>,
    cache: Arc<BundleCache>,
    metrics: Arc<TranslationMetrics>,
}

impl TranslationResolver {
    /// Create a resolver with its own empty cache.
    pub fn new(source: impl BundleSource + 'static) -> Self {
        Self::with_cache(source, Arc::new(BundleCache::new()))
    }

    /// Create a resolver sharing an existing cache.
    pub fn with_cache(source: impl BundleSource + 'static, cache: Arc<BundleCache>) -> Self {
        Self {
            source: Box::new(source),
            cache,
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }

    pub fn cache(&self) -> &Arc<BundleCache> {
        &self.cache
    }

    pub fn metrics(&self) -> &Arc<TranslationMetrics> {
        &self.metrics
    }

    /// Read and parse the bundle for `locale`, bypassing the cache.
    pub fn load(&self, locale: Locale) -> Result<TranslationBundle, I18nError> {
        let source = self.source.read(locale)?;
        TranslationBundle::parse(locale, &source)
    }

    /// Cached bundle for `locale`, applying the load fallback policy.
    pub fn bundle_for(&self, locale: Locale) -> Result<Arc<TranslationBundle>, I18nError> {
        if let Some(bundle) = self.cache.get(locale) {
            self.metrics.record_cache_hit();
            return Ok(bundle);
        }

        match self.load(locale) {
            Ok(bundle) => {
                self.metrics.record_bundle_load();
                info!(
                    locale = locale.code(),
                    keys = bundle.keys().len(),
                    "Loaded translation bundle"
                );
                Ok(self.cache.insert(locale, Arc::new(bundle)))
            }
            Err(err) if locale.is_default() => {
                error!(locale = locale.code(), error = %err, "Default translation bundle unavailable");
                Err(err)
            }
            Err(err) => {
                warn!(
                    locale = locale.code(),
                    error = %err,
                    "Falling back to default translation bundle"
                );
                self.metrics.record_load_fallback();
                let fallback = self.bundle_for(Locale::default_locale())?;
                Ok(self.cache.insert(locale, fallback))
            }
        }
    }

    /// Bind a resolution context for a requested locale code.
    ///
    /// Unsupported codes resolve to the default locale.
    pub fn activate(&self, code: &str) -> Result<ResolutionContext, I18nError> {
        let locale = Locale::resolve(code);
        if locale.code() != code {
            debug!(requested = code, locale = locale.code(), "Unsupported locale, using default");
        }
        self.activate_locale(locale)
    }

    /// Bind a resolution context for an already validated locale.
    pub fn activate_locale(&self, locale: Locale) -> Result<ResolutionContext, I18nError> {
        let bundle = self.bundle_for(locale)?;
        Ok(ResolutionContext {
            locale,
            bundle,
            metrics: Arc::clone(&self.metrics),
        })
    }

    /// Load every registered locale up front so the first request does not
    /// pay for parsing. Fails only when the default bundle is unusable.
    pub fn warm(&self) -> Result<(), I18nError> {
        for locale in crate::i18n::LocaleRegistry::get().list_locales() {
            self.bundle_for(locale)?;
        }
        Ok(())
    }
}

/// Strict lookup: the string leaf for `key`, or `MissingKey`.
pub fn resolve(bundle: &TranslationBundle, key: &str) -> Result<String, I18nError> {
    bundle
        .lookup(key)
        .found()
        .map(str::to_string)
        .ok_or_else(|| I18nError::MissingKey {
            locale: bundle.locale().code().to_string(),
            key: key.to_string(),
        })
}

/// Lookup with recovery: the translation, or the raw key plus a warning.
pub fn get(bundle: &TranslationBundle, key: &str) -> String {
    lookup_or_echo(bundle, key, None)
}

fn lookup_or_echo(
    bundle: &TranslationBundle,
    key: &str,
    metrics: Option<&TranslationMetrics>,
) -> String {
    match resolve(bundle, key) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                key = key,
                locale = bundle.locale().code(),
                "{}",
                err
            );
            if let Some(metrics) = metrics {
                metrics.record_missing_key();
            }
            key.to_string()
        }
    }
}

/// The active locale and its bundle for one render.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    locale: Locale,
    bundle: Arc<TranslationBundle>,
    metrics: Arc<TranslationMetrics>,
}

impl ResolutionContext {
    /// Locale the request asked for (and that URLs are built with).
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn bundle(&self) -> &TranslationBundle {
        &self.bundle
    }

    /// Whether the bundle in use belongs to a different locale because the
    /// requested one failed to load.
    pub fn is_fallback(&self) -> bool {
        self.bundle.locale() != self.locale
    }

    /// Translate `key`. Always returns a string.
    pub fn t(&self, key: &str) -> String {
        lookup_or_echo(&self.bundle, key, Some(&self.metrics))
    }

    /// Translate `key` and substitute `{name}` placeholders.
    ///
    /// # Example
    /// ```ignore
    /// ctx.t_with("paywall.back_to", &[("section", "Blog")]);
    /// ```
    ///
    /// Substitution is a single pass over the translation, so placeholder
    /// syntax inside a substituted value is emitted as-is.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), params)
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut text = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        text.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| (*value, close))
        });

        match value {
            Some((value, close)) => {
                text.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                text.push('{');
                rest = after;
            }
        }
    }

    text.push_str(rest);
    text
}
