//! Locale registry: Single source of truth for all supported locales.
//!
//! The registry is a fixed, ordered list built once on first access via
//! `OnceLock` and never mutated afterwards. List order is the display order
//! of the locale switcher.

use crate::i18n::Locale;
use std::sync::OnceLock;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code used in URLs and bundle paths (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "Korean")
    pub name: &'static str,

    /// Native name shown in the language switcher (e.g., "한국어")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "ko_KR")
    pub og_locale: &'static str,

    /// Whether this is the default locale (exactly one must be true)
    pub is_default: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry::from_configs(default_locales()))
    }

    /// Build a registry from an explicit list.
    ///
    /// The first entry flagged `is_default` becomes the default; if none is
    /// flagged, the first entry is used.
    fn from_configs(locales: Vec<LocaleConfig>) -> LocaleRegistry {
        let default_index = locales
            .iter()
            .position(|locale| locale.is_default)
            .unwrap_or(0);

        LocaleRegistry {
            locales,
            default_index,
        }
    }

    /// Get a locale configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// All supported locales, in display order.
    pub fn list_locales(&self) -> Vec<Locale> {
        self.locales.iter().map(Locale::from_config).collect()
    }

    /// All locale configurations, in display order.
    pub fn list_configs(&self) -> &[LocaleConfig] {
        &self.locales
    }

    /// Membership test for a candidate locale code.
    ///
    /// Matching is exact: "EN" and "en-US" are not supported codes.
    pub fn is_supported(&self, candidate: &str) -> bool {
        self.get_by_code(candidate).is_some()
    }

    /// The default locale.
    pub fn default_locale(&self) -> Locale {
        Locale::from_config(self.default_config())
    }

    /// The default locale configuration.
    pub fn default_config(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }
}

/// Supported locales, in switcher display order.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            is_default: true,
        },
        LocaleConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            og_locale: "zh_CN",
            is_default: false,
        },
        LocaleConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            og_locale: "hi_IN",
            is_default: false,
        },
        LocaleConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            og_locale: "ko_KR",
            is_default: false,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            og_locale: "es_ES",
            is_default: false,
        },
        LocaleConfig {
            code: "vi",
            name: "Vietnamese",
            native_name: "Tiếng Việt",
            og_locale: "vi_VN",
            is_default: false,
        },
    ]
}
