//! Locale type: validated locale representation.
//!
//! A `Locale` can only be built from a registry entry, so every locale that
//! reaches the rendering layer is a member of the registry.

use crate::i18n::{I18nError, LocaleConfig, LocaleRegistry};
use std::fmt;

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Locale code (e.g., "en", "es")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const CHINESE: Locale = Locale { code: "zh" };
    pub const HINDI: Locale = Locale { code: "hi" };
    pub const KOREAN: Locale = Locale { code: "ko" };
    pub const SPANISH: Locale = Locale { code: "es" };
    pub const VIETNAMESE: Locale = Locale { code: "vi" };

    pub(crate) fn from_config(config: &LocaleConfig) -> Locale {
        Locale { code: config.code }
    }

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is in the registry
    /// * `Err(I18nError::UnsupportedLocale)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let korean = Locale::from_code("ko")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale, I18nError> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(Locale::from_config)
            .ok_or_else(|| I18nError::UnsupportedLocale(code.to_string()))
    }

    /// Resolve a candidate code, substituting the default locale when the
    /// candidate is not supported.
    pub fn resolve(code: &str) -> Locale {
        Locale::from_code(code).unwrap_or_else(|_| Locale::default_locale())
    }

    /// The default locale from the registry.
    pub fn default_locale() -> Locale {
        LocaleRegistry::get().default_locale()
    }

    /// Get the locale code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// Locales are only constructed from registry entries, so the lookup
    /// always succeeds; the default configuration is returned otherwise.
    pub fn config(&self) -> &'static LocaleConfig {
        let registry = LocaleRegistry::get();
        registry
            .get_by_code(self.code)
            .unwrap_or_else(|| registry.default_config())
    }

    /// English name of the language (e.g., "Hindi").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "हिन्दी").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Open Graph locale tag (e.g., "hi_IN").
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    /// Check if this is the default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
