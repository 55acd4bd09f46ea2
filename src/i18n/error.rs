//! Error taxonomy for locale resolution and translation lookup.

use thiserror::Error;

/// Failures raised by the i18n subsystem.
///
/// Only [`I18nError::Load`] for the default locale is allowed to reach the
/// user as a hard failure. The other variants are recovered close to where
/// they happen (default-locale substitution or echoing the raw key).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The bundle source for a locale could not be read or parsed.
    #[error("failed to load translations for locale '{locale}': {reason}")]
    Load { locale: String, reason: String },

    /// A key is absent from a loaded bundle or does not point at a string leaf.
    #[error("missing translation for key '{key}' in locale '{locale}'")]
    MissingKey { locale: String, key: String },

    /// The requested locale is not part of the registry.
    #[error("unsupported locale: '{0}'")]
    UnsupportedLocale(String),
}

impl I18nError {
    pub(crate) fn load(locale: &str, reason: impl ToString) -> Self {
        I18nError::Load {
            locale: locale.to_string(),
            reason: reason.to_string(),
        }
    }
}
