//! Internationalization (i18n) module: locale resolution and translation lookup.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported locales
//! - `locale`: Type-safe `Locale`, only constructible from registry entries
//! - `bundle`: Parsed translation trees and dot-path traversal
//! - `resolver`: Bundle sources, the process-wide cache and fallback policy
//! - `validator`: Bundle completeness checks against the UI
//! - `metrics`: Load/lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use sat_crash_course::i18n::{DirectorySource, TranslationResolver};
//!
//! let resolver = TranslationResolver::new(DirectorySource::new("locales"));
//! let ctx = resolver.activate("es")?;
//! let title = ctx.t("hero.title");
//! ```

mod bundle;
mod error;
mod locale;
mod metrics;
mod registry;
mod resolver;
mod validator;

pub use bundle::{Lookup, TranslationBundle};
pub use error::I18nError;
pub use locale::Locale;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use resolver::{
    get, resolve, BundleCache, BundleSource, DirectorySource, MemorySource, ResolutionContext,
    TranslationResolver, BUNDLE_FILE_NAME,
};
pub use validator::{TranslationValidator, ValidationReport};
