//! Locale bundle checker - validates every bundle against the default locale
//!
//! Usage:
//!   cargo run --bin check-locales
//!
//! Optional:
//! - LOCALES_DIR (defaults to locales)
//!
//! Exits non-zero when any bundle is missing a key the pages look up, or
//! when the default bundle cannot be loaded.

use anyhow::{bail, Context, Result};
use sat_crash_course::{
    config::Config,
    i18n::{DirectorySource, LocaleRegistry, TranslationResolver, TranslationValidator},
    pages,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_locales=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let source = DirectorySource::new(&config.locales_dir);
    info!("Checking bundles under {}", source.root().display());

    let resolver = TranslationResolver::new(source);
    let registry = LocaleRegistry::get();
    let used_keys = pages::used_keys();

    let reference = resolver
        .load(registry.default_locale())
        .context("Default locale bundle failed to load")?;

    println!("\n{}", "=".repeat(60));
    println!(
        "Reference: {} ({} keys, {} used by pages)",
        registry.default_locale(),
        reference.keys().len(),
        used_keys.len()
    );
    println!("{}", "=".repeat(60));

    let mut failed = Vec::new();

    for locale in registry.list_locales() {
        let bundle = match resolver.load(locale) {
            Ok(bundle) => bundle,
            Err(e) => {
                println!("\n✗ {} ({}): {}", locale, locale.native_name(), e);
                failed.push(locale.code());
                continue;
            }
        };

        let report = TranslationValidator::validate(&reference, &bundle, &used_keys);
        let marker = if report.has_errors() { "✗" } else { "✓" };
        println!(
            "\n{} {} ({}): {} keys, {} errors, {} warnings",
            marker,
            locale,
            locale.native_name(),
            bundle.keys().len(),
            report.errors.len(),
            report.warnings.len()
        );
        for error in &report.errors {
            println!("    error: {}", error);
        }
        for warning in &report.warnings {
            println!("    warning: {}", warning);
        }

        if report.has_errors() {
            failed.push(locale.code());
        }
    }

    println!("\n{}", "=".repeat(60));

    if !failed.is_empty() {
        bail!("Locale bundles with errors: {}", failed.join(", "));
    }

    println!("All {} locales OK", registry.list_locales().len());
    Ok(())
}
