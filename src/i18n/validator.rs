//! Translation bundle validation.
//!
//! Checks a locale's bundle against the default bundle and against the set
//! of keys the page templates actually use:
//! - keys used by the UI must exist (error)
//! - keys present in the default bundle but not in the candidate (warning)
//! - keys the default bundle does not know about (warning)
//! - `{placeholder}` names must match the default bundle's (warning)

use crate::i18n::TranslationBundle;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for translation bundles.
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static TEMPLATE_KEY_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate `candidate` against the default bundle and the UI key set.
    ///
    /// # Arguments
    /// * `reference` - The default locale's bundle
    /// * `candidate` - The bundle being checked (may be the reference itself)
    /// * `used_keys` - Every key the templates look up
    pub fn validate(
        reference: &TranslationBundle,
        candidate: &TranslationBundle,
        used_keys: &BTreeSet<String>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        let code = candidate.locale().code();

        for key in used_keys {
            if candidate.lookup(key).found().is_none() {
                report
                    .errors
                    .push(format!("[{}] key used by the UI is missing: {}", code, key));
            }
        }

        let reference_keys: BTreeSet<String> = reference.keys().into_iter().collect();
        let candidate_keys: BTreeSet<String> = candidate.keys().into_iter().collect();

        for key in reference_keys.difference(&candidate_keys) {
            if !used_keys.contains(key) {
                report
                    .warnings
                    .push(format!("[{}] key not translated: {}", code, key));
            }
        }

        for key in candidate_keys.difference(&reference_keys) {
            report
                .warnings
                .push(format!("[{}] key unknown to the default bundle: {}", code, key));
        }

        for key in reference_keys.intersection(&candidate_keys) {
            let (Some(expected), Some(actual)) = (
                reference.lookup(key).found(),
                candidate.lookup(key).found(),
            ) else {
                continue;
            };

            let expected = Self::extract_placeholders(expected);
            let actual = Self::extract_placeholders(actual);
            if expected != actual {
                report.warnings.push(format!(
                    "[{}] placeholder mismatch for {}: default has {:?}, translation has {:?}",
                    code, key, expected, actual
                ));
            }
        }

        report
    }

    /// Extract the literal keys passed to `t("...")` / `t_with("...", ..)`
    /// in template source code.
    pub fn extract_template_keys(source: &str) -> BTreeSet<String> {
        let regex = TEMPLATE_KEY_REGEX.get_or_init(|| {
            Regex::new(r#"\bt(?:_with)?\(\s*"([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)""#)
                .expect("template key pattern is valid")
        });

        regex
            .captures_iter(source)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract `{name}` placeholders, sorted.
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid")
        });

        let mut names: Vec<String> = regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    fn keys(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|k| k.to_string()).collect()
    }

    fn bundle(locale: Locale, source: &str) -> TranslationBundle {
        TranslationBundle::parse(locale, source).unwrap()
    }

    // ==================== Template Key Extraction Tests ====================

    #[test]
    fn test_extract_template_keys_single() {
        let source = r#"let title = ctx.t("hero.title");"#;
        assert_eq!(
            TranslationValidator::extract_template_keys(source),
            keys(&["hero.title"])
        );
    }

    #[test]
    fn test_extract_template_keys_with_params() {
        let source = r#"ctx.t_with("paywall.back_to", &[("section", &name)])"#;
        assert_eq!(
            TranslationValidator::extract_template_keys(source),
            keys(&["paywall.back_to"])
        );
    }

    #[test]
    fn test_extract_template_keys_deduplicates() {
        let source = r#"ctx.t("navbar.home") + ctx.t("navbar.home") + ctx.t("navbar.blog")"#;
        assert_eq!(
            TranslationValidator::extract_template_keys(source),
            keys(&["navbar.blog", "navbar.home"])
        );
    }

    #[test]
    fn test_extract_template_keys_bare_helper_call() {
        let source = r#"let t = |key| ctx.t(key); t("hero.subtitle"); format!("at(\"x\")")"#;
        assert_eq!(
            TranslationValidator::extract_template_keys(source),
            keys(&["hero.subtitle"])
        );
    }

    #[test]
    fn test_extract_template_keys_ignores_dynamic() {
        let source = r#"ctx.t(&format!("paywall.sections.{}", id))"#;
        assert!(TranslationValidator::extract_template_keys(source).is_empty());
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_extract_placeholders_sorted() {
        assert_eq!(
            TranslationValidator::extract_placeholders("{year} {name} and {name}"),
            vec!["name", "name", "year"]
        );
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(TranslationValidator::extract_placeholders("Ace the SAT").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_complete_bundle_is_clean() {
        let en = bundle(Locale::ENGLISH, r#"{"hero": {"title": "Ace the SAT"}}"#);
        let es = bundle(Locale::SPANISH, r#"{"hero": {"title": "Domina el SAT"}}"#);

        let report = TranslationValidator::validate(&en, &es, &keys(&["hero.title"]));
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_missing_used_key_is_error() {
        let en = bundle(Locale::ENGLISH, r#"{"hero": {"title": "Ace the SAT"}}"#);
        let es = bundle(Locale::SPANISH, r#"{"hero": {}}"#);

        let report = TranslationValidator::validate(&en, &es, &keys(&["hero.title"]));
        assert!(report.has_errors());
        assert!(report.errors[0].contains("[es]"));
        assert!(report.errors[0].contains("hero.title"));
    }

    #[test]
    fn test_validate_default_bundle_against_ui() {
        let en = bundle(Locale::ENGLISH, r#"{"hero": {"title": "Ace the SAT"}}"#);

        let report =
            TranslationValidator::validate(&en, &en, &keys(&["hero.title", "hero.cta"]));
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("hero.cta"));
    }

    #[test]
    fn test_validate_untranslated_and_unknown_keys_warn() {
        let en = bundle(Locale::ENGLISH, r#"{"a": "A", "b": "B"}"#);
        let ko = bundle(Locale::KOREAN, r#"{"a": "가", "c": "다"}"#);

        let report = TranslationValidator::validate(&en, &ko, &BTreeSet::new());
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings.iter().any(|w| w.contains("not translated: b")));
        assert!(report.warnings.iter().any(|w| w.contains("unknown to the default bundle: c")));
    }

    #[test]
    fn test_validate_placeholder_mismatch_warns() {
        let en = bundle(Locale::ENGLISH, r#"{"footer": {"copyright": "© {year} SAT"}}"#);
        let vi = bundle(Locale::VIETNAMESE, r#"{"footer": {"copyright": "© {nam} SAT"}}"#);

        let report = TranslationValidator::validate(&en, &vi, &BTreeSet::new());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("placeholder mismatch"));
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
