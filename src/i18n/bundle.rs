//! Translation bundles: nested string tables addressed by dot-delimited keys.

use crate::i18n::{I18nError, Locale};
use serde_json::{Map, Value};

/// Result of walking a bundle for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The key resolves to a string leaf.
    Found(&'a str),
    /// A segment is absent, an intermediate node is not a map, or the final
    /// node is not a string.
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a str> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

/// All localized strings for one locale.
///
/// Immutable once parsed. Shared between requests behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationBundle {
    locale: Locale,
    root: Map<String, Value>,
}

impl TranslationBundle {
    /// Parse a bundle from its JSON source.
    ///
    /// The document root must be an object. Non-string leaves (numbers,
    /// arrays, ...) are accepted but never resolve as translations.
    pub fn parse(locale: Locale, source: &str) -> Result<Self, I18nError> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| I18nError::load(locale.code(), e))?;

        match value {
            Value::Object(root) => Ok(Self { locale, root }),
            other => Err(I18nError::load(
                locale.code(),
                format!("expected a JSON object at the root, found {}", kind(&other)),
            )),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Walk the tree one `.`-separated segment at a time.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        let mut segments = key.split('.');
        let Some(first) = segments.next() else {
            return Lookup::NotFound;
        };

        let mut node = match self.root.get(first) {
            Some(node) => node,
            None => return Lookup::NotFound,
        };

        for segment in segments {
            node = match node {
                Value::Object(map) => match map.get(segment) {
                    Some(next) => next,
                    None => return Lookup::NotFound,
                },
                _ => return Lookup::NotFound,
            };
        }

        match node {
            Value::String(value) => Lookup::Found(value),
            _ => Lookup::NotFound,
        }
    }

    /// Dot-path keys of every string leaf, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(&self.root, "", &mut keys);
        keys.sort();
        keys
    }
}

fn collect_keys(map: &Map<String, Value>, prefix: &str, keys: &mut Vec<String>) {
    for (name, value) in map {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        match value {
            Value::String(_) => keys.push(path),
            Value::Object(child) => collect_keys(child, &path, keys),
            _ => {}
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(source: &str) -> TranslationBundle {
        TranslationBundle::parse(Locale::ENGLISH, source).expect("valid bundle")
    }

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = TranslationBundle::parse(Locale::SPANISH, "{ not json").unwrap_err();
        assert!(matches!(err, I18nError::Load { ref locale, .. } if locale == "es"));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = TranslationBundle::parse(Locale::KOREAN, r#"["hero"]"#).unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_parse_keeps_locale() {
        let bundle = TranslationBundle::parse(Locale::HINDI, "{}").unwrap();
        assert_eq!(bundle.locale(), Locale::HINDI);
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_nested_string() {
        let bundle = bundle(r#"{"hero": {"title": "Ace the SAT"}}"#);
        assert_eq!(bundle.lookup("hero.title"), Lookup::Found("Ace the SAT"));
    }

    #[test]
    fn test_lookup_top_level_string() {
        let bundle = bundle(r#"{"tagline": "Prep smarter"}"#);
        assert_eq!(bundle.lookup("tagline").found(), Some("Prep smarter"));
    }

    #[test]
    fn test_lookup_deep_nesting() {
        let bundle = bundle(r#"{"a": {"b": {"c": {"d": {"e": "deep"}}}}}"#);
        assert_eq!(bundle.lookup("a.b.c.d.e"), Lookup::Found("deep"));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let bundle = bundle(r#"{"hero": {"title": "Ace the SAT"}}"#);
        assert_eq!(bundle.lookup("hero.subtitle"), Lookup::NotFound);
        assert_eq!(bundle.lookup("navbar.home"), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_subtree_is_not_found() {
        let bundle = bundle(r#"{"hero": {"title": "Ace the SAT"}}"#);
        assert_eq!(bundle.lookup("hero"), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_through_string_is_not_found() {
        let bundle = bundle(r#"{"hero": {"title": "Ace the SAT"}}"#);
        assert_eq!(bundle.lookup("hero.title.extra"), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_non_string_leaf_is_not_found() {
        let bundle = bundle(r#"{"stats": {"students": 5000, "tags": ["a"]}}"#);
        assert_eq!(bundle.lookup("stats.students"), Lookup::NotFound);
        assert_eq!(bundle.lookup("stats.tags"), Lookup::NotFound);
    }

    #[test]
    fn test_lookup_empty_and_degenerate_keys() {
        let bundle = bundle(r#"{"hero": {"title": "Ace the SAT"}}"#);
        assert_eq!(bundle.lookup(""), Lookup::NotFound);
        assert_eq!(bundle.lookup("."), Lookup::NotFound);
        assert_eq!(bundle.lookup("hero..title"), Lookup::NotFound);
    }

    // ==================== Key Listing Tests ====================

    #[test]
    fn test_keys_lists_string_leaves_only() {
        let bundle = bundle(
            r#"{"hero": {"title": "T", "cta": "C"}, "count": 3, "footer": {"legal": {"terms": "Terms"}}}"#,
        );
        assert_eq!(
            bundle.keys(),
            vec!["footer.legal.terms", "hero.cta", "hero.title"]
        );
    }
}
