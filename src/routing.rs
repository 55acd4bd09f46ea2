//! Locale-prefixed URL handling and the locale switch.
//!
//! Every content route lives under a leading locale segment (`/{locale}/...`).
//! Switching locale computes the equivalent path under the new segment and
//! the browser performs a full navigation to it, so every string on the new
//! page comes from a fresh resolution context.

use crate::i18n::{I18nError, Locale, LocaleRegistry};

/// Split a request path into its locale and the remaining path.
///
/// A missing first segment resolves to the default locale and the whole
/// path is kept as the remainder. A segment shaped like a locale code but
/// not supported (`/fr/...`, `/pt-BR/...`) is dropped and the default
/// locale used instead.
///
/// # Example
/// ```ignore
/// assert_eq!(locale_from_path("/ko/blog"), (Locale::KOREAN, "/blog".to_string()));
/// assert_eq!(locale_from_path("/blog"), (Locale::ENGLISH, "/blog".to_string()));
/// assert_eq!(locale_from_path("/fr/blog"), (Locale::ENGLISH, "/blog".to_string()));
/// ```
pub fn locale_from_path(path: &str) -> (Locale, String) {
    let segments = segments(path);

    match segments.split_first() {
        Some((first, rest)) if LocaleRegistry::get().is_supported(first) => {
            (Locale::resolve(first), join(rest))
        }
        Some((first, rest)) if is_locale_shaped(first) => (Locale::default_locale(), join(rest)),
        _ => (Locale::default_locale(), join(&segments)),
    }
}

/// `xx` or `xx-YY`.
fn is_locale_shaped(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    match bytes.len() {
        2 => bytes.iter().all(u8::is_ascii_lowercase),
        5 => {
            bytes[..2].iter().all(u8::is_ascii_lowercase)
                && bytes[2] == b'-'
                && bytes[3..].iter().all(u8::is_ascii_alphabetic)
        }
        _ => false,
    }
}

/// Path equivalent to `current` under `target`.
///
/// The first segment is replaced when it is a supported locale; otherwise the
/// target is inserted in front, so unrelated segments are never overwritten.
/// A query string is carried over unchanged.
pub fn switch_locale_path(current: &str, target: &str) -> Result<String, I18nError> {
    let target = Locale::from_code(target)?;

    let (path, query) = match current.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (current, None),
    };

    let mut segments = segments(path);
    match segments.first_mut() {
        Some(first) if LocaleRegistry::get().is_supported(first) => *first = target.code(),
        _ => segments.insert(0, target.code()),
    }

    let mut switched = join(&segments);
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        switched.push('?');
        switched.push_str(query);
    }

    Ok(switched)
}

/// Accept only local absolute paths as redirect targets; anything else
/// becomes `/`. Control characters are rejected since the result ends up in
/// a `Location` header.
pub fn sanitize_return_path(from: Option<&str>) -> String {
    match from {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

/// Build a link to `path` under `locale`. `path` is relative to the locale
/// root; an empty path or "/" yields the locale home.
pub fn localized_path(locale: Locale, path: &str) -> String {
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        format!("/{}", locale.code())
    } else {
        format!("/{}/{}", locale.code(), path)
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn join(segments: &[&str]) -> String {
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== switch_locale_path Tests ====================

    #[test]
    fn test_switch_replaces_locale_segment() {
        assert_eq!(switch_locale_path("/en/courses", "es").unwrap(), "/es/courses");
    }

    #[test]
    fn test_switch_from_root_inserts_segment() {
        assert_eq!(switch_locale_path("/", "es").unwrap(), "/es");
    }

    #[test]
    fn test_switch_from_empty_path() {
        assert_eq!(switch_locale_path("", "ko").unwrap(), "/ko");
    }

    #[test]
    fn test_switch_does_not_overwrite_unrelated_segment() {
        assert_eq!(
            switch_locale_path("/courses/dsat", "vi").unwrap(),
            "/vi/courses/dsat"
        );
    }

    #[test]
    fn test_switch_locale_home() {
        assert_eq!(switch_locale_path("/zh", "hi").unwrap(), "/hi");
    }

    #[test]
    fn test_switch_keeps_query() {
        assert_eq!(
            switch_locale_path("/en/paywall?section=blog", "zh").unwrap(),
            "/zh/paywall?section=blog"
        );
    }

    #[test]
    fn test_switch_drops_empty_query() {
        assert_eq!(switch_locale_path("/en/blog?", "es").unwrap(), "/es/blog");
    }

    #[test]
    fn test_switch_to_same_locale() {
        assert_eq!(switch_locale_path("/es/about", "es").unwrap(), "/es/about");
    }

    #[test]
    fn test_switch_to_unsupported_locale_fails() {
        assert_eq!(
            switch_locale_path("/en/courses", "fr").unwrap_err(),
            I18nError::UnsupportedLocale("fr".to_string())
        );
    }

    // ==================== locale_from_path Tests ====================

    #[test]
    fn test_locale_from_path_with_locale() {
        assert_eq!(
            locale_from_path("/ko/about/contact"),
            (Locale::KOREAN, "/about/contact".to_string())
        );
    }

    #[test]
    fn test_locale_from_path_locale_only() {
        assert_eq!(locale_from_path("/vi"), (Locale::VIETNAMESE, "/".to_string()));
    }

    #[test]
    fn test_locale_from_path_without_locale() {
        assert_eq!(locale_from_path("/blog"), (Locale::ENGLISH, "/blog".to_string()));
        assert_eq!(locale_from_path("/"), (Locale::ENGLISH, "/".to_string()));
    }

    #[test]
    fn test_locale_from_path_unsupported_locale() {
        assert_eq!(
            locale_from_path("/fr/courses"),
            (Locale::ENGLISH, "/courses".to_string())
        );
        assert_eq!(locale_from_path("/pt-BR"), (Locale::ENGLISH, "/".to_string()));
    }

    #[test]
    fn test_is_locale_shaped() {
        assert!(is_locale_shaped("fr"));
        assert!(is_locale_shaped("en-US"));
        assert!(!is_locale_shaped("blog"));
        assert!(!is_locale_shaped("EN"));
        assert!(!is_locale_shaped("about"));
    }

    // ==================== Helper Tests ====================

    #[test]
    fn test_sanitize_return_path() {
        assert_eq!(sanitize_return_path(Some("/en/blog")), "/en/blog");
        assert_eq!(sanitize_return_path(None), "/");
        assert_eq!(sanitize_return_path(Some("https://evil.example")), "/");
        assert_eq!(sanitize_return_path(Some("//evil.example")), "/");
        assert_eq!(sanitize_return_path(Some("/\\evil.example")), "/");
    }

    #[test]
    fn test_sanitize_return_path_rejects_control_characters() {
        assert_eq!(sanitize_return_path(Some("/en/a\nb")), "/");
        assert_eq!(sanitize_return_path(Some("/en/a\r\nSet-Cookie: x=1")), "/");
        assert_eq!(sanitize_return_path(Some("/en/\u{7f}")), "/");
        assert_eq!(sanitize_return_path(Some("/es/páginas")), "/es/páginas");
    }

    #[test]
    fn test_localized_path() {
        assert_eq!(localized_path(Locale::SPANISH, "/"), "/es");
        assert_eq!(localized_path(Locale::SPANISH, ""), "/es");
        assert_eq!(
            localized_path(Locale::SPANISH, "/practice-tests/dsat"),
            "/es/practice-tests/dsat"
        );
    }

    proptest! {
        #[test]
        fn prop_switch_starts_with_target(
            path in "(/[a-z\\-]{0,8}){0,4}",
            index in 0usize..6,
        ) {
            let locales = LocaleRegistry::get().list_locales();
            let target = locales[index % locales.len()];
            let switched = switch_locale_path(&path, target.code()).unwrap();

            let prefix = format!("/{}", target.code());
            prop_assert_eq!(locale_from_path(&switched).0, target);
            prop_assert!(switched.starts_with(&prefix));
        }

        #[test]
        fn prop_switch_twice_equals_switch_once(
            path in "(/[a-z\\-]{0,8}){0,4}",
            first in 0usize..6,
            second in 0usize..6,
        ) {
            let locales = LocaleRegistry::get().list_locales();
            let a = locales[first % locales.len()].code();
            let b = locales[second % locales.len()].code();

            let via_a = switch_locale_path(&switch_locale_path(&path, a).unwrap(), b).unwrap();
            let direct = switch_locale_path(&switch_locale_path(&path, b).unwrap(), b).unwrap();
            prop_assert_eq!(via_a, direct);
        }
    }
}
