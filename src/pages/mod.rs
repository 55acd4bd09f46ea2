//! Server-rendered pages.
//!
//! Every visible string is read through the request's
//! [`ResolutionContext`]; templates never hold localized text themselves.

pub mod html;
pub mod layout;

mod home;
mod not_found;
mod paywall;

pub use paywall::{normalize_section, section_title_key, DEFAULT_SECTION};

use crate::i18n::{ResolutionContext, TranslationValidator};
use crate::seo::{sitemap, PageMetadata};
use std::collections::BTreeSet;

/// Template sources scanned for `t("...")` calls by [`used_keys`].
const TEMPLATE_SOURCES: &[&str] = &[
    include_str!("layout.rs"),
    include_str!("home.rs"),
    include_str!("paywall.rs"),
    include_str!("not_found.rs"),
    include_str!("../seo/metadata.rs"),
];

/// Everything a template needs for one render.
#[derive(Debug, Clone, Copy)]
pub struct PageEnv<'a> {
    pub i18n: &'a ResolutionContext,
    /// Absolute site origin used for canonical and alternate URLs
    pub base_url: &'a str,
    /// Request path and query, used by the language switcher
    pub current_path: &'a str,
}

impl<'a> PageEnv<'a> {
    pub fn new(i18n: &'a ResolutionContext, base_url: &'a str, current_path: &'a str) -> Self {
        Self {
            i18n,
            base_url: base_url.trim_end_matches('/'),
            current_path,
        }
    }
}

/// Pages reachable under a locale prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Paywall(&'static str),
    NotFound,
}

impl Page {
    /// Route a locale-relative path (`"/"`, `"/paywall"`, `"/courses"`, ...).
    ///
    /// Site sections that are not built yet all land on the paywall.
    pub fn from_path(rest: &str, section: Option<&str>) -> Page {
        let trimmed = rest.trim_matches('/');

        if trimmed.is_empty() {
            return Page::Home;
        }
        if trimmed == "paywall" {
            return Page::Paywall(normalize_section(section));
        }
        if sitemap::SECTIONS.contains(&trimmed) {
            let top = trimmed.split('/').next().unwrap_or(trimmed);
            return Page::Paywall(normalize_section(Some(top)));
        }

        Page::NotFound
    }
}

/// Render a full HTML document for `page`.
pub fn render(env: &PageEnv<'_>, page: Page) -> String {
    let (metadata, body) = match page {
        Page::Home => (PageMetadata::home(env), home::render(env)),
        Page::Paywall(section) => (PageMetadata::paywall(env), paywall::render(env, section)),
        Page::NotFound => (PageMetadata::not_found(env), not_found::render(env)),
    };

    layout::render(env, &metadata, &body)
}

/// Standalone error document for when no bundle can be loaded at all.
///
/// Free of translation lookups. `detail` is shown verbatim (escaped) when
/// present.
pub fn render_error(detail: Option<&str>) -> String {
    let detail = detail
        .map(|detail| format!("<pre class=\"error-detail\">{}</pre>\n", html::escape(detail)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="robots" content="noindex, nofollow">
<title>Temporarily unavailable</title>
</head>
<body>
<main class="error">
<h1>Temporarily unavailable</h1>
<p>The site content could not be loaded. Please try again shortly.</p>
{}</main>
</body>
</html>
"#,
        detail
    )
}

/// Every translation key the templates can look up.
pub fn used_keys() -> BTreeSet<String> {
    let mut keys: BTreeSet<String> = TEMPLATE_SOURCES
        .iter()
        .flat_map(|source| TranslationValidator::extract_template_keys(source))
        .collect();
    keys.extend(paywall::section_title_keys());
    keys
}
