//! Document shell shared by every page: head, navbar with the language
//! switcher, and footer.

use crate::i18n::LocaleRegistry;
use crate::pages::html::{encode_query_value, escape};
use crate::pages::PageEnv;
use crate::routing::localized_path;
use crate::seo::{schema, PageMetadata, LOGO_URL, SITE_NAME, THEME_COLOR};
use chrono::Datelike;

struct NavItem {
    label: String,
    path: &'static str,
    children: Vec<NavItem>,
}

impl NavItem {
    fn leaf(label: String, path: &'static str) -> Self {
        Self {
            label,
            path,
            children: Vec::new(),
        }
    }
}

/// Wrap `body` in the full HTML document.
pub fn render(env: &PageEnv<'_>, metadata: &PageMetadata, body: &str) -> String {
    let locale = env.i18n.locale();

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=5">
{metadata}
<meta name="application-name" content="{site}">
<meta name="apple-mobile-web-app-capable" content="yes">
<meta name="apple-mobile-web-app-title" content="SAT Crash Course">
<meta name="format-detection" content="telephone=no">
<meta name="theme-color" content="{theme}">
<link rel="icon" href="{logo}">
<link rel="manifest" href="/manifest.webmanifest">
{schema}
</head>
<body>
<div class="page">
{navbar}
<main class="page-main">
{body}
</main>
{footer}
</div>
</body>
</html>
"#,
        lang = locale.code(),
        metadata = metadata.render(),
        site = escape(SITE_NAME),
        theme = THEME_COLOR,
        logo = LOGO_URL,
        schema = schema::render_scripts(env.base_url),
        navbar = navbar(env),
        body = body,
        footer = footer(env),
    )
}

fn nav_items(env: &PageEnv<'_>) -> Vec<NavItem> {
    vec![
        NavItem::leaf(env.i18n.t("navbar.home"), "/"),
        NavItem {
            label: env.i18n.t("navbar.practice_tests"),
            path: "/practice-tests",
            children: vec![
                NavItem::leaf(env.i18n.t("navbar.dsat_tests"), "/practice-tests/dsat"),
                NavItem::leaf(env.i18n.t("navbar.for_educators"), "/practice-tests/educators"),
            ],
        },
        NavItem::leaf(env.i18n.t("navbar.sat_courses"), "/courses"),
        NavItem {
            label: env.i18n.t("navbar.about_us"),
            path: "/about",
            children: vec![
                NavItem::leaf(env.i18n.t("navbar.who_we_are"), "/about/who-we-are"),
                NavItem::leaf(env.i18n.t("navbar.contact"), "/about/contact"),
            ],
        },
        NavItem::leaf(env.i18n.t("navbar.blog"), "/blog"),
    ]
}

fn navbar(env: &PageEnv<'_>) -> String {
    let locale = env.i18n.locale();
    let mut html = String::new();

    html.push_str(r#"<nav class="navbar">"#);
    html.push_str(&format!(
        r#"<a class="navbar-logo" href="{}"><img src="{}" alt="{}" width="350" height="105"></a>"#,
        localized_path(locale, "/"),
        LOGO_URL,
        escape(&env.i18n.t("hero.title")),
    ));

    html.push_str(r#"<ul class="navbar-items">"#);
    for item in nav_items(env) {
        html.push_str(&format!(
            r#"<li><a href="{}">{}</a>"#,
            localized_path(locale, item.path),
            escape(&item.label)
        ));
        if !item.children.is_empty() {
            html.push_str(r#"<ul class="navbar-dropdown">"#);
            for child in &item.children {
                html.push_str(&format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    localized_path(locale, child.path),
                    escape(&child.label)
                ));
            }
            html.push_str("</ul>");
        }
        html.push_str("</li>");
    }
    html.push_str("</ul>");

    html.push_str(&language_switcher(env));
    html.push_str("</nav>");
    html
}

/// One link per locale. Each goes through `/switch-locale`, which redirects
/// to the same page under the chosen locale.
fn language_switcher(env: &PageEnv<'_>) -> String {
    let current = env.i18n.locale();
    let from = encode_query_value(env.current_path);
    let mut html = format!(
        r#"<div class="language-switcher"><span class="language-label">{}</span><ul>"#,
        escape(&env.i18n.t("navbar.language"))
    );

    for config in LocaleRegistry::get().list_configs() {
        let selected = if config.code == current.code() {
            r#" aria-current="true" class="selected""#
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<li><a href="/switch-locale?to={code}&amp;from={from}" hreflang="{code}" lang="{code}"{selected}>{name}</a></li>"#,
            code = config.code,
            from = from,
            selected = selected,
            name = escape(config.native_name),
        ));
    }

    html.push_str("</ul></div>");
    html
}

fn footer(env: &PageEnv<'_>) -> String {
    let locale = env.i18n.locale();
    let year = chrono::Utc::now().year().to_string();

    format!(
        r#"<footer class="footer">
<p class="footer-tagline">{tagline}</p>
<div class="footer-links">
<h4>{quick_links}</h4>
<ul>
<li><a href="{practice_tests}">{practice_tests_label}</a></li>
<li><a href="{courses}">{courses_label}</a></li>
<li><a href="{contact}">{contact_label}</a></li>
</ul>
<h4>{legal}</h4>
<ul>
<li><a href="{legal_link}">{privacy}</a></li>
<li><a href="{legal_link}">{terms}</a></li>
</ul>
</div>
<p class="footer-copyright">{copyright}</p>
</footer>"#,
        tagline = escape(&env.i18n.t("footer.tagline")),
        quick_links = escape(&env.i18n.t("footer.quick_links")),
        practice_tests = localized_path(locale, "/practice-tests"),
        practice_tests_label = escape(&env.i18n.t("navbar.practice_tests")),
        courses = localized_path(locale, "/courses"),
        courses_label = escape(&env.i18n.t("navbar.sat_courses")),
        contact = localized_path(locale, "/about/contact"),
        contact_label = escape(&env.i18n.t("navbar.contact")),
        legal = escape(&env.i18n.t("footer.legal")),
        legal_link = escape(&localized_path(locale, "/paywall?section=legal")),
        privacy = escape(&env.i18n.t("footer.privacy")),
        terms = escape(&env.i18n.t("footer.terms")),
        copyright = escape(&env.i18n.t_with("footer.copyright", &[("year", &year)])),
    )
}
