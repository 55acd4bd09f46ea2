//! Per-page `<head>` metadata: title, description, robots directive,
//! canonical URL, Open Graph and Twitter cards, and hreflang alternates.

use crate::i18n::{Locale, LocaleRegistry};
use crate::pages::html::escape;
use crate::pages::PageEnv;
use crate::seo::{LOGO_URL, SITE_NAME, TWITTER_HANDLE};

const INDEX: &str = "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";
const NO_INDEX: &str = "noindex, nofollow";

#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Option<String>,
    pub robots: &'static str,
    pub canonical: String,
    pub og_locale: &'static str,
    pub og_title: String,
    pub og_description: String,
    pub twitter_description: String,
    /// `(hreflang, url)` pairs, one per locale plus `x-default`
    pub alternates: Vec<(String, String)>,
}

impl PageMetadata {
    /// Landing page metadata; indexable, with alternates for every locale.
    pub fn home(env: &PageEnv<'_>) -> Self {
        let locale = env.i18n.locale();

        Self {
            title: env.i18n.t("meta.title"),
            description: env.i18n.t("meta.description"),
            keywords: Some(env.i18n.t("meta.keywords")),
            robots: INDEX,
            canonical: locale_url(env.base_url, locale),
            og_locale: locale.og_locale(),
            og_title: env.i18n.t("meta.og_title"),
            og_description: env.i18n.t("meta.og_description"),
            twitter_description: env.i18n.t("meta.twitter_description"),
            alternates: alternates(env.base_url),
        }
    }

    /// Paywall placeholders are kept out of the index and point back at the
    /// locale home.
    pub fn paywall(env: &PageEnv<'_>) -> Self {
        let locale = env.i18n.locale();
        let title = env.i18n.t("meta.paywall_title");
        let description = env.i18n.t("meta.paywall_description");

        Self {
            title: title.clone(),
            description: description.clone(),
            keywords: None,
            robots: NO_INDEX,
            canonical: locale_url(env.base_url, locale),
            og_locale: locale.og_locale(),
            og_title: title,
            og_description: description.clone(),
            twitter_description: description,
            alternates: Vec::new(),
        }
    }

    pub fn not_found(env: &PageEnv<'_>) -> Self {
        let locale = env.i18n.locale();
        let title = env.i18n.t("not_found.title");
        let description = env.i18n.t("not_found.description");

        Self {
            title: title.clone(),
            description: description.clone(),
            keywords: None,
            robots: NO_INDEX,
            canonical: locale_url(env.base_url, locale),
            og_locale: locale.og_locale(),
            og_title: title,
            og_description: description.clone(),
            twitter_description: description,
            alternates: Vec::new(),
        }
    }

    /// Render the tags, one per line.
    pub fn render(&self) -> String {
        let mut tags = vec![
            format!("<title>{}</title>", escape(&self.title)),
            meta_name("description", &self.description),
        ];
        if let Some(keywords) = &self.keywords {
            tags.push(meta_name("keywords", keywords));
        }
        tags.push(meta_name("robots", self.robots));
        tags.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            escape(&self.canonical)
        ));
        for (hreflang, url) in &self.alternates {
            tags.push(format!(
                r#"<link rel="alternate" hreflang="{}" href="{}">"#,
                escape(hreflang),
                escape(url)
            ));
        }

        tags.push(meta_property("og:type", "website"));
        tags.push(meta_property("og:site_name", SITE_NAME));
        tags.push(meta_property("og:locale", self.og_locale));
        tags.push(meta_property("og:url", &self.canonical));
        tags.push(meta_property("og:title", &self.og_title));
        tags.push(meta_property("og:description", &self.og_description));
        tags.push(meta_property("og:image", LOGO_URL));

        tags.push(meta_name("twitter:card", "summary_large_image"));
        tags.push(meta_name("twitter:site", TWITTER_HANDLE));
        tags.push(meta_name("twitter:creator", TWITTER_HANDLE));
        tags.push(meta_name("twitter:title", &self.og_title));
        tags.push(meta_name("twitter:description", &self.twitter_description));
        tags.push(meta_name("twitter:image", LOGO_URL));

        tags.join("\n")
    }
}

fn locale_url(base_url: &str, locale: Locale) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), locale.code())
}

fn alternates(base_url: &str) -> Vec<(String, String)> {
    let registry = LocaleRegistry::get();
    let mut links: Vec<(String, String)> = registry
        .list_locales()
        .into_iter()
        .map(|locale| (locale.code().to_string(), locale_url(base_url, locale)))
        .collect();
    links.push((
        "x-default".to_string(),
        locale_url(base_url, registry.default_locale()),
    ));
    links
}

fn meta_name(name: &str, content: &str) -> String {
    format!(r#"<meta name="{}" content="{}">"#, name, escape(content))
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{}" content="{}">"#,
        property,
        escape(content)
    )
}
