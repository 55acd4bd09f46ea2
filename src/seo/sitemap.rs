//! sitemap.xml generation: every locale home plus every section under every
//! locale.

use crate::i18n::LocaleRegistry;
use chrono::NaiveDate;

/// Site sections listed under each locale.
pub const SECTIONS: &[&str] = &[
    "practice-tests",
    "practice-tests/dsat",
    "practice-tests/educators",
    "courses",
    "about",
    "about/who-we-are",
    "about/contact",
    "blog",
    "free-test",
    "how-it-works",
];

const HOME_PRIORITY: f32 = 1.0;
const SECTION_PRIORITY: f32 = 0.8;
const CHANGE_FREQUENCY: &str = "weekly";

/// One `<url>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: NaiveDate,
    pub change_frequency: &'static str,
    pub priority: f32,
}

/// Build the entries in output order: site root, locale homes, then each
/// section across all locales.
pub fn entries(base_url: &str, last_modified: NaiveDate) -> Vec<SitemapEntry> {
    let base_url = base_url.trim_end_matches('/');
    let locales = LocaleRegistry::get().list_locales();
    let entry = |url: String, priority: f32| SitemapEntry {
        url,
        last_modified,
        change_frequency: CHANGE_FREQUENCY,
        priority,
    };

    let mut entries = vec![entry(base_url.to_string(), HOME_PRIORITY)];

    entries.extend(
        locales
            .iter()
            .map(|locale| entry(format!("{}/{}", base_url, locale), HOME_PRIORITY)),
    );

    entries.extend(SECTIONS.iter().flat_map(|section| {
        locales
            .iter()
            .map(move |locale| format!("{}/{}/{}", base_url, locale, section))
            .map(|url| entry(url, SECTION_PRIORITY))
            .collect::<Vec<_>>()
    }));

    entries
}

/// Serialize entries as a sitemap protocol document.
pub fn render_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str(&format!(
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            crate::pages::html::escape(&entry.url),
            entry.last_modified.format("%Y-%m-%d"),
            entry.change_frequency,
            entry.priority,
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}
