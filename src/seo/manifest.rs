//! Web app manifest served at `/manifest.webmanifest`.

use crate::i18n::Locale;
use crate::seo::{SHORT_NAME, SITE_NAME, THEME_COLOR};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ManifestImage {
    pub src: &'static str,
    pub sizes: &'static str,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
    pub icons: Vec<ManifestImage>,
    pub screenshots: Vec<ManifestImage>,
    pub categories: Vec<&'static str>,
    pub lang: &'static str,
    pub dir: &'static str,
    pub orientation: &'static str,
    pub prefer_related_applications: bool,
}

impl WebManifest {
    pub fn for_site() -> Self {
        Self {
            name: SITE_NAME,
            short_name: SHORT_NAME,
            description: "Top quality Digital SAT practice tests and prep courses",
            start_url: "/",
            display: "standalone",
            background_color: THEME_COLOR,
            theme_color: THEME_COLOR,
            icons: vec![
                ManifestImage {
                    src: "/icon-192x192.png",
                    sizes: "192x192",
                    mime_type: "image/png",
                },
                ManifestImage {
                    src: "/icon-512x512.png",
                    sizes: "512x512",
                    mime_type: "image/png",
                },
            ],
            screenshots: vec![
                ManifestImage {
                    src: "/screenshots/desktop-home.png",
                    sizes: "1280x720",
                    mime_type: "image/png",
                },
                ManifestImage {
                    src: "/screenshots/mobile-home.png",
                    sizes: "750x1334",
                    mime_type: "image/png",
                },
            ],
            categories: vec!["education", "test prep", "productivity"],
            lang: Locale::default_locale().code(),
            dir: "ltr",
            orientation: "any",
            prefer_related_applications: false,
        }
    }
}
