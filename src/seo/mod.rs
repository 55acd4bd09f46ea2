//! Search-engine artifacts: sitemap, robots rules, web manifest, JSON-LD
//! structured data and per-page head metadata.
//!
//! All of it is derived from the locale registry and fixed site constants;
//! nothing here depends on request input beyond the active locale.

pub mod manifest;
pub mod metadata;
pub mod robots;
pub mod schema;
pub mod sitemap;

pub use manifest::WebManifest;
pub use metadata::PageMetadata;
pub use robots::RobotsRules;
pub use sitemap::SitemapEntry;

pub const SITE_NAME: &str = "The SAT Crash Course";
pub const SHORT_NAME: &str = "SAT Crash Course";
pub const TWITTER_HANDLE: &str = "@satcrashcourse";
pub const THEME_COLOR: &str = "#0378A6";
pub const LOGO_URL: &str =
    "https://thesatcrashcourse.com/wp-content/uploads/2024/01/the-sat-crash-course-logo.png";
