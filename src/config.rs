use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Environment
    pub environment: String,

    // HTTP server
    pub port: u16,

    // Public origin used for canonical URLs, sitemap and robots
    pub base_url: String,

    // Translation bundles (<locales_dir>/<code>/common.json)
    pub locales_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
            Err(_) => 3000,
        };

        Ok(Self {
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            port,

            base_url: std::env::var("BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "https://thesatcrashcourse.com".to_string()),

            locales_dir: std::env::var("LOCALES_DIR").unwrap_or_else(|_| "locales".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
