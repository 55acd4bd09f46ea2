//! robots.txt rules.

/// Paths crawlers should skip. Paywall placeholders carry no content.
const DISALLOW: &[&str] = &["/api/", "/_next/", "/admin/", "/*/paywall"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RobotsRules {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub sitemap: String,
    pub host: String,
}

impl RobotsRules {
    pub fn for_site(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');

        Self {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: DISALLOW.iter().map(|path| path.to_string()).collect(),
            sitemap: format!("{}/sitemap.xml", base_url),
            host: base_url.to_string(),
        }
    }

    pub fn render(&self) -> String {
        let mut lines = vec![format!("User-Agent: {}", self.user_agent)];
        lines.extend(self.allow.iter().map(|path| format!("Allow: {}", path)));
        lines.extend(self.disallow.iter().map(|path| format!("Disallow: {}", path)));
        lines.push(String::new());
        lines.push(format!("Host: {}", self.host));
        lines.push(format!("Sitemap: {}", self.sitemap));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
