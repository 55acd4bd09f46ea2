//! HTTP surface: localized pages, the locale switch and the SEO artifacts.
//!
//! Every page request gets its own [`ResolutionContext`] built from the
//! locale segment of the URL, so concurrent requests for different locales
//! never observe each other's strings.
//!
//! [`ResolutionContext`]: crate::i18n::ResolutionContext

use crate::config::Config;
use crate::i18n::{
    DirectorySource, I18nError, LocaleRegistry, MetricsReport, TranslationResolver,
};
use crate::pages::{self, Page, PageEnv};
use crate::routing::{locale_from_path, sanitize_return_path, switch_locale_path};
use crate::seo::{sitemap, RobotsRules, WebManifest};
use anyhow::{Context, Result};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<TranslationResolver>,
}

impl AppState {
    /// State backed by the bundles under `config.locales_dir`.
    pub fn from_config(config: Config) -> Self {
        let resolver = TranslationResolver::new(DirectorySource::new(&config.locales_dir));
        Self {
            config: Arc::new(config),
            resolver: Arc::new(resolver),
        }
    }
}

/// Errors surfaced to the browser.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The default bundle could not be loaded. `show_detail` is off in
    /// production so file paths stay out of public pages.
    #[error("{source}")]
    Translations {
        source: I18nError,
        show_detail: bool,
    },
}

impl AppError {
    fn translations(source: I18nError, config: &Config) -> Self {
        AppError::Translations {
            source,
            show_detail: !config.is_production(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Page render failed: {}", self);
        let detail = match &self {
            AppError::Translations {
                show_detail: true, ..
            } => Some(self.to_string()),
            AppError::Translations { .. } => None,
        };
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(pages::render_error(detail.as_deref())),
        )
            .into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub section: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SwitchLocaleQuery {
    pub to: Option<String>,
    pub from: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub environment: String,
    pub locales: usize,
    pub cached_bundles: usize,
    pub translations: MetricsReport,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/manifest.webmanifest", get(manifest))
        .route("/switch-locale", get(switch_locale))
        .fallback(render_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `0.0.0.0:<port>` and serve until the process is stopped.
pub async fn run(state: AppState) -> Result<()> {
    let port = state.config.port;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;

    info!("✓ Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .await
        .context("HTTP server stopped unexpectedly")
}

async fn render_page(
    State(state): State<AppState>,
    uri: Uri,
    query: Option<Query<PageQuery>>,
) -> Result<Response, AppError> {
    // A malformed query string (repeated or undecodable `section`) is
    // treated as no section at all.
    let section = query.and_then(|Query(query)| query.section);
    let (locale, rest) = locale_from_path(uri.path());
    let page = Page::from_path(&rest, section.as_deref());

    let ctx = state
        .resolver
        .activate_locale(locale)
        .map_err(|e| AppError::translations(e, &state.config))?;
    if ctx.is_fallback() {
        warn!("Serving {} with the default bundle", locale);
    }

    let current_path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let env = PageEnv::new(&ctx, &state.config.base_url, current_path);
    let html = pages::render(&env, page);

    let status = match page {
        Page::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    Ok((status, [(header::CONTENT_LANGUAGE, locale.code())], Html(html)).into_response())
}

/// Full navigation to the equivalent page under the requested locale.
async fn switch_locale(Query(query): Query<SwitchLocaleQuery>) -> Redirect {
    let from = sanitize_return_path(query.from.as_deref());
    let target = query.to.unwrap_or_default();

    match switch_locale_path(&from, &target) {
        Ok(path) => {
            info!("Switching locale to {}: {} -> {}", target, from, path);
            Redirect::to(&path)
        }
        Err(e) => {
            warn!("Locale switch rejected: {}", e);
            Redirect::to(&from)
        }
    }
}

async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let today = Utc::now().date_naive();
    let entries = sitemap::entries(&state.config.base_url, today);

    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        sitemap::render_xml(&entries),
    )
}

async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        RobotsRules::for_site(&state.config.base_url).render(),
    )
}

async fn manifest() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        Json(WebManifest::for_site()),
    )
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        environment: state.config.environment.clone(),
        locales: LocaleRegistry::get().list_configs().len(),
        cached_bundles: state.resolver.cache().len(),
        translations: state.resolver.metrics().report(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, MemorySource};
    use axum::body::to_bytes;

    const EN: &str = r#"{"hero": {"title": "Ace the Digital SAT"}, "not_found": {"title": "Page not found"}}"#;
    const KO: &str = r#"{"hero": {"title": "디지털 SAT 정복"}}"#;

    fn state(source: MemorySource) -> AppState {
        state_in("test", source)
    }

    fn state_in(environment: &str, source: MemorySource) -> AppState {
        AppState {
            config: Arc::new(Config {
                environment: environment.to_string(),
                port: 0,
                base_url: "https://example.com".to_string(),
                locales_dir: "unused".to_string(),
            }),
            resolver: Arc::new(TranslationResolver::new(source)),
        }
    }

    fn default_state() -> AppState {
        state(
            MemorySource::new()
                .with(Locale::ENGLISH, EN)
                .with(Locale::KOREAN, KO),
        )
    }

    /// Run the page handler with the query extracted the way axum would.
    async fn page(state: AppState, uri: &str) -> Response {
        let uri: Uri = uri.parse().unwrap();
        let query = Query::<PageQuery>::try_from_uri(&uri).ok();
        match render_page(State(state), uri, query).await {
            Ok(response) => response,
            Err(e) => e.into_response(),
        }
    }

    async fn body(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    // ==================== Page Tests ====================

    #[tokio::test]
    async fn test_localized_home() {
        let response = page(default_state(), "/ko").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_LANGUAGE], "ko");
        let html = body(response).await;
        assert!(html.contains(r#"<html lang="ko">"#));
        assert!(html.contains("디지털 SAT 정복"));
    }

    #[tokio::test]
    async fn test_root_renders_default_locale() {
        let response = page(default_state(), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body(response).await.contains("Ace the Digital SAT"));
    }

    #[tokio::test]
    async fn test_locale_without_bundle_uses_default_strings() {
        let response = page(default_state(), "/vi").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body(response).await;
        assert!(html.contains(r#"<html lang="vi">"#));
        assert!(html.contains("Ace the Digital SAT"));
    }

    #[tokio::test]
    async fn test_unknown_path_is_localized_404() {
        let response = page(default_state(), "/en/nowhere").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_missing_default_bundle_renders_error_page() {
        let response = page(state(MemorySource::new()), "/en").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body(response).await;
        assert!(html.contains("Temporarily unavailable"));
    }

    #[tokio::test]
    async fn test_error_page_hides_detail_in_production() {
        let response = page(state_in("production", MemorySource::new()), "/en").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body(response).await;
        assert!(html.contains("Temporarily unavailable"));
        assert!(!html.contains("no bundle source registered"));
    }

    #[tokio::test]
    async fn test_error_page_shows_detail_outside_production() {
        let html = body(page(state(MemorySource::new()), "/en").await).await;
        assert!(html.contains("no bundle source registered"));
    }

    #[tokio::test]
    async fn test_paywall_section_from_query() {
        let html = body(page(default_state(), "/en/paywall?section=blog").await).await;
        assert!(html.contains(r#"data-section="blog""#));
    }

    #[tokio::test]
    async fn test_repeated_section_parameter_uses_default_section() {
        let response = page(default_state(), "/en/paywall?section=a&section=b").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body(response).await;
        assert!(html.contains(r#"data-section="feature""#));
    }

    #[tokio::test]
    async fn test_repeated_parameter_on_home_still_renders() {
        let response = page(default_state(), "/ko?section=a&section=b").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body(response).await.contains("디지털 SAT 정복"));
    }

    // ==================== Switch Locale Tests ====================

    async fn switch(to: Option<&str>, from: Option<&str>) -> Response {
        let query = SwitchLocaleQuery {
            to: to.map(str::to_string),
            from: from.map(str::to_string),
        };
        switch_locale(Query(query)).await.into_response()
    }

    #[tokio::test]
    async fn test_switch_locale_redirects_to_equivalent_path() {
        let response = switch(Some("es"), Some("/en/courses")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/es/courses");
    }

    #[tokio::test]
    async fn test_switch_locale_unsupported_target_returns_to_origin() {
        let response = switch(Some("fr"), Some("/en/courses")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/en/courses");
    }

    #[tokio::test]
    async fn test_switch_locale_rejects_external_origin() {
        let response = switch(Some("zh"), Some("https://evil.example/en")).await;

        assert_eq!(response.headers()[header::LOCATION], "/zh");
    }

    #[tokio::test]
    async fn test_switch_locale_control_character_in_origin() {
        let response = switch(Some("es"), Some("/en/a\nb")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/es");
    }

    #[tokio::test]
    async fn test_switch_locale_control_character_with_unsupported_target() {
        let response = switch(Some("fr"), Some("/en/a\r\nb")).await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    // ==================== Health Tests ====================

    #[tokio::test]
    async fn test_health_reports_translation_metrics() {
        let state = default_state();
        let _ = page(state.clone(), "/ko").await;
        let _ = page(state.clone(), "/ko").await;

        let Json(health) = health(State(state)).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.locales, 6);
        assert_eq!(health.cached_bundles, 1);
        assert_eq!(health.translations.bundle_loads, 1);
        assert_eq!(health.translations.cache_hits, 1);
    }
}
