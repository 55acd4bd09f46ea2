use anyhow::Result;
use sat_crash_course::{config::Config, server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sat_crash_course=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting SAT Crash Course site");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Environment: {}, locales from {}",
        config.environment, config.locales_dir
    );

    let state = server::AppState::from_config(config);

    // Parse every bundle before taking traffic. A broken default bundle is
    // logged and retried per request, which renders the error page until
    // the file is fixed.
    match state.resolver.warm() {
        Ok(()) => info!("✓ Translation bundles loaded"),
        Err(e) => error!("Translation bundles failed to load: {}", e),
    }

    server::run(state).await
}
