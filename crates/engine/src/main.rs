//! Deva Archives Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deva_engine::api;
use deva_engine::config::EngineConfig;
use deva_engine::infrastructure::{
    catalog::JsonCharacterSource,
    clock::SystemClock,
    ollama::OllamaClient,
    ports::ClockPort,
    resilient_llm::{ResilientLlmClient, RetryConfig},
    settings::SqliteSettingsRepo,
};
use deva_engine::stores::SessionStore;
use deva_engine::App;

/// How often idle sessions are swept.
const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// How often stale display settings are pruned.
const SETTINGS_PRUNE_INTERVAL: Duration = Duration::from_secs(60 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "deva_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Deva Archives Engine");

    let config = EngineConfig::from_env();

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);

    // Character catalog (read-only for the life of the process)
    let characters = Arc::new(JsonCharacterSource::load(config.characters_path.as_deref()).await?);

    // Create infrastructure clients
    let ollama_client = Arc::new(OllamaClient::new(&config.ollama_url, &config.ollama_model));
    let retry_config = RetryConfig::default();
    tracing::info!(
        url = %config.ollama_url,
        model = %config.ollama_model,
        max_retries = retry_config.max_retries,
        base_delay_ms = retry_config.base_delay_ms,
        "LLM client configured"
    );
    let llm = Arc::new(ResilientLlmClient::new(ollama_client, retry_config));

    let settings_repo = Arc::new(SqliteSettingsRepo::new(&config.settings_db, clock).await?);

    let sessions = Arc::new(SessionStore::new(config.session_idle));

    // Create application
    let app = Arc::new(App::new(characters, llm, settings_repo, sessions.clone()));

    // Spawn idle session sweeper
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(SESSION_SWEEP_INTERVAL).await;
            let removed = sessions.cleanup_expired().await;
            if removed > 0 {
                let active = sessions.len().await;
                tracing::debug!(removed, active, "Dropped idle sessions");
            }
        }
    });

    // Spawn stale settings pruner
    {
        let settings = app.use_cases.settings.clone();
        let retention = config.settings_retention;
        tokio::spawn(async move {
            loop {
                if let Err(e) = settings.prune_stale(retention).await {
                    tracing::warn!(error = %e, "Failed to prune stale display settings");
                }
                tokio::time::sleep(SETTINGS_PRUNE_INTERVAL).await;
            }
        });
    }

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

/// CORS from `CORS_ALLOWED_ORIGINS`: `*` or a comma-separated origin list.
/// Unset, blank or entirely invalid lists disable CORS.
fn build_cors_layer(allowed_origins: Option<&str>) -> Option<CorsLayer> {
    let allowed_origins = allowed_origins.map(str::trim).filter(|s| !s.is_empty())?;

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        // Browsers send X-Session-Id and JSON content types which trigger CORS preflights.
        .allow_headers([
            HeaderName::from_static(api::session::SESSION_HEADER),
            axum::http::header::CONTENT_TYPE,
        ]);

    if allowed_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}
