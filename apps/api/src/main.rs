mod config;
mod errors;
mod export;
mod letters;
mod llm_client;
mod routes;
mod salary;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::letters::session::SessionRegistry;
use crate::llm_client::{GeminiClient, TextGenerator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HR Desk API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize text generator (Gemini by default)
    let generator: Arc<dyn TextGenerator> =
        Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("Text generator initialized (model: {})", llm_client::MODEL);

    info!("Issuing company: {}", config.company.name);

    // Build app state
    let state = AppState {
        generator,
        company: config.company.clone(),
        letter_sessions: Arc::new(SessionRegistry::default()),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
