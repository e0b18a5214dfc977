mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod sequence;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiTransport, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Call Notes API v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; analysis and email generation will fail until it is configured");
    }

    // Initialize LLM client
    let transport = GeminiTransport::new().context("Failed to build HTTP client")?;
    let llm = LlmClient::new(Arc::new(transport), config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    info!("Email sequence variant: {}", config.sequence_variant);

    let state = AppState {
        llm,
        sequence_variant: config.sequence_variant,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
