mod config;
mod errors;
mod headlines;
mod identity;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::identity::RequestFieldVerifier;
use crate::llm_client::{CompletionProvider, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Marketing API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (optional — generation reports a configuration error without it)
    let provider: Option<Arc<dyn CompletionProvider>> = match &config.groq_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(api_key.clone(), config.groq_base_url.clone())?;
            info!(
                "LLM client initialized (model: {}, endpoint: {})",
                llm_client::MODEL,
                config.groq_base_url
            );
            Some(Arc::new(llm))
        }
        None => {
            warn!("GROQ_API_KEY is not set; headline generation will fail until it is configured");
            None
        }
    };

    let state = AppState {
        provider,
        identity: Arc::new(RequestFieldVerifier),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the marketing-site origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
