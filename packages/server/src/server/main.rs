// Main entry point for the responder server

use std::sync::Arc;

use anyhow::{Context, Result};
use responder_core::{kernel::OpenAiGenerator, kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,responder_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting emergency responder");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(model = %config.llm_model, "Configuration loaded");

    if config.llm_api_key.is_none() {
        tracing::warn!("LLM_API_KEY not set; generation requests are sent unauthenticated");
    }

    // Load datasets and fit the similarity index
    let generator = Arc::new(OpenAiGenerator::from_config(&config));
    let deps = ServerDeps::load(&config, generator).context("Failed to load datasets")?;

    let app = build_app(deps);

    // Start server
    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Chat page: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
