use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use engine_client::{locate_engine, StockfishEngine};
use tracing_subscriber::EnvFilter;

use server::advisor::MoveAdvisor;
use server::config::Config;
use server::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::parse();
    config.log_summary();
    let engine_config = config.engine_config();

    // Start the engine before accepting requests
    let engine_path = locate_engine(config.engine_path.as_deref());
    tracing::info!("Starting engine at {}", engine_path.display());
    let engine = StockfishEngine::spawn(&engine_path, &engine_config)
        .await
        .with_context(|| format!("Failed to start engine at {}", engine_path.display()))?;

    let advisor = Arc::new(MoveAdvisor::new(Arc::new(engine), engine_config));
    let app = routes::router(advisor);

    let addr = config.bind_addr();
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
