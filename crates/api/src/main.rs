use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use sapgate_core::Settings;
use sapgate_observability::LogConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` is optional; its absence is not worth a warning.
    let dotenv = dotenvy::dotenv().err().filter(|e| !e.not_found());

    let settings = Arc::new(Settings::from_env());
    let _log_guard = sapgate_observability::init(&LogConfig {
        debug: settings.debug,
        log_dir: Some(PathBuf::from(&settings.log_dir)),
    });

    if let Some(e) = dotenv {
        tracing::warn!("failed to load .env: {e}");
    }
    if settings.api_key.is_empty() {
        tracing::warn!("API_KEY not set; every protected request will be rejected");
    }
    tracing::debug!(?settings, "settings loaded");

    let app = sapgate_api::build_app(settings.clone());

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(env = %settings.app_env, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
