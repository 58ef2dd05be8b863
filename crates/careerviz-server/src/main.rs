//! Binary entrypoint for the career-visualizer relay.
//!
//! Configuration comes from `CAREERVIZ_*` environment variables (see
//! [`careerviz_server::config`]); log verbosity from `RUST_LOG`.

use std::sync::Arc;

use careerviz_core::SystemClock;
use careerviz_server::config::ServerConfig;
use careerviz_server::router::build_router;
use careerviz_server::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let credentials = config.load_credentials()?;
    if credentials.is_empty() {
        tracing::warn!("credential table is empty; every login will be rejected");
    } else {
        tracing::info!(users = credentials.len(), "credential table loaded");
    }

    // Never fails: missing credentials degrade to per-request errors.
    let backends = careerviz_google::connect(&config.google).await;

    let state = AppState::new(credentials, backends, Arc::new(SystemClock))
        .with_body_limit(config.body_limit);
    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!("careerviz relay starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("careerviz relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
