//! Tutorly relay server
//!
//! Run with: cargo run -p tutorly-web

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutorly_common::Config;
use tutorly_web::{router::build_router, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tutorly=debug,tower_http=debug,info")),
        )
        .init();

    info!("Starting Tutorly relay, version {}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    let state = AppState::from_config(&config);
    if !state.index_file().exists() {
        warn!(
            "{} not found; the frontend fallback will return 404",
            state.index_file().display()
        );
    }

    let app = build_router(state);

    let listener =
        tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
