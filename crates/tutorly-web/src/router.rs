//! Axum router — maps URL paths to handlers and the static frontend.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::{ServeDir, ServeFile},
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{ask::ask, search::google_search};

/// Build and return the full Axum router.
///
/// Anything that is neither an API route nor an existing static file gets
/// index.html, so client-side routes survive a page reload.
pub fn build_router(state: AppState) -> Router {
    let frontend = ServeDir::new(&state.static_dir)
        .fallback(ServeFile::new(state.index_file()));
    let shared: SharedState = Arc::new(state);

    Router::new()
        // API endpoints; other methods on these paths fall through to the frontend
        .route("/api/ask",    post(ask).fallback_service(frontend.clone()))
        .route("/api/google", get(google_search).fallback_service(frontend.clone()))

        // Static files + SPA fallback
        .fallback_service(frontend)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
