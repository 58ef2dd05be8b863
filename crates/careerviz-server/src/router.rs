//! Router assembly for the relay API.
//!
//! [`build_router`] wires the three handlers to their routes with body-limit,
//! CORS and tracing middleware layers.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive: the front-end is hosted on a different origin.
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.body_limit;
    Router::new()
        .route("/login", post(handlers::login::login))
        .route("/record", post(handlers::record::record))
        .route("/transcribe", post(handlers::transcribe::transcribe))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
