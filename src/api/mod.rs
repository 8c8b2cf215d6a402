//! HTTP API module
//!
//! Routes, endpoint handlers and response structures for the web timer.

pub mod handlers;
pub mod responses;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::SessionManager;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(manager: SessionManager) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/timer/start", post(start_timer_handler))
        .route("/api/timer/stop", post(stop_timer_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(manager)
}
