//! API routes for the booking service

pub mod health;
pub mod newsletter;
pub mod reservations;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Create the combined router
///
/// CORS is wide open: the marketing site is served from a different origin
/// than the booking API.
pub fn create_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(reservations::router())
        .merge(newsletter::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
