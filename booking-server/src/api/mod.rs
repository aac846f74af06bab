//! API routes
//!
//! - [`bookings`] - booking CRUD, weather proxy, health
//! - [`analytics`] - aggregate counters
//! - [`conversation`] - the voice-agent utterance channel

pub mod analytics;
pub mod bookings;
pub mod conversation;

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(bookings::router())
        .merge(analytics::router())
        .merge(conversation::router())
        .route("/", get(index))
}

/// Build a fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the voice frontend runs on a different origin
        .layer(CorsLayer::permissive())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - service banner and endpoint index
async fn index() -> Json<Value> {
    Json(json!({
        "message": "Restaurant Booking Voice Agent API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/api/bookings/health",
            "weather": "/api/bookings/weather",
            "bookings": "/api/bookings",
            "conversation": "/api/conversation",
            "analyticsBookingsPerDay": "/api/analytics/bookings-per-day",
            "analyticsCuisine": "/api/analytics/cuisine-popularity"
        }
    }))
}
