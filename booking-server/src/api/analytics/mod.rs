//! Analytics API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/analytics", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/bookings-per-day", get(handler::bookings_per_day))
        .route("/cuisine-popularity", get(handler::cuisine_popularity))
}
