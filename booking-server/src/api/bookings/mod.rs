//! Bookings API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/health", get(handler::health))
        .route("/weather", get(handler::weather))
        .route("/", post(handler::create).get(handler::list))
        .route("/{id}", get(handler::get_by_id).delete(handler::cancel))
}
