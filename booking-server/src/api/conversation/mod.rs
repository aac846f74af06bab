//! Conversation API module
//!
//! The HTTP utterance channel for the voice agent: the browser (or any
//! client) posts each recognized utterance and speaks the reply.

mod handler;

use axum::{
    Router,
    routing::{delete, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/conversation", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::start))
        .route("/{id}", delete(handler::end))
        .route("/{id}/utterance", post(handler::utterance))
        .route("/{id}/reset", post(handler::reset))
}
