//! Conversation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use shared::models::Booking;
use uuid::Uuid;

use crate::core::ServerState;
use crate::dialogue::UtteranceSource;
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub success: bool,
    pub session_id: Uuid,
    pub prompt: String,
}

/// POST /api/conversation - open a session
pub async fn start(State(state): State<ServerState>) -> Json<StartResponse> {
    let (session_id, prompt) = state.conversations.start();
    Json(StartResponse {
        success: true,
        session_id,
        prompt,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtterancePayload {
    pub text: String,
    /// "audio" or "text"; defaults to typed text
    #[serde(default)]
    pub source: Option<String>,
}

impl UtterancePayload {
    fn source(&self) -> UtteranceSource {
        match self.source.as_deref() {
            Some("audio") => UtteranceSource::Audio,
            _ => UtteranceSource::Text,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtteranceResponse {
    pub success: bool,
    pub session_id: Uuid,
    pub reply: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<Booking>,
}

/// POST /api/conversation/:id/utterance - one dialogue turn
pub async fn utterance(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<UtterancePayload>,
) -> AppResult<Json<UtteranceResponse>> {
    let source = payload.source();
    let reply = state
        .conversations
        .handle_utterance(id, &payload.text, source)
        .await?;
    Ok(Json(UtteranceResponse {
        success: true,
        session_id: reply.session_id,
        reply: reply.reply,
        completed: reply.completed,
        booking: reply.booking,
    }))
}

#[derive(Debug, Serialize)]
pub struct EndResponse {
    pub success: bool,
}

/// DELETE /api/conversation/:id - drop the conversation without booking
pub async fn end(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EndResponse>> {
    state.conversations.end(id)?;
    Ok(Json(EndResponse { success: true }))
}

/// POST /api/conversation/:id/reset - restart from the first step
pub async fn reset(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StartResponse>> {
    let prompt = state.conversations.reset(id).await?;
    Ok(Json(StartResponse {
        success: true,
        session_id: id,
        prompt,
    }))
}
