//! Bookings API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::WeatherInfo;
use shared::request::BookingPayload;
use shared::response::{BookingListResponse, BookingResponse};

use crate::core::ServerState;
use crate::utils::{AppJson, AppResult};

/// POST /api/bookings - create a booking
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<BookingPayload>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    let booking = state.bookings.create(payload).await?;
    Ok((StatusCode::CREATED, Json(BookingResponse::ok(booking))))
}

/// GET /api/bookings - all bookings, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<BookingListResponse>> {
    let bookings = state.bookings.list_all().await?;
    Ok(Json(BookingListResponse::ok(bookings)))
}

/// GET /api/bookings/:id - look up one booking by its code
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookingResponse>> {
    let booking = state.bookings.get_by_id(&id).await?;
    Ok(Json(BookingResponse::ok(booking)))
}

/// DELETE /api/bookings/:id - soft-cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<BookingResponse>> {
    let booking = state.bookings.cancel(&id).await?;
    Ok(Json(BookingResponse::ok(booking)))
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

/// GET /api/bookings/weather - proxy to the weather collaborator
pub async fn weather(
    State(state): State<ServerState>,
    Query(query): Query<WeatherQuery>,
) -> Json<WeatherInfo> {
    let info = state
        .weather
        .forecast(query.date, query.location.as_deref())
        .await;
    Json(info)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// GET /api/bookings/health - liveness probe
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "API is healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
