//! Analytics API Handlers
//!
//! Aggregates over active (non-cancelled) bookings only.

use axum::{Json, extract::State};
use shared::response::{BookingsPerDay, CuisinePopularity, DataResponse};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/analytics/bookings-per-day - active bookings per date, ascending
pub async fn bookings_per_day(
    State(state): State<ServerState>,
) -> AppResult<Json<DataResponse<Vec<BookingsPerDay>>>> {
    let rows = state.bookings.bookings_per_day().await?;
    Ok(Json(DataResponse::ok(rows)))
}

/// GET /api/analytics/cuisine-popularity - active bookings per cuisine, descending
pub async fn cuisine_popularity(
    State(state): State<ServerState>,
) -> AppResult<Json<DataResponse<Vec<CuisinePopularity>>>> {
    let rows = state.bookings.cuisine_popularity().await?;
    Ok(Json(DataResponse::ok(rows)))
}
