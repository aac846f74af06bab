//! Unified error handling
//!
//! [`AppError`] is the application-level error taxonomy. Handlers return
//! [`AppResult`]; the `IntoResponse` impl maps each variant to its HTTP
//! status and the `{ "success": false, ... }` wire shape:
//!
//! ```json
//! {
//!   "success": false,
//!   "code": "FULLY_BOOKED",
//!   "message": "All tables are already booked...",
//!   "suggestions": ["19:30", "20:00"]
//! }
//! ```
//!
//! `code` and `suggestions` are only present on the variants that carry
//! them.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

/// Application error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed required field (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown booking or session id (404)
    #[error("{0} not found")]
    NotFound(String),

    /// Requested slot is at capacity (409, carries alternative slots)
    #[error("{message}")]
    FullyBooked {
        message: String,
        suggestions: Vec<String>,
    },

    /// External collaborator failure that could not be degraded (502)
    #[error("Collaborator error: {0}")]
    Collaborator(String),

    /// Storage failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Anything else (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, suggestions) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, None, msg, None),
            AppError::NotFound(what) => {
                (StatusCode::NOT_FOUND, None, format!("{} not found", what), None)
            }
            AppError::FullyBooked {
                message,
                suggestions,
            } => (
                StatusCode::CONFLICT,
                Some("FULLY_BOOKED"),
                message,
                Some(suggestions),
            ),
            AppError::Collaborator(msg) => {
                error!(target: "collaborator", error = %msg, "Collaborator failure");
                (
                    StatusCode::BAD_GATEWAY,
                    None,
                    "Upstream service unavailable".to_string(),
                    None,
                )
            }
            AppError::Database(msg) => {
                error!(target: "store", error = %msg, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "Internal Server Error".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    None,
                    "Internal Server Error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorBody {
            success: false,
            code,
            message,
            suggestions,
        });

        (status, body).into_response()
    }
}

impl From<crate::db::StoreError> for AppError {
    fn from(e: crate::db::StoreError) -> Self {
        AppError::Database(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}
