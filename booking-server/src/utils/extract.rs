//! Request extractors
//!
//! [`AppJson`] deserializes a JSON body like `axum::Json` but maps the
//! rejection onto [`AppError::Validation`], so a malformed body (bad
//! enum value, wrong type, broken JSON) gets the same
//! `{ "success": false, "message": ... }` 400 shape as every other
//! validation error instead of axum's plain-text reply.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::AppError;

pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}
