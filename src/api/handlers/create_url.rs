//! Handler for alias creation endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::create_url::{CreateUrlParams, CreateUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a custom or system-generated alias.
///
/// # Endpoint
///
/// `POST /create_url?original_url=<url>&custom_alias=<alias>`
///
/// Requires `Authorization: Bearer <token>`, enforced by
/// [`crate::api::middleware::auth`].
///
/// # Response
///
/// ```json
/// {
///   "alias": "c9a343debf",
///   "short_url": "https://s.example.com/c9a343debf",
///   "expire_dt": "2025-01-02T03:04:05.123456"
/// }
/// ```
///
/// # Errors
///
/// - 400 if `custom_alias` is already used or reserved
/// - 401 if the bearer token is missing or rejected
/// - 422 if `original_url` is missing or an input contains a NUL character
pub async fn create_url_handler(
    State(state): State<AppState>,
    params: Result<Query<CreateUrlParams>, QueryRejection>,
) -> Result<Json<CreateUrlResponse>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::validation(rejection.body_text()))?;

    let created = state
        .url_service
        .create(params.original_url, params.custom_alias)
        .await?;

    Ok(Json(created.into()))
}
