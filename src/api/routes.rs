//! API route configuration.

use crate::api::handlers::{create_url_handler, docs_handler, openapi_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes requiring Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /create_url` - Store a URL under a custom or generated alias
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/create_url", post(create_url_handler))
}

/// Public routes.
///
/// # Endpoints
///
/// - `GET /`             - HTML API documentation
/// - `GET /openapi.json` - OpenAPI document
/// - `GET /{alias}`      - Redirect to the stored URL
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(docs_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/{alias}", get(redirect_handler))
}
