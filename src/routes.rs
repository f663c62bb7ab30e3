//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`              - HTML API documentation (public)
//! - `GET  /openapi.json`  - OpenAPI document (public)
//! - `GET  /health`        - Store health check (public)
//! - `GET  /{alias}`       - Redirect (public)
//! - `POST /create_url`    - Alias creation (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token on `/create_url`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware except path normalization.
pub fn build_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(protected)
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
