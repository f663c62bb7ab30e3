//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The token is checked by the configured
/// [`crate::application::services::Authorizer`]. When no static secret is
/// configured every request is rejected.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `{"detail": "Unauthorized"}` if:
/// - Authorization header is missing
/// - Token format is invalid
/// - Token is rejected
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/create_url", post(create_url_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::Unauthorized)?;

    st.auth_service.authenticate(&token)?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
