//! Application error type and its HTTP mapping.
//!
//! Every failure surfaced to a caller becomes a JSON body of the form
//! `{"detail": "<message>"}` with the status code listed below.
//!
//! | Variant               | Status |
//! |-----------------------|--------|
//! | `NotFound`            | 404    |
//! | `Unauthorized`        | 401    |
//! | `AliasAlreadyExists`  | 400    |
//! | `BadRequest`          | 400    |
//! | `Validation`          | 422    |
//! | `Internal`            | 500    |

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No record is stored under the requested alias.
    #[error("{alias} not found")]
    NotFound { alias: String },

    /// Missing, malformed, or rejected bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// A caller-supplied alias is already taken.
    #[error("custom alias '{alias}' is already used")]
    AliasAlreadyExists { alias: String },

    #[error("{message}")]
    BadRequest { message: String },

    /// Request parameters could not be parsed.
    #[error("{message}")]
    Validation { message: String },

    /// Store or other unexpected failure. The message is logged, never returned.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(alias: impl Into<String>) -> Self {
        Self::NotFound {
            alias: alias.into(),
        }
    }

    pub fn alias_already_exists(alias: impl Into<String>) -> Self {
        Self::AliasAlreadyExists {
            alias: alias.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::AliasAlreadyExists { .. } | AppError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the response body without consuming the error.
    pub fn to_error_body(&self) -> ErrorBody {
        let detail = match self {
            AppError::Internal { .. } => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        ErrorBody { detail }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let status = self.status_code();
        let mut response = (status, Json(self.to_error_body())).into_response();

        // RFC 6750
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_messages() {
        assert_eq!(
            AppError::not_found("abc").to_error_body().detail,
            "abc not found"
        );
        assert_eq!(AppError::Unauthorized.to_error_body().detail, "Unauthorized");
        assert_eq!(
            AppError::alias_already_exists("promo")
                .to_error_body()
                .detail,
            "custom alias 'promo' is already used"
        );
    }

    #[test]
    fn test_internal_detail_is_generic() {
        let err = AppError::internal("connection refused: 10.0.0.5");
        assert_eq!(err.to_error_body().detail, "Internal Server Error");
        assert_eq!(err.to_string(), "connection refused: 10.0.0.5");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::alias_already_exists("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::validation("x").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_sets_www_authenticate() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}
