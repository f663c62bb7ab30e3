//! Bearer token authorization.

use std::sync::Arc;

use crate::error::AppError;

/// Decides whether a bearer token grants access to alias creation.
pub trait Authorizer: Send + Sync {
    fn authorize(&self, token: &str) -> bool;
}

/// Compares the token against a single deployment-wide secret.
///
/// With no secret configured, every token is rejected.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthorizer {
    secret: Option<String>,
}

impl StaticTokenAuthorizer {
    /// Empty secrets are treated as unset.
    pub fn new(secret: Option<String>) -> Self {
        Self {
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.secret.is_some()
    }
}

impl Authorizer for StaticTokenAuthorizer {
    fn authorize(&self, token: &str) -> bool {
        self.secret.as_deref() == Some(token)
    }
}

/// Service for authenticating API requests via Bearer tokens.
#[derive(Clone)]
pub struct AuthService {
    authorizer: Arc<dyn Authorizer>,
}

impl AuthService {
    pub fn new(authorizer: Arc<dyn Authorizer>) -> Self {
        Self { authorizer }
    }

    /// Authenticates a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the authorizer rejects the token.
    pub fn authenticate(&self, token: &str) -> Result<(), AppError> {
        if self.authorizer.authorize(token) {
            Ok(())
        } else {
            tracing::debug!("Rejected bearer token");
            Err(AppError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_exact_match() {
        let authorizer = StaticTokenAuthorizer::new(Some("s3cret".to_string()));

        assert!(authorizer.authorize("s3cret"));
        assert!(!authorizer.authorize("s3cret "));
        assert!(!authorizer.authorize("S3CRET"));
        assert!(!authorizer.authorize(""));
    }

    #[test]
    fn test_unconfigured_secret_rejects_everything() {
        let authorizer = StaticTokenAuthorizer::new(None);

        assert!(!authorizer.is_configured());
        assert!(!authorizer.authorize(""));
        assert!(!authorizer.authorize("anything"));
    }

    #[test]
    fn test_empty_secret_is_unconfigured() {
        let authorizer = StaticTokenAuthorizer::new(Some(String::new()));

        assert!(!authorizer.is_configured());
        assert!(!authorizer.authorize(""));
    }

    #[test]
    fn test_authenticate_success() {
        let service = AuthService::new(Arc::new(StaticTokenAuthorizer::new(Some(
            "token".to_string(),
        ))));

        assert!(service.authenticate("token").is_ok());
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let service = AuthService::new(Arc::new(StaticTokenAuthorizer::new(Some(
            "token".to_string(),
        ))));

        let result = service.authenticate("wrong");
        assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
    }

    #[test]
    fn test_authenticate_uses_custom_authorizer() {
        struct AllowAll;
        impl Authorizer for AllowAll {
            fn authorize(&self, _token: &str) -> bool {
                true
            }
        }

        let service = AuthService::new(Arc::new(AllowAll));
        assert!(service.authenticate("whatever").is_ok());
    }
}
