//! Repository trait for alias → URL records.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Store contract required by [`crate::application::services::UrlService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Point lookup by alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a record and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasAlreadyExists`] if the alias is already stored.
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert(&self, record: NewUrlRecord) -> Result<i64, AppError>;

    /// Returns `true` when the store answers.
    async fn health_check(&self) -> bool;
}
