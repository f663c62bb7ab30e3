//! Alias resolution and creation service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::alias_generator::{generate_alias, validate_custom_alias};

/// Insert attempts for a system-generated alias before giving up.
const MAX_GENERATE_ATTEMPTS: usize = 3;

/// Result of a successful [`UrlService::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedUrl {
    pub id: i64,
    pub alias: String,
    pub short_url: String,
    pub expire_dt: DateTime<Utc>,
}

/// Resolves aliases and mints new ones.
///
/// Holds the store handle, the time source and the public base URL; all three
/// are injected at construction.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    clock: Arc<dyn Clock>,
    base_url: String,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is prefixed verbatim to `"/" + alias`; an empty value yields
    /// bare relative paths.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        clock: Arc<dyn Clock>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            clock,
            base_url: base_url.into(),
        }
    }

    /// Looks up the record stored under `alias`.
    ///
    /// No side effects: visits are not counted and expiry is not checked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, alias: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found(alias))
    }

    /// Stores a new record for `original_url`.
    ///
    /// # Alias Selection
    ///
    /// - Non-empty `custom_alias`: used verbatim after an existence check. The
    ///   store's unique index still rejects a concurrent duplicate.
    /// - Otherwise: derived from `original_url` and the current instant. On a
    ///   store conflict the clock is re-read and a fresh alias derived, up to
    ///   [`MAX_GENERATE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AliasAlreadyExists`] if the custom alias is taken.
    /// Returns [`AppError::BadRequest`] if the custom alias is reserved.
    /// Returns [`AppError::Validation`] if an input contains a NUL character.
    /// Returns [`AppError::Internal`] on store errors or exhausted retries.
    pub async fn create(
        &self,
        original_url: String,
        custom_alias: Option<String>,
    ) -> Result<CreatedUrl, AppError> {
        reject_nul("original_url", &original_url)?;
        if let Some(alias) = &custom_alias {
            reject_nul("custom_alias", alias)?;
        }

        let now = self.clock.now();

        let (id, record) = match custom_alias.filter(|alias| !alias.is_empty()) {
            Some(alias) => self.insert_custom(original_url, alias, now).await?,
            None => self.insert_generated(original_url, now).await?,
        };

        info!("create_url: {}", id);

        Ok(CreatedUrl {
            id,
            short_url: self.short_url(&record.alias),
            alias: record.alias,
            expire_dt: record.expire_dt,
        })
    }

    /// Composes the public short URL for `alias`.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url, alias)
    }

    /// Reports whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    async fn insert_custom(
        &self,
        original_url: String,
        alias: String,
        now: DateTime<Utc>,
    ) -> Result<(i64, NewUrlRecord), AppError> {
        validate_custom_alias(&alias)?;

        if self.repository.find_by_alias(&alias).await?.is_some() {
            return Err(AppError::alias_already_exists(alias));
        }

        let record = NewUrlRecord::created_at(alias, original_url, now);
        let id = self.repository.insert(record.clone()).await?;

        Ok((id, record))
    }

    async fn insert_generated(
        &self,
        original_url: String,
        mut now: DateTime<Utc>,
    ) -> Result<(i64, NewUrlRecord), AppError> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let alias = generate_alias(&original_url, &now);
            let record = NewUrlRecord::created_at(alias, original_url.clone(), now);

            match self.repository.insert(record.clone()).await {
                Ok(id) => return Ok((id, record)),
                Err(AppError::AliasAlreadyExists { alias }) => {
                    warn!(
                        "Generated alias {} collided (attempt {}/{})",
                        alias, attempt, MAX_GENERATE_ATTEMPTS
                    );
                    now = self.clock.now();
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique alias: too many collisions",
        ))
    }
}

/// PostgreSQL `TEXT` cannot hold `\0`.
fn reject_nul(field: &str, value: &str) -> Result<(), AppError> {
    if value.contains('\0') {
        return Err(AppError::validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}
