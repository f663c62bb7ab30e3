//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_alias;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    alias: String,
    original_url: String,
    created_dt: DateTime<Utc>,
    expire_dt: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(r.id, r.alias, r.original_url, r.created_dt, r.expire_dt)
    }
}

/// PostgreSQL repository for URL records.
///
/// Relies on the `urls_alias_key` unique constraint to reject duplicate
/// aliases, including those racing past the service's existence check.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, alias, original_url, created_dt, expire_dt
            FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn insert(&self, record: NewUrlRecord) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO urls (alias, original_url, created_dt, expire_dt)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&record.alias)
        .bind(&record.original_url)
        .bind(record.created_dt)
        .bind(record.expire_dt)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_alias(&e) {
                AppError::alias_already_exists(record.alias.clone())
            } else {
                AppError::from(e)
            }
        })
    }

    async fn health_check(&self) -> bool {
        match sqlx::query("SELECT 1").execute(self.pool.as_ref()).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Store health check failed: {}", e);
                false
            }
        }
    }
}
