//! In-process implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// URL records held in a map keyed by alias.
///
/// Enforces alias uniqueness atomically under the write lock, matching the
/// unique index of [`super::PgUrlRepository`]. Contents are lost on drop.
#[derive(Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    records: HashMap<String, UrlRecord>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self.inner.read().await.records.get(alias).cloned())
    }

    async fn insert(&self, record: NewUrlRecord) -> Result<i64, AppError> {
        let mut inner = self.inner.write().await;

        if inner.records.contains_key(&record.alias) {
            return Err(AppError::alias_already_exists(record.alias));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        inner
            .records
            .insert(record.alias.clone(), record.into_record(id));

        Ok(id)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
