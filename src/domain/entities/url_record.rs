//! URL record entity: the mapping from an alias to its destination.

use chrono::{DateTime, Duration, Utc};

/// Lifetime assigned to every record at creation.
pub const RECORD_LIFETIME_DAYS: i64 = 365;

/// A stored alias → URL mapping.
///
/// Records are written once and never mutated. `expire_dt` is persisted for
/// reporting but is not enforced on redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub original_url: String,
    pub created_dt: DateTime<Utc>,
    pub expire_dt: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        alias: String,
        original_url: String,
        created_dt: DateTime<Utc>,
        expire_dt: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            alias,
            original_url,
            created_dt,
            expire_dt,
        }
    }
}

/// Input data for inserting a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub alias: String,
    pub original_url: String,
    pub created_dt: DateTime<Utc>,
    pub expire_dt: DateTime<Utc>,
}

impl NewUrlRecord {
    /// Builds a record created at `now`, expiring [`RECORD_LIFETIME_DAYS`] later.
    pub fn created_at(alias: String, original_url: String, now: DateTime<Utc>) -> Self {
        Self {
            alias,
            original_url,
            created_dt: now,
            expire_dt: now + Duration::days(RECORD_LIFETIME_DAYS),
        }
    }

    /// Attaches the store-assigned id.
    pub fn into_record(self, id: i64) -> UrlRecord {
        UrlRecord::new(
            id,
            self.alias,
            self.original_url,
            self.created_dt,
            self.expire_dt,
        )
    }
}
