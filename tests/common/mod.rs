#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use redirector::AppError;
use redirector::application::services::{AuthService, StaticTokenAuthorizer, UrlService};
use redirector::domain::clock::FixedClock;
use redirector::domain::entities::{NewUrlRecord, UrlRecord};
use redirector::domain::repositories::UrlRepository;
use redirector::infrastructure::persistence::MemoryUrlRepository;
use redirector::state::AppState;

pub const TEST_TOKEN: &str = "test-static-token";
pub const TEST_BASE_URL: &str = "https://s.example.com";

/// 2024-01-02 03:04:05.123456 UTC
pub fn fixed_instant() -> DateTime<Utc> {
    let naive = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_micro_opt(3, 4, 5, 123_456)
        .unwrap();
    Utc.from_utc_datetime(&naive)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn create_state_with(
    repository: Arc<dyn UrlRepository>,
    static_token: Option<&str>,
    base_url: &str,
) -> AppState {
    let url_service = Arc::new(UrlService::new(
        repository,
        Arc::new(FixedClock(fixed_instant())),
        base_url,
    ));
    let auth_service = Arc::new(AuthService::new(Arc::new(StaticTokenAuthorizer::new(
        static_token.map(str::to_string),
    ))));

    AppState::new(url_service, auth_service)
}

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let state = create_state_with(repository.clone(), Some(TEST_TOKEN), TEST_BASE_URL);
    (state, repository)
}

pub async fn create_test_record(repository: &MemoryUrlRepository, alias: &str, url: &str) -> i64 {
    repository
        .insert(NewUrlRecord::created_at(
            alias.to_string(),
            url.to_string(),
            fixed_instant(),
        ))
        .await
        .unwrap()
}

/// Store whose every operation fails, as when the database is unreachable.
pub struct UnavailableRepository;

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn find_by_alias(&self, _alias: &str) -> Result<Option<UrlRecord>, AppError> {
        Err(AppError::internal("Database error: connection refused"))
    }

    async fn insert(&self, _record: NewUrlRecord) -> Result<i64, AppError> {
        Err(AppError::internal("Database error: connection refused"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
