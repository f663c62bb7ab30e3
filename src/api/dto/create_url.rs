//! DTOs for the alias creation endpoint.

use serde::{Deserialize, Serialize};

use crate::application::services::CreatedUrl;
use crate::utils::time_format::iso_timestamp;

/// Query string of `POST /create_url`.
#[derive(Debug, Deserialize)]
pub struct CreateUrlParams {
    /// Destination URL, stored as given.
    pub original_url: String,

    /// Caller-chosen alias. Empty is treated as absent.
    pub custom_alias: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUrlResponse {
    pub alias: String,
    pub short_url: String,
    /// ISO-8601, UTC, no offset.
    pub expire_dt: String,
}

impl From<CreatedUrl> for CreateUrlResponse {
    fn from(created: CreatedUrl) -> Self {
        Self {
            expire_dt: iso_timestamp(&created.expire_dt),
            alias: created.alias,
            short_url: created.short_url,
        }
    }
}
