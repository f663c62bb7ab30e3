//! Alias derivation and custom alias checks.
//!
//! System-generated aliases are the first [`GENERATED_ALIAS_LEN`] hex
//! characters of `md5("{original_url}_{display_timestamp(now)}")`. The digest
//! is used for spreading, not for security.

use chrono::{DateTime, Utc};
use md5::{Digest, Md5};

use crate::error::AppError;
use crate::utils::time_format::display_timestamp;

/// Length of a system-generated alias.
pub const GENERATED_ALIAS_LEN: usize = 10;

/// Aliases shadowed by fixed routes and therefore never resolvable.
pub const RESERVED_ALIASES: &[&str] = &["health", "openapi.json", "create_url"];

/// Derives an alias from the destination URL and the creation instant.
///
/// Deterministic: identical `(original_url, now)` pairs yield identical aliases.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias("https://example.com", &now);
/// assert_eq!(alias.len(), 10);
/// assert!(alias.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn generate_alias(original_url: &str, now: &DateTime<Utc>) -> String {
    let source = format!("{}_{}", original_url, display_timestamp(now));
    let mut digest = hex::encode(Md5::digest(source.as_bytes()));
    digest.truncate(GENERATED_ALIAS_LEN);
    digest
}

/// Rejects custom aliases that collide with fixed routes.
///
/// Any other non-empty string is accepted verbatim.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] for reserved aliases.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(format!(
            "custom alias '{alias}' is reserved"
        )));
    }

    Ok(())
}
