//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Returns `307 Temporary Redirect` with the stored URL in `Location`.
/// Lookups have no side effects.
///
/// # Errors
///
/// Returns 404 Not Found with `{"detail": "<alias> not found"}` if the alias
/// is unknown.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.resolve(&alias).await?;

    debug!("Redirecting {} -> {}", alias, record.original_url);

    let location = location_header(&record.original_url)?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

/// Characters left unescaped in a `Location` value besides ASCII alphanumerics.
const LOCATION_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b':')
    .remove(b'/')
    .remove(b'%')
    .remove(b'#')
    .remove(b'?')
    .remove(b'=')
    .remove(b'@')
    .remove(b'[')
    .remove(b']')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';');

/// Builds a `Location` value from a stored URL.
///
/// Stored URLs are not validated at creation, so they may contain spaces,
/// non-ASCII characters or URL-unsafe punctuation. Existing `%` escapes pass
/// through unchanged.
fn location_header(url: &str) -> Result<HeaderValue, AppError> {
    let encoded = utf8_percent_encode(url, LOCATION_ENCODE_SET).to_string();

    HeaderValue::from_str(&encoded)
        .map_err(|e| AppError::internal(format!("Invalid redirect target: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_header_passthrough() {
        let value = location_header("https://example.com/a?b=c#d").unwrap();
        assert_eq!(value, "https://example.com/a?b=c#d");
    }

    #[test]
    fn test_location_header_encodes_space_and_unicode() {
        let value = location_header("https://example.com/a b/é").unwrap();
        assert_eq!(value, "https://example.com/a%20b/%C3%A9");
    }

    #[test]
    fn test_location_header_encodes_unsafe_punctuation() {
        let value = location_header("https://a.com/{x}|\"<y>").unwrap();
        assert_eq!(value, "https://a.com/%7Bx%7D%7C%22%3Cy%3E");

        let value = location_header("https://a.com/a\\b^c`d").unwrap();
        assert_eq!(value, "https://a.com/a%5Cb%5Ec%60d");
    }

    #[test]
    fn test_location_header_keeps_reserved_and_escapes() {
        let value =
            location_header("https://u:p@a.com/[x]/!$&'()*+,;=?q=%20#frag~_.-").unwrap();
        assert_eq!(value, "https://u:p@a.com/[x]/!$&'()*+,;=?q=%20#frag~_.-");
    }

    #[test]
    fn test_location_header_encodes_control_characters() {
        let value = location_header("https://example.com/\r\nSet-Cookie: x").unwrap();
        assert_eq!(value, "https://example.com/%0D%0ASet-Cookie:%20x");
    }
}
