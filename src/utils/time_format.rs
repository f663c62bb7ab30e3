//! Timestamp rendering used for alias derivation and API responses.
//!
//! Both formats print seconds, then `.ffffff` only when the microsecond
//! component is non-zero. All instants are UTC and printed without an offset.

use chrono::{DateTime, Timelike, Utc};

/// Renders `YYYY-MM-DD HH:MM:SS[.ffffff]`.
///
/// This string is hashed into system-generated aliases, so its exact shape is
/// part of the alias contract.
pub fn display_timestamp(dt: &DateTime<Utc>) -> String {
    render(dt, ' ')
}

/// Renders ISO-8601 `YYYY-MM-DDTHH:MM:SS[.ffffff]`.
pub fn iso_timestamp(dt: &DateTime<Utc>) -> String {
    render(dt, 'T')
}

fn render(dt: &DateTime<Utc>, separator: char) -> String {
    let naive = dt.naive_utc();
    let base = format!(
        "{}{}{}",
        naive.format("%Y-%m-%d"),
        separator,
        naive.format("%H:%M:%S")
    );

    // Leap-second nanoseconds run past 1e9; clamp to the last microsecond.
    let micros = (naive.nanosecond() / 1_000).min(999_999);
    if micros == 0 {
        base
    } else {
        format!("{base}.{micros:06}")
    }
}
