//! Injectable time source.
//!
//! Alias derivation depends on the creation instant, so the service reads time
//! through [`Clock`] instead of calling `Utc::now()` directly.

use chrono::{DateTime, SubsecRound, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock in UTC, truncated to microseconds.
///
/// Microsecond precision matches what PostgreSQL `TIMESTAMPTZ` stores, so the
/// instant used for alias derivation is the same one persisted in the record.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
