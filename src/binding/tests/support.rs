//! Deterministic collaborators shared by the binding tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// A clock stopped at 2025-03-01T08:00:00Z.
    pub fn stopped() -> Self {
        Self(
            Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
