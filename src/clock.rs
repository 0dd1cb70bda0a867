//! Clock pinned to a single instant.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// A [`Clock`] that always reports the same instant.
///
/// Used to evaluate overdue status consistently across one command and to
/// make time-dependent tests deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    #[must_use]
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.now
    }
}
