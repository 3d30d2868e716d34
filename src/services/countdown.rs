use chrono::{DateTime, TimeZone};
use serde::Serialize;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Time remaining until the festival opens.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Remaining time from `now` to `target`, floored to whole units.
    /// Clamped to zero once the target has passed.
    pub fn until<Tz1, Tz2>(target: &DateTime<Tz1>, now: &DateTime<Tz2>) -> Self
    where
        Tz1: TimeZone,
        Tz2: TimeZone,
    {
        let remaining = target.timestamp_millis() - now.timestamp_millis();
        if remaining <= 0 {
            return Self::default();
        }

        Self {
            days: remaining / DAY_MS,
            hours: (remaining % DAY_MS) / HOUR_MS,
            minutes: (remaining % HOUR_MS) / MINUTE_MS,
            seconds: (remaining % MINUTE_MS) / SECOND_MS,
        }
    }

    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }

    /// `(label, zero-padded value)` pairs in display order.
    pub fn units(&self) -> [(&'static str, String); 4] {
        [
            ("days", format!("{:02}", self.days)),
            ("hours", format!("{:02}", self.hours)),
            ("minutes", format!("{:02}", self.minutes)),
            ("seconds", format!("{:02}", self.seconds)),
        ]
    }
}
