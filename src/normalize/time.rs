//! Date and time-of-day parsing shared by the calendar and installment
//! normalizers.

use std::fmt::Display;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 instant.
///
/// Values without an offset are read as UTC, a bare date is its UTC midnight.
/// Anything else is `None`.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Clamped wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Builds a time clamping hour to `0..=23` and minute to `0..=59`.
    pub fn clamped(hour: i64, minute: i64) -> Self {
        Self {
            hour: hour.clamp(0, 23) as u32,
            minute: minute.clamp(0, 59) as u32,
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Parses `HH:MM`. Invalid input is clamped, never rejected: missing or
/// non-numeric components read as zero.
pub fn parse_time_of_day(raw: &str) -> TimeOfDay {
    let mut parts = raw.split(':');
    let component = |part: Option<&str>| {
        part.and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(0)
    };
    let hour = component(parts.next());
    let minute = component(parts.next());
    TimeOfDay::clamped(hour, minute)
}
