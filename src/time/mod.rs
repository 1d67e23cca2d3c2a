// src/time/mod.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use tracing::warn;

/// The textual timestamp shapes that appear across a Garmin export. Shapes are
/// tried in this order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Fractional seconds plus an explicit zone, e.g. `2020-02-15T13:19:26.265Z`,
    /// `...+02:00` or `...-0700`.
    FractionOffset,
    /// Fractional seconds, no zone, e.g. `2021-03-10T22:15:05.0`. UTC assumed.
    FractionNaive,
    /// Plain `YYYY-MM-DDTHH:MM:SS`. UTC assumed.
    DateTime,
    /// Bare `YYYY-MM-DD`. Midnight UTC assumed.
    DateOnly,
}

/// An offset sign can only appear after the date portion; a `-` in the first
/// ten bytes is a date separator and must not count as a zone indicator.
fn has_zone_indicator(s: &str) -> bool {
    s.contains('Z') || s.bytes().skip(10).any(|b| b == b'+' || b == b'-')
}

fn classify(s: &str) -> Option<Shape> {
    if s.contains('.') {
        if has_zone_indicator(s) {
            Some(Shape::FractionOffset)
        } else {
            Some(Shape::FractionNaive)
        }
    } else if s.contains('T') && s.len() == 19 {
        Some(Shape::DateTime)
    } else if s.len() == 10 && s.contains('-') {
        Some(Shape::DateOnly)
    } else {
        None
    }
}

/// Rewrite a trailing `Z` to `+00:00` and insert the missing colon into
/// 4-digit offsets (`-0700` → `-07:00`) so the result is RFC 3339.
fn to_rfc3339_offset(s: &str) -> String {
    let s = if let Some(stripped) = s.strip_suffix('Z') {
        format!("{stripped}+00:00")
    } else {
        s.to_string()
    };
    let b = s.as_bytes();
    let n = b.len();
    if n > 6
        && (b[n - 5] == b'+' || b[n - 5] == b'-')
        && b[n - 4..].iter().all(|c| c.is_ascii_digit())
    {
        format!("{}:{}", &s[..n - 2], &s[n - 2..])
    } else {
        s
    }
}

/// Drop sub-second precision so equivalent encodings compare equal.
fn truncate_subsec(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Parse any of the timestamp shapes Garmin emits into a single UTC instant.
///
/// Empty input is `None`. Unrecognized or malformed text logs a warning and
/// returns `None`; callers treat that as "skip this record". Never panics.
pub fn normalize(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    let Some(shape) = classify(s) else {
        warn!(timestamp = s, "unrecognized timestamp format");
        return None;
    };

    let parsed = match shape {
        Shape::FractionOffset => DateTime::parse_from_rfc3339(&to_rfc3339_offset(s))
            .map(|dt| dt.with_timezone(&Utc)),
        Shape::FractionNaive => {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.and_utc())
        }
        Shape::DateTime => {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.and_utc())
        }
        Shape::DateOnly => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
    };

    match parsed {
        Ok(dt) => Some(truncate_subsec(dt)),
        Err(e) => {
            warn!(timestamp = s, error = %e, "could not parse timestamp");
            None
        }
    }
}

/// Render an instant as `YYYY-MM-DDTHH:MM:SS` for CSV datetime columns.
pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Render an instant as `YYYY-MM-DD` for CSV date columns.
pub fn format_date(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Inclusive UTC window used to admit or reject records. Fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Inclusive on both ends. `None` is always out of range.
    pub fn contains(&self, instant: Option<DateTime<Utc>>) -> bool {
        match instant {
            Some(dt) => self.start <= dt && dt <= self.end,
            None => false,
        }
    }
}
