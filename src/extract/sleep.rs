use serde::Serialize;
use serde_json::Value;

use super::TableRow;
use crate::json;
use crate::time::{self, DateWindow};

/// One row of `sleep_data.csv`. Durations are whole minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepRow {
    pub date: String,
    pub sleep_duration: i64,
    pub deep_sleep: i64,
    pub rem_sleep: i64,
    pub light_sleep: i64,
    pub wake_time: i64,
    pub sleep_score: String,
    pub resting_hr_sleep: String,
    pub hrv_sleep: String,
}

impl TableRow for SleepRow {
    const HEADERS: &'static [&'static str] = &[
        "date",
        "sleep_duration",
        "deep_sleep",
        "rem_sleep",
        "light_sleep",
        "wake_time",
        "sleep_score",
        "resting_hr_sleep",
        "hrv_sleep",
    ];

    fn key(&self) -> &str {
        &self.date
    }
}

/// Seconds → whole minutes, ties to even.
fn minutes(seconds: f64) -> i64 {
    (seconds / 60.0).round_ties_even() as i64
}

/// Extract one row from a sleepData record, keyed on `calendarDate`. Missing
/// sleep-phase counters default to 0 before the minute conversion; a record
/// with no recorded phases yields `sleep_duration = 0`, not a blank.
pub fn extract(record: &Value, window: &DateWindow) -> Option<SleepRow> {
    let raw = json::str_field(record, &["calendarDate"]).unwrap_or_default();
    let instant = time::normalize(raw)?;
    if !window.contains(Some(instant)) {
        return None;
    }

    let deep = json::f64_field(record, &["deepSleepSeconds"]).unwrap_or(0.0);
    let light = json::f64_field(record, &["lightSleepSeconds"]).unwrap_or(0.0);
    let rem = json::f64_field(record, &["remSleepSeconds"]).unwrap_or(0.0);
    let awake = json::f64_field(record, &["awakeSleepSeconds"]).unwrap_or(0.0);

    Some(SleepRow {
        date: time::format_date(instant),
        sleep_duration: minutes(deep + light + rem),
        deep_sleep: minutes(deep),
        rem_sleep: minutes(rem),
        light_sleep: minutes(light),
        wake_time: minutes(awake),
        sleep_score: json::scalar_string(record, &["overallSleepScore", "value"]),
        resting_hr_sleep: json::scalar_string(record, &["spo2SleepSummary", "averageHR"]),
        hrv_sleep: String::new(),
    })
}
