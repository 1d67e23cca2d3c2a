use serde::Serialize;
use serde_json::Value;

use super::TableRow;
use crate::json;
use crate::time::{self, DateWindow};

/// One row of `max_met_data.csv`.
///
/// MetricsMaxMetData carries the MET estimate and sport only; the heart-rate
/// and training-effect columns come from detailed activity files this tool
/// does not read, so they stay blank by contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaxMetRow {
    pub start_time: String,
    pub activity_type: String,
    pub duration_min: String,
    pub max_met: String,
    pub avg_hr: String,
    pub max_hr: String,
    pub training_effect: String,
}

impl TableRow for MaxMetRow {
    const HEADERS: &'static [&'static str] = &[
        "start_time",
        "activity_type",
        "duration_min",
        "max_met",
        "avg_hr",
        "max_hr",
        "training_effect",
    ];

    fn key(&self) -> &str {
        &self.start_time
    }
}

/// Extract one row from a MetricsMaxMetData record. `updateTimestamp` is the
/// start time; when it is absent or unparsable, `calendarDate` stands in.
pub fn extract(record: &Value, window: &DateWindow) -> Option<MaxMetRow> {
    let instant = time::normalize(json::str_field(record, &["updateTimestamp"]).unwrap_or_default())
        .or_else(|| {
            time::normalize(json::str_field(record, &["calendarDate"]).unwrap_or_default())
        })?;
    if !window.contains(Some(instant)) {
        return None;
    }

    Some(MaxMetRow {
        start_time: time::format_datetime(instant),
        activity_type: json::scalar_string(record, &["sport"]),
        duration_min: String::new(),
        max_met: json::scalar_string(record, &["maxMet"]),
        avg_hr: String::new(),
        max_hr: String::new(),
        training_effect: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn window() -> DateWindow {
        Config::default().window
    }

    #[test]
    fn update_timestamp_is_preferred() {
        let record = json!({
            "updateTimestamp": "2021-05-01T12:00:00.0",
            "calendarDate": "2021-05-02",
            "sport": "RUNNING",
            "maxMet": 47.0
        });
        let row = extract(&record, &window()).unwrap();
        assert_eq!(row.start_time, "2021-05-01T12:00:00");
        assert_eq!(row.activity_type, "RUNNING");
        assert_eq!(row.max_met, "47.0");
        assert_eq!(row.avg_hr, "");
    }

    #[test]
    fn falls_back_to_calendar_date() {
        let absent = json!({"calendarDate": "2021-05-02", "sport": "CYCLING"});
        let row = extract(&absent, &window()).unwrap();
        assert_eq!(row.start_time, "2021-05-02T00:00:00");

        let unparsable = json!({
            "updateTimestamp": "not a timestamp",
            "calendarDate": "2021-05-02"
        });
        let row = extract(&unparsable, &window()).unwrap();
        assert_eq!(row.start_time, "2021-05-02T00:00:00");
    }

    #[test]
    fn no_usable_date_is_skipped() {
        assert_eq!(extract(&json!({"sport": "RUNNING"}), &window()), None);
        assert_eq!(
            extract(&json!({"updateTimestamp": "2026-01-01T00:00:00"}), &window()),
            None
        );
    }
}
