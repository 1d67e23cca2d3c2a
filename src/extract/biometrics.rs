use serde::Serialize;
use serde_json::Value;

use super::TableRow;
use crate::json;
use crate::time::{self, DateWindow};

/// One row of `user_biometrics.csv`.
///
/// `userBioMetrics.json` mostly carries profile snapshots (weight, height,
/// VO2Max); of the wellness columns only the date and an occasional resting
/// heart rate are recoverable from it, so the rest stay blank by contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiometricsRow {
    pub datetime: String,
    pub resting_hr: String,
    pub hrv: String,
    pub stress_level: String,
    pub body_battery: String,
    pub spo2: String,
    pub respiration_rate: String,
}

impl TableRow for BiometricsRow {
    const HEADERS: &'static [&'static str] = &[
        "datetime",
        "resting_hr",
        "hrv",
        "stress_level",
        "body_battery",
        "spo2",
        "respiration_rate",
    ];

    fn key(&self) -> &str {
        &self.datetime
    }
}

/// Extract one row from a userBioMetrics record, or `None` when the record's
/// `metaData.calendarDate` is missing, unparsable, or outside the window.
pub fn extract(record: &Value, window: &DateWindow) -> Option<BiometricsRow> {
    let raw = json::str_field(record, &["metaData", "calendarDate"]).unwrap_or_default();
    let instant = time::normalize(raw)?;
    if !window.contains(Some(instant)) {
        return None;
    }

    Some(BiometricsRow {
        datetime: time::format_datetime(instant),
        resting_hr: json::scalar_string(record, &["restingHeartRate"]),
        hrv: String::new(),
        stress_level: String::new(),
        body_battery: String::new(),
        spo2: String::new(),
        respiration_rate: String::new(),
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
    fn extracts_datetime_and_resting_hr() {
        let record = json!({
            "metaData": {"calendarDate": "2020-02-15T13:19:26.265Z"},
            "restingHeartRate": 52
        });
        let row = extract(&record, &window()).unwrap();
        assert_eq!(row.datetime, "2020-02-15T13:19:26");
        assert_eq!(row.resting_hr, "52");
        assert_eq!(row.hrv, "");
        assert_eq!(row.spo2, "");
    }

    #[test]
    fn blank_columns_when_source_lacks_them() {
        let record = json!({"metaData": {"calendarDate": "2021-03-10"}});
        let row = extract(&record, &window()).unwrap();
        assert_eq!(row.datetime, "2021-03-10T00:00:00");
        assert_eq!(row.resting_hr, "");
    }

    #[test]
    fn missing_date_or_out_of_window_is_skipped() {
        assert_eq!(extract(&json!({"restingHeartRate": 52}), &window()), None);
        assert_eq!(
            extract(&json!({"metaData": {"calendarDate": "2019-12-31"}}), &window()),
            None
        );
        assert_eq!(
            extract(&json!({"metaData": {"calendarDate": "garbage"}}), &window()),
            None
        );
    }
}
