use chrono::{TimeZone, Utc};
use std::path::PathBuf;

use crate::time::DateWindow;

/// Fixed run configuration: where the export tree lives, where the CSVs go,
/// and the inclusive date window. Passed explicitly into each table build so
/// the builders hold no ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_root: PathBuf,
    pub target_dir: PathBuf,
    pub window: DateWindow,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("../DI_CONNECT"),
            target_dir: PathBuf::from("."),
            window: DateWindow::new(
                Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap(),
            ),
        }
    }
}
