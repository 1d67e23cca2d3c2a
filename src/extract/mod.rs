// src/extract/mod.rs

pub mod biometrics;
pub mod max_met;
pub mod sleep;

pub use biometrics::BiometricsRow;
pub use max_met::MaxMetRow;
pub use sleep::SleepRow;

/// A fixed-schema output row: the CSV header set and the column the table is
/// deduplicated and sorted on. Headers are written even for an empty table.
pub trait TableRow: serde::Serialize {
    const HEADERS: &'static [&'static str];

    /// Dedup/sort key, a formatted date or datetime string.
    fn key(&self) -> &str;
}
