// src/build/mod.rs

use anyhow::{bail, Context, Result};
use glob::glob;
use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

use crate::config::Config;
use crate::extract::{biometrics, max_met, sleep, TableRow};

/// Decode one export file as a JSON array of records.
fn read_records(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_str(&text).with_context(|| format!("decoding {}", path.display()))?;
    match value {
        Value::Array(records) => Ok(records),
        _ => bail!("{} is not a JSON array", path.display()),
    }
}

/// List source files under `dir` matching a filename pattern, alphabetical.
/// An absent directory is a warning and an empty batch, not an error.
fn discover(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "source directory not found");
        return Vec::new();
    }
    match glob(&format!("{}/{}", dir.display(), pattern)) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            warn!(pattern, error = %e, "invalid glob pattern");
            Vec::new()
        }
    }
}

/// Run every record of every source file through `extract`, collecting the
/// rows that survive. A file that fails to decode is skipped with a warning;
/// the rest of the batch still runs.
fn gather<R, F>(sources: &[PathBuf], extract: F) -> Vec<R>
where
    F: Fn(&Value) -> Option<R>,
{
    let mut rows = Vec::new();
    for path in sources {
        let records = match read_records(path) {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "skipping unreadable source file");
                continue;
            }
        };
        rows.extend(records.iter().filter_map(&extract));
    }
    rows
}

/// Sort ascending by key, collapse duplicate keys to the first occurrence,
/// and write the table. The header row is written even for zero rows; a
/// failed write is fatal for the run.
fn write_table<R: TableRow>(path: &Path, mut rows: Vec<R>) -> Result<()> {
    rows.sort_by(|a, b| a.key().cmp(b.key()));
    rows.dedup_by(|a, b| a.key() == b.key());

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record(R::HEADERS)?;
    for row in &rows {
        wtr.serialize(row)
            .with_context(|| format!("writing row to {}", path.display()))?;
    }
    wtr.flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    info!(rows = rows.len(), path = %path.display(), "wrote table");
    Ok(())
}

/// user_biometrics.csv: a single fixed-name source file.
pub fn build_user_biometrics(cfg: &Config) -> Result<()> {
    let source = cfg
        .source_root
        .join("DI-Connect-Wellness")
        .join("83630101_userBioMetrics.json");

    let mut sources = Vec::new();
    if source.is_file() {
        sources.push(source);
    } else {
        warn!(source = %source.display(), "source file not found");
    }

    let rows = gather(&sources, |record| biometrics::extract(record, &cfg.window));
    write_table(&cfg.target_dir.join("user_biometrics.csv"), rows)
}

/// sleep_data.csv: every `*_sleepData.json` under DI-Connect-Wellness.
pub fn build_sleep(cfg: &Config) -> Result<()> {
    let dir = cfg.source_root.join("DI-Connect-Wellness");
    let sources = discover(&dir, "*_sleepData.json");

    let rows = gather(&sources, |record| sleep::extract(record, &cfg.window));
    write_table(&cfg.target_dir.join("sleep_data.csv"), rows)
}

/// max_met_data.csv: every `*MetricsMaxMetData_*.json` under DI-Connect-Metrics.
pub fn build_max_met(cfg: &Config) -> Result<()> {
    let dir = cfg.source_root.join("DI-Connect-Metrics");
    let sources = discover(&dir, "*MetricsMaxMetData_*.json");

    let rows = gather(&sources, |record| max_met::extract(record, &cfg.window));
    write_table(&cfg.target_dir.join("max_met_data.csv"), rows)
}

/// Build all three tables in sequence against one configuration.
pub fn build_all(cfg: &Config) -> Result<()> {
    fs::create_dir_all(&cfg.target_dir)
        .with_context(|| format!("creating output directory {}", cfg.target_dir.display()))?;
    build_user_biometrics(cfg)?;
    build_sleep(cfg)?;
    build_max_met(cfg)?;
    Ok(())
}
