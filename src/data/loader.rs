use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{EventRecord, RegionRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems with an input table. Anything past this point is a
/// per-row parse failure reported through `anyhow` with its row position.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{table} is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

const EVENT_COLUMNS: &[&str] = &[
    "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year", "Season", "City",
    "Sport", "Event", "Medal",
];

const REGION_COLUMNS: &[&str] = &["NOC", "region"];

/// Load the athlete-event table. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – one event appearance per row, "NA" for missing values
/// * `.json` – records-oriented array of the same rows
pub fn load_events(path: &Path) -> Result<Vec<EventRecord>> {
    load_table(path, "athlete events table", EVENT_COLUMNS)
}

/// Load the NOC → region mapping table (same formats as [`load_events`]).
pub fn load_regions(path: &Path) -> Result<Vec<RegionRecord>> {
    load_table(path, "region mapping table", REGION_COLUMNS)
}

fn load_table<T: DeserializeOwned>(
    path: &Path,
    table: &'static str,
    required: &[&'static str],
) -> Result<Vec<T>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path, table, required),
        "json" => load_json(path, table),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv<T: DeserializeOwned>(
    path: &Path,
    table: &'static str,
    required: &[&'static str],
) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for &column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { table, column }.into());
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let row: T = result.with_context(|| format!("{table}: CSV row {row_no}"))?;
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "Name": "...", "Sex": "M", "Age": 24, ..., "Medal": null },
///   ...
/// ]
/// ```
fn load_json<T: DeserializeOwned>(path: &Path, table: &'static str) -> Result<Vec<T>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {table} JSON"))
}
