//! CSV loader for the observation dataset.

use anyhow::{Result, anyhow, bail};
use csv::{ReaderBuilder, StringRecord};
use serde::de::{Deserialize, Deserializer, Error as _};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::Observation;

pub const STATE_COLUMN: &str = "state_abbrev";
pub const OBJECTS_COLUMN: &str = "detected_objects";
pub const SCORE_COLUMN: &str = "Haunted Score";

/// Cell values read as missing, in addition to the empty cell.
static NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Loads all observations from the CSV file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened, is not valid CSV, lacks one of the
/// required columns, or has a score that is not a number.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_observations(path: &Path) -> Result<Vec<Observation>> {
    let file = std::fs::File::open(path)
        .map_err(|e| anyhow!("cannot open {}: {}", path.display(), e))?;
    let rows = read_observations(file)?;
    debug!(rows = rows.len(), "Observations loaded");
    Ok(rows)
}

/// Reads observations from any CSV source with a header row.
pub fn read_observations<R: Read>(reader: R) -> Result<Vec<Observation>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    // a missing column must fail even when the file has no data rows
    let headers = rdr.headers()?;
    for name in [STATE_COLUMN, OBJECTS_COLUMN, SCORE_COLUMN] {
        require_column(headers, name)?;
    }

    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: Observation = result?;
        rows.push(record);
    }

    Ok(rows)
}

fn require_column(headers: &StringRecord, name: &str) -> Result<()> {
    if !headers.iter().any(|h| h == name) {
        bail!("missing required column {:?}", name);
    }
    Ok(())
}

fn is_na(value: &str) -> bool {
    value.is_empty() || NA_VALUES.contains(&value)
}

/// Reads a text cell, mapping empty and NA cells to `None`.
pub(crate) fn na_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !is_na(v)))
}

/// Reads a numeric cell, mapping empty and NA cells to `None`.
pub(crate) fn na_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = na_string(deserializer)? else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if is_na(trimmed) {
        return Ok(None);
    }

    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| D::Error::custom(format!("invalid {} {:?}", SCORE_COLUMN, raw)))
}
