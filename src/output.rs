//! Output formatting and persistence for word-cloud records.
//!
//! Supports debug logging of the records and the pretty-printed JSON export.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::types::WordRecord;
use std::path::Path;

/// Logs the records using Rust's debug pretty-print format.
pub fn print_pretty(records: &[WordRecord]) {
    debug!("{:#?}", records);
}

/// Renders records as a JSON array indented with two spaces.
pub fn to_json(records: &[WordRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes the records as a JSON array to `path`, replacing any existing file.
///
/// The document is rendered in full before the file is touched.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn write_json(path: &Path, records: &[WordRecord]) -> Result<()> {
    let body = to_json(records)?;
    std::fs::write(path, body)?;

    info!(records = records.len(), "Word cloud written");
    Ok(())
}
