//! JSON output of reports and records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::record::Record;
use crate::report::ChatReport;

/// Converts a report to pretty-printed JSON.
///
/// Sentiment keys are always `Positive`, `Neutral` and `Negative`; optional
/// sections that were not computed are omitted.
pub fn report_to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report as pretty-printed JSON.
pub fn write_report_json(report: &ChatReport, output_path: impl AsRef<Path>) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a JSON array, calendar fields inlined.
///
/// ```json
/// [
///   {"timestamp": "2024-06-15T12:30:00", "author": "Alice", "body": "Hello", "year": 2024, ...}
/// ]
/// ```
pub fn records_to_json(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
