//! CSV output of parsed records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Result;
use crate::record::Record;

const HEADER: [&str; 10] = [
    "Timestamp", "User", "Message", "Year", "Month", "Day", "DayName", "Hour", "Minute", "Period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `User`, `Message`, then the calendar fields
///   `Year`, `Month`, `Day`, `DayName`, `Hour`, `Minute`, `Period`
/// - Multi-line bodies are quoted
/// - Encoding: UTF-8
pub fn write_records_csv(records: &[Record], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_to(records, file)
}

/// Same format as [`write_records_csv`], returned as a string.
pub fn records_to_csv(records: &[Record]) -> Result<String> {
    let mut buf = Vec::new();
    write_to(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn write_to<W: Write>(records: &[Record], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record(build_row(record))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_row(record: &Record) -> [String; 10] {
    let cal = &record.calendar;
    [
        record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        record.author.clone(),
        record.body.clone(),
        cal.year.to_string(),
        cal.month_name.clone(),
        cal.day.to_string(),
        cal.day_name.clone(),
        cal.hour.to_string(),
        cal.minute.to_string(),
        cal.period.clone(),
    ]
}
