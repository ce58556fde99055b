//! Output writers.
//!
//! - [`write_records_csv`] / [`records_to_csv`] - parsed records as CSV with
//!   semicolon delimiter - requires `csv-output` feature
//! - [`write_report_json`] / [`report_to_json`] - a [`ChatReport`](crate::report::ChatReport)
//!   as JSON - requires `json-output` feature
//! - [`records_to_json`] - parsed records as a JSON array - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::analysis::UserFilter;
//! use chatlens::config::AnalysisConfig;
//! use chatlens::export::{report_to_json, write_records_csv};
//! use chatlens::report::ChatReport;
//!
//! let records = chatlens::parse_file("chat.txt")?;
//! write_records_csv(&records, "records.csv")?;
//!
//! let report = ChatReport::build(&records, &UserFilter::overall(), None, &AnalysisConfig::default());
//! println!("{}", report_to_json(&report)?);
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{records_to_csv, write_records_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{records_to_json, report_to_json, write_report_json};
