//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports into structured records
//! and computing the statistics a chat dashboard shows.
//!
//! ## Overview
//!
//! An exported transcript is loosely structured text: messages span several
//! lines, dates follow the exporting device's locale, and system events have
//! no author. Chatlens recovers one [`Record`] per logical message and then
//! aggregates them:
//!
//! - **Counts**: messages, words, media placeholders, links
//! - **Time**: monthly and daily timelines, weekday/month activity, a weekday × hour heatmap
//! - **Content**: most common words, word cloud text, emoji frequency
//! - **People**: busiest authors and their share of the chat
//! - **Mood**: positive / neutral / negative message counts
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::analysis::{fetch_stats, monthly_timeline, UserFilter};
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = parse_transcript(
//!         "12/1/23, 9:15 AM - Alice: Hello\nhow are you?\n12/1/23, 9:16 AM - Bob: <Media omitted>",
//!     )?;
//!     assert_eq!(records[0].body, "Hello\nhow are you?");
//!
//!     let stats = fetch_stats(&UserFilter::overall(), &records);
//!     assert_eq!(stats.messages, 2);
//!     assert_eq!(stats.media, 1);
//!
//!     let months = monthly_timeline(&UserFilter::from("Alice"), &records);
//!     assert_eq!(months[0].label, "December-2023");
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`tokenizer`] splits the text into logical blocks at header lines
//! 2. [`parser`] turns each block into a [`Record`] (or skips it with a warning)
//! 3. [`temporal`] derives the calendar fields every reducer buckets by
//! 4. [`analysis`] reduces a [`UserFilter`](analysis::UserFilter) selection to tables
//! 5. [`report`] and [`export`] gather and write the results
//!
//! ## Module Structure
//!
//! - [`tokenizer`]: [`Block`](tokenizer::Block), [`tokenize`](tokenizer::tokenize)
//! - [`parsing`]: header patterns, notification phrases, media placeholders
//! - [`parser`]: [`TranscriptParser`](parser::TranscriptParser), [`parse_transcript`], [`parse_file`]
//! - [`record`]: [`Record`] and the sentinel author/body values
//! - [`temporal`]: [`CalendarFields`](temporal::CalendarFields) and label helpers
//! - [`analysis`]: the reducers and [`UserFilter`](analysis::UserFilter)
//! - [`resources`]: [`StopWords`](resources::StopWords) and its process-wide cache
//! - [`report`]: [`ChatReport`](report::ChatReport)
//! - [`export`]: CSV and JSON writers
//! - [`config`]: [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`cli`]: CLI argument types (`cli` feature)
//! - [`error`]: [`ChatlensError`], [`Result`]
//! - [`prelude`]: Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod report;
pub mod resources;
pub mod temporal;
pub mod tokenizer;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parser::{parse_file, parse_transcript};
pub use record::Record;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Record;
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::{AnalysisConfig, DateOrder, ParserConfig};
    pub use crate::parser::{
        ParseOutcome, TranscriptParser, parse_file, parse_transcript, parse_transcript_with_report,
    };

    // Analysis
    pub use crate::analysis::UserFilter;
    pub use crate::report::ChatReport;
    pub use crate::resources::StopWords;

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::export::{records_to_csv, write_records_csv};
    #[cfg(feature = "json-output")]
    pub use crate::export::{records_to_json, report_to_json, write_report_json};
}
