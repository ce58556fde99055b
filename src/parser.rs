//! Record parser: turns logical blocks into [`Record`]s.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//! use chatlens::record::GROUP_NOTIFICATION;
//!
//! let text = "1/1/23, 10:00 AM - Bob added Carol\n1/1/23, 10:05 AM - Carol: thanks!";
//! let records = TranscriptParser::new().parse_str(text)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].author, GROUP_NOTIFICATION);
//! assert_eq!(records[1].author, "Carol");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! # Error policy
//!
//! - A document that does not open with a header is rejected as a whole.
//! - A block whose timestamp cannot be read is dropped with a warning and
//!   parsing continues.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{is_notification, normalize_body, split_author};
use crate::record::Record;
use crate::tokenizer::{Block, tokenize};

/// Records parsed from a transcript together with the blocks that were dropped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseOutcome {
    pub records: Vec<Record>,
    /// Header line numbers of blocks skipped for an unreadable timestamp.
    pub skipped_lines: Vec<usize>,
}

impl ParseOutcome {
    /// Number of blocks dropped.
    pub fn skipped(&self) -> usize {
        self.skipped_lines.len()
    }
}

/// Parser for WhatsApp TXT exports.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Converts one block into a record.
    ///
    /// Returns `Ok(None)` for a notification when the configuration skips
    /// system messages.
    pub fn parse_block(&self, block: &Block<'_>) -> Result<Option<Record>> {
        let timestamp = block
            .pattern
            .parse_timestamp(block.date, block.time, self.config.date_order)
            .ok_or_else(|| {
                ChatlensError::unparseable_timestamp(
                    block.line,
                    format!("{}, {}", block.date, block.time),
                )
            })?;

        if is_notification(block.first_line()) {
            if self.config.skip_system_messages {
                return Ok(None);
            }
            let body = block.text.trim_end_matches(['\n', '\r']);
            return Ok(Some(Record::notification(timestamp, body)));
        }

        let record = match split_author(&block.text) {
            Some((author, body)) => Record::new(timestamp, author, normalize_body(body)),
            // The tokenizer only emits blocks with an author or a notification
            None => Record::notification(timestamp, block.text.trim_end_matches(['\n', '\r'])),
        };
        Ok(Some(record))
    }

    /// Parses a transcript, reporting dropped blocks.
    pub fn parse_with_report(&self, text: &str) -> Result<ParseOutcome> {
        let mut outcome = ParseOutcome::default();

        for block in tokenize(text)? {
            match self.parse_block(&block) {
                Ok(Some(record)) => outcome.records.push(record),
                Ok(None) => {}
                Err(err) => {
                    warn!(line = block.line, error = %err, "skipping message block");
                    outcome.skipped_lines.push(block.line);
                }
            }
        }

        debug!(
            records = outcome.records.len(),
            skipped = outcome.skipped(),
            "parsed transcript"
        );
        Ok(outcome)
    }

    /// Parses a transcript held in memory.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Record>> {
        Ok(self.parse_with_report(text)?.records)
    }

    /// Reads and parses a transcript file.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Record>> {
        let text = fs::read_to_string(path)?;
        self.parse_str(&text)
    }
}

/// Parses a transcript with the default configuration.
pub fn parse_transcript(text: &str) -> Result<Vec<Record>> {
    TranscriptParser::new().parse_str(text)
}

/// Parses a transcript with the default configuration, reporting dropped blocks.
pub fn parse_transcript_with_report(text: &str) -> Result<ParseOutcome> {
    TranscriptParser::new().parse_with_report(text)
}

/// Reads and parses a transcript file with the default configuration.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    TranscriptParser::new().parse_file(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{GROUP_NOTIFICATION, MEDIA_OMITTED};
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_multiline_message() {
        let records =
            parse_transcript("12/1/23, 9:15 AM - Alice: Hello there\nhow are you?").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author, "Alice");
        assert_eq!(records[0].body, "Hello there\nhow are you?");
        assert_eq!(records[0].calendar.year, 2023);
        assert_eq!(records[0].calendar.month_num, 12);
        assert_eq!(records[0].timestamp.hour(), 9);
    }

    #[test]
    fn test_notification() {
        let records = parse_transcript("1/1/23, 10:00 AM - Bob added Carol").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author, GROUP_NOTIFICATION);
        assert_eq!(records[0].body, "Bob added Carol");
    }

    #[test]
    fn test_settings_events_are_notifications() {
        let text = "\
1/1/23, 10:00 AM - Alice: hello
1/1/23, 10:01 AM - Alice changed this group's settings to allow only admins to send messages to this group
1/1/23, 10:02 AM - Alice changed the settings so only admins can edit the group settings
1/1/23, 10:03 AM - Bob: ok";
        let records = parse_transcript(text).unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[0].body, "hello");
        assert_eq!(records[1].author, GROUP_NOTIFICATION);
        assert_eq!(records[2].author, GROUP_NOTIFICATION);
        assert!(records[2].body.starts_with("Alice changed the settings"));
        assert_eq!(records[3].author, "Bob");
    }

    #[test]
    fn test_skip_system_messages() {
        let parser = TranscriptParser::with_config(ParserConfig::new().with_skip_system_messages(true));
        let records = parser
            .parse_str("1/1/23, 10:00 AM - Bob added Carol\n1/1/23, 10:01 AM - Carol: hi")
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].author, "Carol");
    }

    #[test]
    fn test_media_is_normalized() {
        let records = parse_transcript("1/1/23, 10:00 AM - Bob: <media omitted>").unwrap();
        assert_eq!(records[0].body, MEDIA_OMITTED);
        assert!(records[0].is_media());
    }

    #[test]
    fn test_body_keeps_colons() {
        let records = parse_transcript("1/1/23, 10:00 AM - Bob: meeting at: 5pm").unwrap();
        assert_eq!(records[0].body, "meeting at: 5pm");
    }

    #[test]
    fn test_bad_timestamp_block_is_skipped() {
        let text = "1/1/23, 10:00 AM - Bob: first\n13/45/23, 10:01 AM - Bob: broken\nstill broken\n1/1/23, 10:02 AM - Bob: third";
        let outcome = TranscriptParser::new().parse_with_report(text).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.skipped_lines, vec![2]);
        assert_eq!(outcome.records[1].body, "third");
    }

    #[test]
    fn test_parse_block_reports_timestamp_error() {
        let block = tokenize("13/45/23, 10:01 AM - Bob: broken").unwrap().next().unwrap();
        let err = TranscriptParser::new().parse_block(&block).unwrap_err();
        assert!(err.is_unparseable_timestamp());
    }

    #[test]
    fn test_malformed_is_fatal() {
        let err = parse_transcript("not a header\n1/1/23, 10:00 AM - Bob: hi").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_order_preserved() {
        let text = "1/2/23, 10:00 AM - Bob: later\n1/1/23, 10:00 AM - Bob: earlier";
        let records = parse_transcript(text).unwrap();
        assert_eq!(records[0].body, "later");
        assert_eq!(records[1].timestamp.day(), 1);
    }

    #[test]
    fn test_eu_and_ios_layouts() {
        let records = parse_transcript(
            "[15.01.24, 10:30:00] Alice: Привет всем!\n[15.01.24, 10:31:00] Bob: Привет!",
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].calendar.month_name, "January");
        assert_eq!(records[0].calendar.day, 15);

        let records = parse_transcript("26.10.2025, 20:40 - Муха: Добрый вечер").unwrap();
        assert_eq!(records[0].author, "Муха");
        assert_eq!(records[0].calendar.hour, 20);
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.is_io());
    }
}
