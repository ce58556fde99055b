//! Line tokenizer: splits a transcript into logical message blocks.
//!
//! A line opens a new block only when it is a full message header (see
//! [`recognize_header`]). Every other line is a continuation and is appended,
//! with its line break, to the block before it.
//!
//! # Example
//!
//! ```
//! use chatlens::tokenizer::tokenize;
//!
//! let text = "12/1/23, 9:15 AM - Alice: Hello there\nhow are you?\n12/1/23, 9:16 AM - Bob: Fine";
//! let blocks: Vec<_> = tokenize(text)?.collect();
//!
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].text, "Alice: Hello there\nhow are you?");
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::iter::Enumerate;
use std::str::Lines;

use crate::error::{ChatlensError, Result};
use crate::parsing::{HeaderPattern, recognize_header, strip_line_marks};

/// One logical message: a header line plus its continuation lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// 1-based line number of the header
    pub line: usize,
    /// Layout that recognised the header
    pub pattern: HeaderPattern,
    /// Captured date text
    pub date: &'a str,
    /// Captured time text
    pub time: &'a str,
    /// Text after the header separator, continuation lines joined with `\n`
    pub text: String,
}

impl Block<'_> {
    /// Returns the header line's own text, without continuation lines.
    pub fn first_line(&self) -> &str {
        self.text.split('\n').next().unwrap_or("")
    }
}

/// Lazy iterator over the blocks of a transcript.
///
/// A clone copies the current position, so cloning before consumption (or
/// calling [`tokenize`] again) gives a second pass over the same text.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    lines: Enumerate<Lines<'a>>,
    pending: Option<Block<'a>>,
}

impl<'a> Blocks<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            pending: None,
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, raw) in self.lines.by_ref() {
            if let Some(header) = recognize_header(strip_line_marks(raw)) {
                let block = Block {
                    line: idx + 1,
                    pattern: header.pattern,
                    date: header.date,
                    time: header.time,
                    text: header.rest.to_string(),
                };
                if let Some(done) = self.pending.replace(block) {
                    return Some(done);
                }
            } else if let Some(pending) = self.pending.as_mut() {
                // Continuation of the previous message (multiline)
                pending.text.push('\n');
                pending.text.push_str(raw);
            }
            // Blank lines before the first header are skipped
        }

        self.pending.take()
    }
}

/// Tokenizes a transcript into logical blocks.
///
/// Fails with [`ChatlensError::MalformedTranscript`] when the first non-blank
/// line is not a message header. A blank document yields no blocks.
pub fn tokenize(text: &str) -> Result<Blocks<'_>> {
    let first = text
        .lines()
        .enumerate()
        .find(|(_, line)| !strip_line_marks(line).trim().is_empty());

    if let Some((idx, line)) = first {
        if recognize_header(strip_line_marks(line)).is_none() {
            return Err(ChatlensError::malformed(idx + 1, line));
        }
    }

    Ok(Blocks::new(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block() {
        let blocks: Vec<_> = tokenize("12/1/23, 9:15 AM - Alice: Hello").unwrap().collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].line, 1);
        assert_eq!(blocks[0].date, "12/1/23");
        assert_eq!(blocks[0].time, "9:15 AM");
        assert_eq!(blocks[0].text, "Alice: Hello");
    }

    #[test]
    fn test_continuation_lines_attach() {
        let text = "12/1/23, 9:15 AM - Alice: Hello there\nhow are you?\n\nstill here\n12/1/23, 9:20 AM - Bob: ok";
        let blocks: Vec<_> = tokenize(text).unwrap().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "Alice: Hello there\nhow are you?\n\nstill here");
        assert_eq!(blocks[0].first_line(), "Alice: Hello there");
        assert_eq!(blocks[1].line, 5);
    }

    #[test]
    fn test_notification_starts_block() {
        let text = "1/1/23, 10:00 AM - Bob added Carol\n1/1/23, 10:01 AM - Carol: hi all";
        let blocks: Vec<_> = tokenize(text).unwrap().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "Bob added Carol");
    }

    #[test]
    fn test_settings_events_start_blocks() {
        let text = "\
1/1/23, 10:00 AM - Alice: hello
1/1/23, 10:01 AM - Alice changed this group's settings to allow only admins to send messages to this group
1/1/23, 10:02 AM - Alice changed the settings so only admins can edit the group settings
1/1/23, 10:03 AM - Bob reset this group's invite link
1/1/23, 10:04 AM - Alice turned on admin approval to join this group
1/1/23, 10:05 AM - Bob: ok";
        let blocks: Vec<_> = tokenize(text).unwrap().collect();
        assert_eq!(blocks.len(), 6);
        assert_eq!(blocks[0].text, "Alice: hello");
        assert_eq!(blocks[3].text, "Bob reset this group's invite link");
        assert_eq!(blocks[5].line, 6);
    }

    #[test]
    fn test_settings_event_as_first_line() {
        let text = "1/1/23, 10:00 AM - You changed this group's settings to allow only admins to send messages to this group\n1/1/23, 10:01 AM - Bob: hi";
        let blocks: Vec<_> = tokenize(text).unwrap().collect();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_timestamp_prefixed_prose_is_continuation() {
        let text = "1/1/23, 10:00 AM - Bob: see below\n1/1/23, 10:00 AM - something odd";
        let blocks: Vec<_> = tokenize(text).unwrap().collect();
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].text.ends_with("something odd"));
    }

    #[test]
    fn test_leading_blank_lines_and_bom() {
        let text = "\n   \n\u{feff}12/1/23, 9:15 AM - Alice: Hi";
        let blocks: Vec<_> = tokenize(text).unwrap().collect();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].line, 3);
    }

    #[test]
    fn test_malformed_first_line() {
        let err = tokenize("hello\n12/1/23, 9:15 AM - Alice: Hi").unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(tokenize("").unwrap().count(), 0);
        assert_eq!(tokenize("\n\n  \n").unwrap().count(), 0);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "12/1/23, 9:15 AM - Alice: one\r\ntwo\r\n12/1/23, 9:16 AM - Bob: three\r\n";
        let blocks: Vec<_> = tokenize(text).unwrap().collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text, "Alice: one\ntwo");
        assert_eq!(blocks[1].text, "Bob: three");
    }

    #[test]
    fn test_iterator_is_restartable_by_clone() {
        let blocks = tokenize("12/1/23, 9:15 AM - Alice: a\n12/1/23, 9:16 AM - Bob: b").unwrap();
        let again = blocks.clone();
        assert_eq!(blocks.count(), 2);
        assert_eq!(again.count(), 2);
    }
}
