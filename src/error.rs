//! Unified error types for chatlens.
//!
//! [`ChatlensError`] covers every failure the library can report. Structural
//! problems with a transcript abort the whole parse, while per-record
//! anomalies are recovered by the parser and only logged.
//!
//! | Variant | Scope |
//! |---------|-------|
//! | [`MalformedTranscript`](ChatlensError::MalformedTranscript) | whole document, fatal |
//! | [`UnparseableTimestamp`](ChatlensError::UnparseableTimestamp) | one block, skipped by the parser |
//! | [`MissingResource`](ChatlensError::MissingResource) | reducers needing stop words |

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Record;
///
/// fn load() -> Result<Vec<Record>> {
///     chatlens::parse_transcript("12/1/23, 9:15 AM - Alice: Hello")
/// }
/// # assert_eq!(load().unwrap().len(), 1);
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The document does not start with a message header.
    ///
    /// There is no earlier message the offending line could belong to, so no
    /// partial result is produced.
    #[error("Malformed transcript at line {line}: expected a message header, found '{content}'")]
    MalformedTranscript {
        /// 1-based line number of the offending line
        line: usize,
        /// The offending line, truncated for display
        content: String,
    },

    /// A header line looked like a timestamp but no accepted format parsed it.
    #[error("Unparseable timestamp at line {line}: '{header}'")]
    UnparseableTimestamp {
        /// 1-based line number of the header
        line: usize,
        /// The date and time text that failed to parse
        header: String,
    },

    /// A resource file required by a reducer is absent or unreadable.
    #[error("Missing {resource} resource at {}", path.display())]
    MissingResource {
        /// Resource kind, e.g. "stop-word list"
        resource: &'static str,
        /// Path that was tried
        path: PathBuf,
    },

    /// Invalid date in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

/// Longest line excerpt kept in error messages.
const EXCERPT_CHARS: usize = 80;

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(EXCERPT_CHARS).collect();
    cut.push('…');
    cut
}

impl ChatlensError {
    /// Creates a malformed transcript error for the given line.
    pub fn malformed(line: usize, content: &str) -> Self {
        ChatlensError::MalformedTranscript {
            line,
            content: excerpt(content.trim()),
        }
    }

    /// Creates an unparseable timestamp error.
    pub fn unparseable_timestamp(line: usize, header: impl Into<String>) -> Self {
        ChatlensError::UnparseableTimestamp {
            line,
            header: header.into(),
        }
    }

    /// Creates a missing stop-word list error.
    pub fn missing_stop_words(path: impl Into<PathBuf>) -> Self {
        ChatlensError::MissingResource {
            resource: "stop-word list",
            path: path.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the whole transcript was rejected.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ChatlensError::MalformedTranscript { .. })
    }

    /// Returns `true` if a single block carried a bad timestamp.
    pub fn is_unparseable_timestamp(&self) -> bool {
        matches!(self, ChatlensError::UnparseableTimestamp { .. })
    }

    /// Returns `true` if a resource file was missing.
    pub fn is_missing_resource(&self) -> bool {
        matches!(self, ChatlensError::MissingResource { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}
