//! The parsed chat entry.
//!
//! A [`Record`] is one logical message from a transcript: its timestamp,
//! author and body, plus the calendar fields derived from the timestamp by
//! the [temporal indexer](crate::temporal).
//!
//! # Example
//!
//! ```
//! use chatlens::Record;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap().and_hms_opt(9, 15, 0).unwrap();
//! let record = Record::new(ts, "Alice", "Hello there");
//!
//! assert_eq!(record.calendar.year, 2023);
//! assert_eq!(record.calendar.period, "09:00-10:00");
//! assert!(!record.is_notification());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::temporal::CalendarFields;

/// Author assigned to system events (joins, leaves, setting changes).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Body assigned to every attachment placeholder, whatever its locale.
pub const MEDIA_OMITTED: &str = "<Media omitted>\n";

/// A single parsed transcript entry.
///
/// | Field | Description |
/// |-------|-------------|
/// | `timestamp` | Naive local date and time as written in the export |
/// | `author` | Sender name, or [`GROUP_NOTIFICATION`] |
/// | `body` | Message text; multi-line messages keep their `\n` |
/// | `calendar` | Derived year/month/day/hour fields |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// When the message was sent, in the exporter's local time.
    pub timestamp: NaiveDateTime,

    /// Sender name, or [`GROUP_NOTIFICATION`] for system events.
    pub author: String,

    /// Message text.
    ///
    /// Attachment placeholders are normalized to [`MEDIA_OMITTED`].
    pub body: String,

    /// Calendar fields derived from `timestamp`.
    #[serde(flatten)]
    pub calendar: CalendarFields,
}

impl Record {
    /// Creates a record and derives its calendar fields.
    pub fn new(timestamp: NaiveDateTime, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
            calendar: CalendarFields::from_timestamp(timestamp),
        }
    }

    /// Creates a system notification record.
    pub fn notification(timestamp: NaiveDateTime, body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, body)
    }

    /// Returns `true` for system notifications.
    pub fn is_notification(&self) -> bool {
        self.author == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is the media placeholder.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_OMITTED
    }

    /// Returns `true` for records that carry human-written text.
    pub fn is_text(&self) -> bool {
        !self.is_notification() && !self.is_media()
    }
}
