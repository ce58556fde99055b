//! Select the records a reducer works on.
//!
//! [`UserFilter`] is either `Overall` (every record) or a single author. It
//! can additionally be narrowed to a date range.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Author | [`user`](UserFilter::user) | Records whose author equals the name exactly |
//! | Date from | [`with_date_from`](UserFilter::with_date_from) | Records on or after the date |
//! | Date to | [`with_date_to`](UserFilter::with_date_to) | Records on or before the date |
//!
//! # Example
//!
//! ```
//! use chatlens::analysis::UserFilter;
//! use chatlens::parse_transcript;
//!
//! let records = parse_transcript(
//!     "1/1/23, 10:00 AM - Alice: hi\n1/1/23, 10:01 AM - Bob: hey\n1/2/23, 9:00 AM - Alice: again",
//! )?;
//!
//! assert_eq!(UserFilter::from("Overall").apply(&records).len(), 3);
//! assert_eq!(UserFilter::from("Alice").apply(&records).len(), 2);
//!
//! let january_second = UserFilter::from("Alice").with_date_from("2023-01-02")?;
//! assert_eq!(january_second.apply(&records).len(), 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```
//!
//! Filters are combined with AND logic and never modify the records.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ChatlensError, Result};
use crate::record::Record;

/// The selection meaning "every author".
pub const OVERALL: &str = "Overall";

/// Which records a reducer should see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Author to keep; `None` keeps every author.
    pub user: Option<String>,

    /// Keep only records at or after this instant.
    pub after: Option<NaiveDateTime>,

    /// Keep only records at or before this instant.
    pub before: Option<NaiveDateTime>,
}

impl UserFilter {
    /// Selects every record.
    pub fn overall() -> Self {
        Self::default()
    }

    /// Selects one author. The name `"Overall"` selects everyone.
    pub fn user(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == OVERALL {
            return Self::overall();
        }
        Self {
            user: Some(name),
            ..Self::default()
        }
    }

    /// Sets the inclusive start date (`YYYY-MM-DD`).
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        self.after = Some(date.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the inclusive end date (`YYYY-MM-DD`); the whole day is included.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        let end_of_day = date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatlensError::invalid_date(date_str))?;
        self.before = Some(end_of_day);
        Ok(self)
    }

    /// The same date bounds with the author restriction removed.
    pub fn date_window(&self) -> Self {
        Self {
            user: None,
            ..self.clone()
        }
    }

    /// Returns `true` if no author restriction is set.
    pub fn is_overall(&self) -> bool {
        self.user.is_none()
    }

    /// Returns `true` if a date bound is set.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(ref user) = self.user {
            if record.author != *user {
                return false;
            }
        }
        if self.after.is_some_and(|after| record.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| record.timestamp > before) {
            return false;
        }
        true
    }

    /// Iterates the matching records in transcript order.
    pub fn iter<'a>(&'a self, records: &'a [Record]) -> impl Iterator<Item = &'a Record> + 'a {
        records.iter().filter(move |r| self.matches(r))
    }

    /// Collects a view of the matching records.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}

impl From<&str> for UserFilter {
    fn from(name: &str) -> Self {
        Self::user(name)
    }
}

impl From<String> for UserFilter {
    fn from(name: String) -> Self {
        Self::user(name)
    }
}

impl FromStr for UserFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::user(s))
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user.as_deref().unwrap_or(OVERALL))
    }
}
