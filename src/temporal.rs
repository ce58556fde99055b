//! Calendar fields derived from record timestamps.
//!
//! Timestamps are naive: the export is taken to already be in the zone the
//! reader cares about, so no conversion happens here. Every field is a pure
//! function of the timestamp, which makes indexing idempotent.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::record::Record;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names in calendar order, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Bucketing fields used by the timeline and activity reducers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    pub year: i32,
    pub month_name: String,
    pub month_num: u32,
    pub day: u32,
    pub day_name: String,
    pub hour: u32,
    pub minute: u32,
    pub only_date: NaiveDate,
    /// One-hour bucket label, `HH:00-HH+1:00` modulo 24.
    pub period: String,
}

impl CalendarFields {
    /// Derives all fields from a timestamp.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month_name: month_name(ts.month()).to_string(),
            month_num: ts.month(),
            day: ts.day(),
            day_name: day_name(ts.weekday()).to_string(),
            hour: ts.hour(),
            minute: ts.minute(),
            only_date: ts.date(),
            period: period_label(ts.hour()),
        }
    }
}

/// English month name for a 1-based month number.
///
/// Out-of-range input yields an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// English weekday name.
pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Position of a weekday name in [`DAY_NAMES`], if it is one.
pub fn day_index(name: &str) -> Option<usize> {
    DAY_NAMES.iter().position(|d| *d == name)
}

/// Hour bucket label: `9` → `"09:00-10:00"`, `23` → `"23:00-00:00"`.
pub fn period_label(hour: u32) -> String {
    format!("{:02}:00-{:02}:00", hour % 24, (hour + 1) % 24)
}

/// Re-derives the calendar fields of one record from its timestamp.
pub fn index_record(record: &mut Record) {
    record.calendar = CalendarFields::from_timestamp(record.timestamp);
}

/// Re-derives the calendar fields of every record in place.
pub fn index_records(records: &mut [Record]) {
    for record in records {
        index_record(record);
    }
}
