//! Monthly and daily message timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::UserFilter;
use crate::record::Record;

/// Messages sent in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    pub month: String,
    /// `"Month-Year"`, e.g. `"December-2023"`
    pub label: String,
    pub messages: usize,
}

/// Messages sent on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Message counts per month, oldest first.
pub fn monthly_timeline(user: &UserFilter, records: &[Record]) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
    for record in user.iter(records) {
        let cal = &record.calendar;
        months
            .entry((cal.year, cal.month_num))
            .or_insert((cal.month_name.as_str(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), (month, messages))| MonthlyCount {
            year,
            month_num,
            month: month.to_string(),
            label: format!("{month}-{year}"),
            messages,
        })
        .collect()
}

/// Message counts per day, oldest first. Days without messages are absent.
pub fn daily_timeline(user: &UserFilter, records: &[Record]) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in user.iter(records) {
        *days.entry(record.calendar.only_date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}
