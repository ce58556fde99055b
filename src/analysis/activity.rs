//! Activity maps: busiest weekdays, months and hours, and the day × hour heatmap.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::filter::UserFilter;
use super::tally::Tally;
use crate::record::Record;
use crate::temporal::{DAY_NAMES, day_index, period_label};

/// Messages attributed to one bucket label (weekday or month name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCount {
    pub label: String,
    pub messages: usize,
}

/// Messages sent during one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub messages: usize,
}

fn to_activity(tally: Tally<String>) -> Vec<ActivityCount> {
    tally
        .into_sorted()
        .into_iter()
        .map(|(label, messages)| ActivityCount { label, messages })
        .collect()
}

/// Message counts per weekday, busiest first.
pub fn week_activity_map(user: &UserFilter, records: &[Record]) -> Vec<ActivityCount> {
    to_activity(user.iter(records).map(|r| r.calendar.day_name.clone()).collect())
}

/// Message counts per month name (all years together), busiest first.
pub fn month_activity_map(user: &UserFilter, records: &[Record]) -> Vec<ActivityCount> {
    to_activity(user.iter(records).map(|r| r.calendar.month_name.clone()).collect())
}

/// The ten busiest hours of the day across every record.
pub fn active_hours(records: &[Record]) -> Vec<HourCount> {
    let tally: Tally<u32> = records.iter().map(|r| r.calendar.hour).collect();
    tally
        .most_common(10)
        .into_iter()
        .map(|(hour, messages)| HourCount { hour, messages })
        .collect()
}

/// The busiest weekdays across every record (at most seven).
pub fn active_days(records: &[Record]) -> Vec<ActivityCount> {
    let tally: Tally<String> = records.iter().map(|r| r.calendar.day_name.clone()).collect();
    let mut days = to_activity(tally);
    days.truncate(7);
    days
}

/// Message counts by weekday (rows) and hour period (columns).
///
/// Only weekdays and periods that occur are present; rows follow calendar
/// order from Monday and columns follow the clock. Every cell of the grid is
/// filled, with 0 where a weekday has no messages in a period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heatmap {
    pub days: Vec<String>,
    pub periods: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for one weekday and period; 0 if either is absent.
    pub fn get(&self, day: &str, period: &str) -> usize {
        let row = self.days.iter().position(|d| d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => 0,
        }
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Builds the weekday × hour-period heatmap.
pub fn activity_heatmap(user: &UserFilter, records: &[Record]) -> Heatmap {
    let mut grid = [[0usize; 24]; 7];
    let mut seen_days = BTreeSet::new();
    let mut seen_hours = BTreeSet::new();

    for record in user.iter(records) {
        let Some(day) = day_index(&record.calendar.day_name) else {
            continue;
        };
        let hour = record.calendar.hour as usize;
        let Some(cell) = grid.get_mut(day).and_then(|row| row.get_mut(hour)) else {
            continue;
        };
        *cell += 1;
        seen_days.insert(day);
        seen_hours.insert(hour);
    }

    Heatmap {
        days: seen_days.iter().map(|&d| DAY_NAMES[d].to_string()).collect(),
        periods: seen_hours.iter().map(|&h| period_label(h as u32)).collect(),
        cells: seen_days
            .iter()
            .map(|&d| seen_hours.iter().map(|&h| grid[d][h]).collect())
            .collect(),
    }
}
