//! Who talks the most.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::filter::OVERALL;
use super::tally::Tally;
use crate::record::Record;

/// Number of entries in [`BusyUsers::top`] by default.
pub const DEFAULT_TOP_USERS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCount {
    pub name: String,
    pub messages: usize,
}

/// One author's share of all records, in percent rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserShare {
    pub name: String,
    pub percent: f64,
}

/// Result of [`most_busy_users`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusyUsers {
    /// The busiest authors, most messages first.
    pub top: Vec<UserCount>,
    /// Every author with their share, most messages first.
    pub shares: Vec<UserShare>,
}

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Ranks authors over every record (notifications count as their own author).
pub fn most_busy_users(records: &[Record]) -> BusyUsers {
    most_busy_users_with_limit(records, DEFAULT_TOP_USERS)
}

/// Like [`most_busy_users`] with a custom size for the top table.
pub fn most_busy_users_with_limit(records: &[Record], limit: usize) -> BusyUsers {
    let ranked = records
        .iter()
        .map(|r| r.author.clone())
        .collect::<Tally<String>>()
        .into_sorted();
    let total = records.len() as f64;

    BusyUsers {
        top: ranked
            .iter()
            .take(limit)
            .map(|(name, messages)| UserCount {
                name: name.clone(),
                messages: *messages,
            })
            .collect(),
        shares: ranked
            .into_iter()
            .map(|(name, messages)| UserShare {
                name,
                percent: round2(messages as f64 / total * 100.0),
            })
            .collect(),
    }
}

/// Choices for the author selector: `"Overall"` first, then every real
/// author in alphabetical order.
pub fn user_list(records: &[Record]) -> Vec<String> {
    let authors: BTreeSet<&str> = records
        .iter()
        .filter(|r| !r.is_notification())
        .map(|r| r.author.as_str())
        .collect();

    std::iter::once(OVERALL)
        .chain(authors)
        .map(str::to_owned)
        .collect()
}
