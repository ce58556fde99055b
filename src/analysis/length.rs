//! Message length summary.

use serde::{Deserialize, Serialize};

use super::filter::UserFilter;
use crate::record::Record;

/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthSummary {
    pub average: f64,
    pub longest: String,
    pub shortest: String,
}

/// Average body length plus the longest and shortest bodies.
///
/// The first of several equally long bodies wins. Returns `None` when
/// nothing is selected.
pub fn message_length_analysis(user: &UserFilter, records: &[Record]) -> Option<LengthSummary> {
    let mut selected = user.iter(records).map(|r| (r.body.chars().count(), r.body.as_str()));
    let first = selected.next()?;

    let (mut longest, mut shortest) = (first, first);
    let (mut total, mut count) = (first.0, 1usize);
    for entry in selected {
        if entry.0 > longest.0 {
            longest = entry;
        }
        if entry.0 < shortest.0 {
            shortest = entry;
        }
        total += entry.0;
        count += 1;
    }

    Some(LengthSummary {
        average: total as f64 / count as f64,
        longest: longest.1.to_string(),
        shortest: shortest.1.to_string(),
    })
}
