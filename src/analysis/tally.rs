//! Insertion-ordered counter.

use std::hash::Hash;

use indexmap::IndexMap;

/// Counts keys while remembering the order each key was first seen.
///
/// Sorting by count is stable, so equal counts keep first-seen order.
#[derive(Debug, Clone)]
pub(crate) struct Tally<K> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq> Tally<K> {
    pub fn new() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Entries ordered by descending count, ties in first-seen order.
    pub fn into_sorted(self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self.counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    pub fn most_common(self, n: usize) -> Vec<(K, usize)> {
        let mut sorted = self.into_sorted();
        sorted.truncate(n);
        sorted
    }
}

impl<K: Hash + Eq> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}
