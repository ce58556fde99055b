//! Word frequency and word cloud text.
//!
//! Both reducers look only at human-written text: notifications and media
//! placeholders are skipped. Bodies are lowercased and split on whitespace;
//! punctuation stays attached to its word.

use serde::{Deserialize, Serialize};

use super::filter::UserFilter;
use super::tally::Tally;
use crate::record::Record;
use crate::resources::StopWords;

/// Number of entries returned by [`most_common_words`].
pub const DEFAULT_TOP_WORDS: usize = 20;

/// How often one word appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub frequency: usize,
}

fn clean_words<'a>(
    user: &'a UserFilter,
    records: &'a [Record],
    stop_words: &'a StopWords,
) -> impl Iterator<Item = Vec<String>> + 'a {
    user.iter(records).filter(|r| r.is_text()).map(move |record| {
        record
            .body
            .to_lowercase()
            .split_whitespace()
            .filter(|word| !stop_words.contains(word))
            .map(str::to_owned)
            .collect()
    })
}

/// The twenty most frequent words, ties in first-seen order.
pub fn most_common_words(user: &UserFilter, records: &[Record], stop_words: &StopWords) -> Vec<WordCount> {
    most_common_words_with_limit(user, records, stop_words, DEFAULT_TOP_WORDS)
}

/// Like [`most_common_words`] with a custom table size.
pub fn most_common_words_with_limit(
    user: &UserFilter,
    records: &[Record],
    stop_words: &StopWords,
    limit: usize,
) -> Vec<WordCount> {
    let tally: Tally<String> = clean_words(user, records, stop_words).flatten().collect();
    tally
        .most_common(limit)
        .into_iter()
        .map(|(word, frequency)| WordCount { word, frequency })
        .collect()
}

/// The cleaned text a word cloud is drawn from: every kept word, one space apart.
pub fn create_wordcloud(user: &UserFilter, records: &[Record], stop_words: &StopWords) -> String {
    clean_words(user, records, stop_words)
        .filter(|words| !words.is_empty())
        .map(|words| words.join(" "))
        .collect::<Vec<_>>()
        .join(" ")
}
