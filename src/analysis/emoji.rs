//! Emoji frequency table.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::filter::UserFilter;
use super::tally::Tally;
use crate::record::Record;

static EMOJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Emoji}$").expect("emoji class is a valid regex"));

/// How often one emoji codepoint appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Returns `true` if the character is an emoji on its own.
///
/// ASCII digits and `#`/`*` are only emoji as part of a keycap sequence, so
/// ASCII is never counted.
pub fn is_emoji(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    let mut buf = [0u8; 4];
    EMOJI.is_match(c.encode_utf8(&mut buf))
}

/// Counts emoji codepoints across the selected bodies, most frequent first.
///
/// Each codepoint is looked at separately: a ZWJ family counts every member.
pub fn emoji_helper(user: &UserFilter, records: &[Record]) -> Vec<EmojiCount> {
    let mut known: HashMap<char, bool> = HashMap::new();
    let mut tally = Tally::new();

    for record in user.iter(records) {
        for c in record.body.chars() {
            if *known.entry(c).or_insert_with(|| is_emoji(c)) {
                tally.add(c);
            }
        }
    }

    tally
        .into_sorted()
        .into_iter()
        .map(|(c, count)| EmojiCount {
            emoji: c.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_transcript;

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('😂'));
        assert!(is_emoji('🎉'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('#'));
        assert!(!is_emoji('é'));
        assert!(!is_emoji('\u{200D}'));
    }

    #[test]
    fn test_counts_descending_ties_first_seen() {
        let chat = "\
1/1/23, 10:00 AM - Alice: haha 😂😂 nice 🎉
1/1/23, 10:01 AM - Bob: 👍 ok 😂
1/1/23, 10:02 AM - Alice: 🎉";
        let records = parse_transcript(chat).unwrap();
        let table = emoji_helper(&UserFilter::overall(), &records);
        assert_eq!(
            table,
            vec![
                EmojiCount { emoji: "😂".into(), count: 3 },
                EmojiCount { emoji: "🎉".into(), count: 2 },
                EmojiCount { emoji: "👍".into(), count: 1 },
            ]
        );

        let bob = emoji_helper(&UserFilter::from("Bob"), &records);
        assert_eq!(bob[0].emoji, "👍");
        assert_eq!(bob.len(), 2);
    }

    #[test]
    fn test_no_emoji() {
        let records = parse_transcript("1/1/23, 10:00 AM - Alice: plain text 123").unwrap();
        assert!(emoji_helper(&UserFilter::overall(), &records).is_empty());
    }
}
