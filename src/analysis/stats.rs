//! Headline counts: messages, words, media and links.

use serde::{Deserialize, Serialize};

use super::filter::UserFilter;
use super::links::count_urls;
use crate::record::Record;

/// Totals for a selection of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub messages: usize,
    /// Whitespace-delimited tokens across all bodies
    pub words: usize,
    /// Bodies equal to the media placeholder
    pub media: usize,
    /// URLs found across all bodies
    pub links: usize,
}

/// Counts messages, words, media placeholders and links.
pub fn fetch_stats(user: &UserFilter, records: &[Record]) -> Stats {
    user.iter(records).fold(Stats::default(), |mut stats, record| {
        stats.messages += 1;
        stats.words += record.body.split_whitespace().count();
        if record.is_media() {
            stats.media += 1;
        }
        stats.links += count_urls(&record.body);
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_transcript;
    use crate::record::MEDIA_OMITTED;

    const CHAT: &str = "\
1/1/23, 10:00 AM - Alice: Hello there friend
1/1/23, 10:01 AM - Bob: <Media omitted>
1/1/23, 10:02 AM - Alice: look https://example.com and www.rust-lang.org
1/1/23, 10:03 AM - Bob added Carol";

    #[test]
    fn test_overall_stats() {
        let records = parse_transcript(CHAT).unwrap();
        let stats = fetch_stats(&UserFilter::overall(), &records);
        assert_eq!(stats.messages, 4);
        // 3 + 2 + 4 + 3
        assert_eq!(stats.words, 12);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 2);
    }

    #[test]
    fn test_user_stats() {
        let records = parse_transcript(CHAT).unwrap();
        let stats = fetch_stats(&UserFilter::from("Bob"), &records);
        assert_eq!(stats.messages, 1);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 0);
        assert_eq!(records[1].body, MEDIA_OMITTED);
    }

    #[test]
    fn test_empty_selection() {
        let records = parse_transcript(CHAT).unwrap();
        assert_eq!(fetch_stats(&UserFilter::from("Nobody"), &records), Stats::default());
        assert_eq!(fetch_stats(&UserFilter::overall(), &[]), Stats::default());
    }
}
