//! Integration tests for chatlens.
//!
//! These tests run the full pipeline (tokenize, parse, index, reduce) on
//! realistic transcripts and check the relationships between reducers.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration
//! ```

use std::path::PathBuf;

use chatlens::analysis::{
    UserFilter, activity_heatmap, create_wordcloud, daily_timeline, fetch_stats, most_busy_users,
    most_common_words, monthly_timeline, sentiment_analysis, user_list, week_activity_map,
};
use chatlens::config::{DateOrder, ParserConfig};
use chatlens::parser::TranscriptParser;
use chatlens::record::{GROUP_NOTIFICATION, MEDIA_OMITTED};
use chatlens::resources::StopWords;
use chatlens::temporal::index_records;
use chatlens::tokenizer::tokenize;
use chatlens::{parse_file, parse_transcript};

use regex::Regex;

// ============================================================================
// Fixtures
// ============================================================================

const GROUP_CHAT: &str = "\
12/1/23, 9:15 AM - Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
12/1/23, 9:15 AM - Alice created group \"Weekend plans\"
12/1/23, 9:16 AM - Alice added Bob
12/1/23, 9:17 AM - Alice: Hello there
how are you?
12/1/23, 9:20 AM - Bob: I am good, thanks! 😀
12/1/23, 9:21 AM - Bob: <Media omitted>
12/2/23, 6:45 PM - Alice: check https://example.com/plan for the plan
12/2/23, 6:46 PM - Bob: this is a terrible idea 😂😂
12/2/23, 6:47 PM - Alice: haha ok fine
we can talk later
1/5/24, 11:30 PM - Bob: happy new year everyone 🎉
1/5/24, 11:31 PM - Alice: happy new year!!
1/6/24, 12:02 AM - Bob left";

fn bundled_stop_words() -> StopWords {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/stop_hinglish.txt");
    StopWords::load(path).expect("bundled stop words")
}

fn independent_header_count(text: &str) -> usize {
    let header = Regex::new(r"^\d{1,2}/\d{1,2}/\d{2}, \d{1,2}:\d{2} [AP]M - ").unwrap();
    text.lines().filter(|line| header.is_match(line)).count()
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_record_count_matches_header_count() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    assert_eq!(records.len(), independent_header_count(GROUP_CHAT));
    assert_eq!(records.len(), tokenize(GROUP_CHAT).unwrap().count());
}

#[test]
fn test_multiline_message() {
    let records = parse_transcript("12/1/23, 9:15 AM - Alice: Hello there\nhow are you?").unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.author, "Alice");
    assert_eq!(record.body, "Hello there\nhow are you?");
    assert_eq!(record.calendar.year, 2023);
    assert_eq!(record.calendar.month_num, 12);
}

#[test]
fn test_group_notification() {
    let records = parse_transcript("1/1/23, 10:00 AM - Bob added Carol").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].author, GROUP_NOTIFICATION);
}

#[test]
fn test_notifications_in_group_chat() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    let notifications: Vec<_> = records.iter().filter(|r| r.is_notification()).collect();
    // encryption notice, created group, added, left
    assert_eq!(notifications.len(), 4);
    assert!(notifications.iter().any(|r| r.body == "Bob left"));
}

#[test]
fn test_skip_system_messages() {
    let parser = TranscriptParser::with_config(ParserConfig::new().with_skip_system_messages(true));
    let records = parser.parse_str(GROUP_CHAT).unwrap();
    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|r| !r.is_notification()));
}

#[test]
fn test_day_first_export() {
    let chat = "\
03/04/2023, 14:05 - Alice: fourth of april
13/04/2023, 09:00 - Bob: thirteenth";
    let records = parse_transcript(chat).unwrap();
    assert_eq!(records[0].calendar.month_name, "April");
    assert_eq!(records[0].calendar.day, 3);
    assert_eq!(records[1].calendar.day, 13);

    let month_first = TranscriptParser::with_config(ParserConfig::new().with_date_order(DateOrder::MonthFirst));
    let records = month_first.parse_str(chat).unwrap();
    assert_eq!(records[0].calendar.month_name, "March");
    assert_eq!(records[1].calendar.month_name, "April");
}

#[test]
fn test_malformed_document() {
    let err = parse_transcript("this is not an export\n12/1/23, 9:15 AM - Alice: hi").unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_parse_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    std::fs::write(&path, GROUP_CHAT).unwrap();
    let records = parse_file(&path).unwrap();
    assert_eq!(records, parse_transcript(GROUP_CHAT).unwrap());
}

#[test]
fn test_reindexing_is_idempotent() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    let mut again = records.clone();
    index_records(&mut again);
    index_records(&mut again);
    assert_eq!(records, again);
}

// ============================================================================
// Reducer relationships
// ============================================================================

#[test]
fn test_overall_stats_count_every_record() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    let stats = fetch_stats(&UserFilter::overall(), &records);
    assert_eq!(stats.messages, records.len());
    assert_eq!(stats.media, 1);
    assert_eq!(stats.links, 1);
}

#[test]
fn test_timelines_sum_to_message_count() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    for user in user_list(&records) {
        let filter = UserFilter::from(user.as_str());
        let messages = fetch_stats(&filter, &records).messages;
        let monthly: usize = monthly_timeline(&filter, &records).iter().map(|m| m.messages).sum();
        let daily: usize = daily_timeline(&filter, &records).iter().map(|d| d.messages).sum();
        assert_eq!(monthly, messages, "monthly for {user}");
        assert_eq!(daily, messages, "daily for {user}");
    }
}

#[test]
fn test_monthly_labels() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    let labels: Vec<String> = monthly_timeline(&UserFilter::overall(), &records)
        .into_iter()
        .map(|m| m.label)
        .collect();
    assert_eq!(labels, vec!["December-2023", "January-2024"]);
}

#[test]
fn test_sentiment_covers_selection() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    for user in ["Overall", "Alice", "Bob", "Nobody"] {
        let filter = UserFilter::from(user);
        let counts = sentiment_analysis(&filter, &records);
        assert_eq!(counts.total(), fetch_stats(&filter, &records).messages);

        let json = serde_json::to_value(counts).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 3);
    }
}

#[test]
fn test_common_words_exclude_stop_words_and_media() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    let stop_words = bundled_stop_words();
    let words = most_common_words(&UserFilter::overall(), &records, &stop_words);
    assert!(!words.is_empty());
    for entry in &words {
        assert!(!stop_words.contains(&entry.word), "{} is a stop word", entry.word);
        assert!(!MEDIA_OMITTED.to_lowercase().contains(&entry.word), "{} is from media", entry.word);
    }
    assert_eq!(words[0].word, "happy");
    assert_eq!(words[0].frequency, 2);

    let cloud = create_wordcloud(&UserFilter::overall(), &records, &stop_words);
    assert!(!cloud.contains("<media"));
    assert!(!cloud.contains("omitted>"));
    assert!(!cloud.contains("added"));
}

#[test]
fn test_heatmap_matches_week_activity() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    for user in user_list(&records) {
        let filter = UserFilter::from(user.as_str());
        let week: usize = week_activity_map(&filter, &records).iter().map(|a| a.messages).sum();
        assert_eq!(activity_heatmap(&filter, &records).total(), week);
    }
}

#[test]
fn test_busy_users() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    let busy = most_busy_users(&records);
    // three-way tie at 4, kept in first-seen order
    let names: Vec<&str> = busy.top.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec![GROUP_NOTIFICATION, "Alice", "Bob"]);
    assert!(busy.top.iter().all(|u| u.messages == 4));
    assert_eq!(busy.shares[1].percent, 33.33);
    let percent: f64 = busy.shares.iter().map(|s| s.percent).sum();
    assert!((percent - 100.0).abs() < 0.05);
}

#[test]
fn test_date_filter_narrows_every_reducer() {
    let records = parse_transcript(GROUP_CHAT).unwrap();
    let filter = UserFilter::overall().with_date_from("2024-01-01").unwrap();
    assert_eq!(fetch_stats(&filter, &records).messages, 3);
    assert_eq!(monthly_timeline(&filter, &records).len(), 1);
}
