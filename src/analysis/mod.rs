//! Aggregations over parsed records.
//!
//! Every reducer is a plain function of a [`UserFilter`] and a record slice.
//! An empty selection gives zero or empty results, never an error.
//!
//! | Reducer | Result |
//! |---------|--------|
//! | [`fetch_stats`] | message, word, media and link totals |
//! | [`monthly_timeline`] / [`daily_timeline`] | chronological counts |
//! | [`week_activity_map`] / [`month_activity_map`] | counts per weekday / month name |
//! | [`activity_heatmap`] | weekday × hour grid |
//! | [`emoji_helper`] | emoji frequency |
//! | [`most_common_words`] / [`create_wordcloud`] | word frequency and cloud text |
//! | [`most_busy_users`] | top authors and their shares |
//! | [`sentiment_analysis`] | positive / neutral / negative counts |
//! | [`message_length_analysis`] | average, longest and shortest body |
//!
//! # Example
//!
//! ```
//! use chatlens::analysis::{fetch_stats, sentiment_analysis, UserFilter};
//! use chatlens::parse_transcript;
//!
//! let records = parse_transcript("1/1/23, 10:00 AM - Alice: great to see you\n1/1/23, 10:01 AM - Bob: <Media omitted>")?;
//! let stats = fetch_stats(&UserFilter::overall(), &records);
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.media, 1);
//!
//! let mood = sentiment_analysis(&UserFilter::from("Alice"), &records);
//! assert_eq!(mood.positive, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

mod activity;
mod emoji;
mod filter;
mod length;
pub mod links;
mod sentiment;
mod stats;
mod tally;
mod timeline;
mod users;
mod words;

pub use activity::{
    ActivityCount, Heatmap, HourCount, active_days, active_hours, activity_heatmap, month_activity_map,
    week_activity_map,
};
pub use emoji::{EmojiCount, emoji_helper, is_emoji};
pub use filter::{OVERALL, UserFilter};
pub use length::{LengthSummary, message_length_analysis};
pub use sentiment::{
    LexiconScorer, PolarityScorer, Sentiment, SentimentCounts, classify, sentiment_analysis,
    sentiment_analysis_with,
};
pub use stats::{Stats, fetch_stats};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{
    BusyUsers, DEFAULT_TOP_USERS, UserCount, UserShare, most_busy_users, most_busy_users_with_limit,
    user_list,
};
pub use words::{
    DEFAULT_TOP_WORDS, WordCount, create_wordcloud, most_common_words, most_common_words_with_limit,
};
