//! Every aggregate for one selection, gathered into a single value.
//!
//! [`ChatReport`] is what the command-line tool prints and what
//! [`report_to_json`](crate::export::report_to_json) serializes.

use std::borrow::Cow;

use serde::Serialize;
use tracing::debug;

use crate::analysis::{
    self, ActivityCount, BusyUsers, DailyCount, EmojiCount, Heatmap, HourCount, LengthSummary,
    MonthlyCount, SentimentCounts, Stats, UserFilter, WordCount,
};
use crate::config::AnalysisConfig;
use crate::record::Record;
use crate::resources::StopWords;

/// Aggregates for one author (or everyone).
#[derive(Debug, Clone, Serialize)]
pub struct ChatReport {
    /// `"Overall"` or the author name
    pub user: String,
    pub stats: Stats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    /// Only computed for the whole chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    /// `None` when no stop-word list was available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_words: Option<Vec<WordCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordcloud: Option<String>,
    pub emojis: Vec<EmojiCount>,
    pub sentiment: SentimentCounts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_length: Option<LengthSummary>,
    pub active_hours: Vec<HourCount>,
    pub active_days: Vec<ActivityCount>,
}

impl ChatReport {
    /// Runs every reducer over `records`.
    ///
    /// Word tables need a stop-word list; without one they are left out.
    pub fn build(
        records: &[Record],
        user: &UserFilter,
        stop_words: Option<&StopWords>,
        config: &AnalysisConfig,
    ) -> Self {
        let label = user.user.clone().unwrap_or_else(|| analysis::OVERALL.to_string());
        debug!(user = %label, records = records.len(), "building report");

        // Whole-chat sections still honour the date bounds.
        let window = user.date_window();
        let in_window: Cow<'_, [Record]> = if window.has_date_filter() {
            Cow::Owned(window.iter(records).cloned().collect())
        } else {
            Cow::Borrowed(records)
        };

        Self {
            stats: analysis::fetch_stats(user, records),
            monthly_timeline: analysis::monthly_timeline(user, records),
            daily_timeline: analysis::daily_timeline(user, records),
            week_activity: analysis::week_activity_map(user, records),
            month_activity: analysis::month_activity_map(user, records),
            heatmap: analysis::activity_heatmap(user, records),
            busy_users: user
                .is_overall()
                .then(|| analysis::most_busy_users_with_limit(&in_window, config.top_users)),
            common_words: stop_words.map(|words| {
                analysis::most_common_words_with_limit(user, records, words, config.top_words)
            }),
            wordcloud: stop_words.map(|words| analysis::create_wordcloud(user, records, words)),
            emojis: analysis::emoji_helper(user, records),
            sentiment: analysis::sentiment_analysis(user, records),
            message_length: analysis::message_length_analysis(user, records),
            active_hours: analysis::active_hours(&in_window),
            active_days: analysis::active_days(&in_window),
            user: label,
        }
    }
}
