//! Configuration types for parsing and analysis.
//!
//! These are plain structs with builder methods, usable from library code
//! without any CLI framework.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, DateOrder, ParserConfig};
//!
//! let parser = ParserConfig::new().with_date_order(DateOrder::DayFirst);
//! let analysis = AnalysisConfig::new().with_top_words(10);
//! assert_eq!(analysis.top_words, 10);
//! assert_eq!(parser.date_order, DateOrder::DayFirst);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the stop-word list, relative to the working directory.
pub const DEFAULT_STOP_WORDS_PATH: &str = "resources/stop_hinglish.txt";

/// How to read ambiguous slash dates such as `03/04/23`.
///
/// `Auto` follows the clock style: 12-hour exports are read month-first,
/// 24-hour exports day-first. Unambiguous dates (`13/04/23`) always fall
/// through to whichever order parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    #[default]
    Auto,
    MonthFirst,
    DayFirst,
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_system_messages(true);
/// assert!(config.skip_system_messages);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Drop system notifications instead of tagging them with the
    /// `group_notification` author (default: false)
    pub skip_system_messages: bool,

    /// Preferred reading of ambiguous slash dates (default: auto)
    pub date_order: DateOrder,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether system notifications are dropped.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }

    /// Sets the preferred date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}

/// Configuration for the aggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path of the whitespace-delimited stop-word list
    pub stop_words_path: PathBuf,

    /// Length of the most-common-words table (default: 20)
    pub top_words: usize,

    /// Length of the busiest-users table (default: 5)
    pub top_users: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
            top_words: 20,
            top_users: 5,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stop-word list location.
    #[must_use]
    pub fn with_stop_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words_path = path.into();
        self
    }

    /// Sets the length of the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the length of the busiest-users table.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }
}
