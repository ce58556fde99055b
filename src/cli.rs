//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ReportFormat`] - how the report is printed
//! - [`LogLevel`] - default verbosity of diagnostics on stderr
//!
//! The conversion helpers ([`Args::parser_config`], [`Args::analysis_config`],
//! [`Args::user_filter`]) turn parsed arguments into library types, so the
//! same settings can be built without going through the binary.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::UserFilter;
use crate::config::{AnalysisConfig, DEFAULT_STOP_WORDS_PATH, DateOrder, ParserConfig};
use crate::error::Result;

/// Analyze a WhatsApp chat export: activity timelines, busiest users,
/// common words, emoji and sentiment.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice
    chatlens chat.txt --format json > report.json
    chatlens chat.txt --records-csv records.csv --after 2024-01-01
    chatlens chat.txt --day-first --stop-words my_stop_words.txt")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Analyze a single author instead of the whole chat
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Whitespace-delimited stop-word list
    #[arg(long, value_name = "PATH", default_value = DEFAULT_STOP_WORDS_PATH)]
    pub stop_words: PathBuf,

    /// Also write the parsed records to this CSV file
    #[arg(long, value_name = "PATH")]
    pub records_csv: Option<PathBuf>,

    /// Number of entries in the common words table
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of entries in the busiest users table
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Only analyze messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only analyze messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Read ambiguous slash dates as day/month
    #[arg(long, conflicts_with = "month_first")]
    pub day_first: bool,

    /// Read ambiguous slash dates as month/day
    #[arg(long)]
    pub month_first: bool,

    /// Drop system notifications (joins, leaves, setting changes)
    #[arg(long)]
    pub skip_system: bool,

    /// Log level for diagnostics on stderr (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Args {
    /// Date order selected by `--day-first` / `--month-first`.
    pub fn date_order(&self) -> DateOrder {
        if self.day_first {
            DateOrder::DayFirst
        } else if self.month_first {
            DateOrder::MonthFirst
        } else {
            DateOrder::Auto
        }
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_date_order(self.date_order())
            .with_skip_system_messages(self.skip_system)
    }

    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig::new()
            .with_stop_words_path(self.stop_words.clone())
            .with_top_words(self.top_words)
            .with_top_users(self.top_users)
    }

    /// Builds the record selection from `--user`, `--after` and `--before`.
    pub fn user_filter(&self) -> Result<UserFilter> {
        let mut filter = UserFilter::user(self.user.clone());
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }
}

/// How the report is printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable sections
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Log level options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings, and informational messages.
    Info,
    /// All of the above plus debug messages.
    Debug,
    /// All messages including trace-level details.
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter level.
    pub fn to_filter_string(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
