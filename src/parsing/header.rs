//! Message header patterns.
//!
//! WhatsApp exports vary by locale and platform. Each [`HeaderPattern`]
//! recognises one layout of the timestamp prefix and knows which chrono
//! formats can read it. Patterns are tried in [`HeaderPattern::ALL`] order;
//! adding a locale means adding a variant, not touching the parser.
//!
//! Supported layouts:
//! - `12/1/23, 9:15 AM - Sender: Message`
//! - `15/01/2024, 10:30 - Sender: Message`
//! - `26.10.2025, 20:40 - Sender: Message`
//! - `[1/15/24, 10:30:45 AM] Sender: Message`
//! - `[15.01.24, 10:30:45] Sender: Message`

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::config::DateOrder;

/// A recognised timestamp prefix layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderPattern {
    /// `12/1/23, 9:15 AM - ...` (Android, 12-hour clock)
    DashTwelveHour,
    /// `15/01/2024, 10:30 - ...` (Android, 24-hour clock)
    DashTwentyFourHour,
    /// `26.10.2025, 20:40 - ...` (Android, dotted date)
    DashDotted,
    /// `[1/15/24, 10:30:45 AM] ...` (iOS, 12-hour clock)
    BracketedTwelveHour,
    /// `[15.01.24, 10:30:45] ...` or `[15/01/2024, 10:30:45] ...` (iOS, 24-hour clock)
    BracketedTwentyFourHour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clock {
    TwelveHour,
    TwentyFourHour,
}

const SLASH_MONTH_FIRST: [&str; 2] = ["%m/%d/%y", "%m/%d/%Y"];
const SLASH_DAY_FIRST: [&str; 2] = ["%d/%m/%y", "%d/%m/%Y"];
const DOTTED: [&str; 2] = ["%d.%m.%y", "%d.%m.%Y"];
const TWELVE_HOUR: [&str; 2] = ["%I:%M:%S %p", "%I:%M %p"];
const TWENTY_FOUR_HOUR: [&str; 2] = ["%H:%M:%S", "%H:%M"];

static HEADER_REGEXES: LazyLock<Vec<(HeaderPattern, Regex)>> = LazyLock::new(|| {
    HeaderPattern::ALL
        .iter()
        .map(|&p| {
            let regex = Regex::new(p.pattern()).expect("header pattern is a valid regex");
            (p, regex)
        })
        .collect()
});

impl HeaderPattern {
    /// All patterns, in priority order.
    pub const ALL: [HeaderPattern; 5] = [
        HeaderPattern::DashTwelveHour,
        HeaderPattern::DashTwentyFourHour,
        HeaderPattern::DashDotted,
        HeaderPattern::BracketedTwelveHour,
        HeaderPattern::BracketedTwentyFourHour,
    ];

    /// Returns the regex source for this layout.
    ///
    /// Captures: 1 = date, 2 = time, 3 = the rest of the line.
    pub fn pattern(self) -> &'static str {
        match self {
            HeaderPattern::DashTwelveHour => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?\s?[APap]\.?\s?[Mm]\.?)\s[-–]\s(.*)$"
            }
            HeaderPattern::DashTwentyFourHour => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?)\s[-–]\s(.*)$"
            }
            HeaderPattern::DashDotted => {
                r"^(\d{1,2}\.\d{1,2}\.\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?)\s[-–]\s(.*)$"
            }
            HeaderPattern::BracketedTwelveHour => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?\s?[APap]\.?\s?[Mm]\.?)\]\s(.*)$"
            }
            HeaderPattern::BracketedTwentyFourHour => {
                r"^\[(\d{1,2}[./]\d{1,2}[./]\d{2,4}),?\s(\d{1,2}:\d{2}(?::\d{2})?)\]\s(.*)$"
            }
        }
    }

    fn clock(self) -> Clock {
        match self {
            HeaderPattern::DashTwelveHour | HeaderPattern::BracketedTwelveHour => Clock::TwelveHour,
            _ => Clock::TwentyFourHour,
        }
    }

    /// Returns the chrono formats for a captured `"{date}, {time}"` string,
    /// in the order they are tried.
    pub fn timestamp_formats(self, date: &str, order: DateOrder) -> Vec<String> {
        let clock = self.clock();
        let date_formats: Vec<&str> = if date.contains('.') {
            DOTTED.to_vec()
        } else {
            let month_first = match order {
                DateOrder::MonthFirst => true,
                DateOrder::DayFirst => false,
                DateOrder::Auto => clock == Clock::TwelveHour,
            };
            if month_first {
                SLASH_MONTH_FIRST.iter().chain(&SLASH_DAY_FIRST).copied().collect()
            } else {
                SLASH_DAY_FIRST.iter().chain(&SLASH_MONTH_FIRST).copied().collect()
            }
        };
        let time_formats = match clock {
            Clock::TwelveHour => TWELVE_HOUR,
            Clock::TwentyFourHour => TWENTY_FOUR_HOUR,
        };

        date_formats
            .iter()
            .flat_map(|d| time_formats.iter().map(move |t| format!("{d}, {t}")))
            .collect()
    }

    /// Parses a captured date and time; the first format that fully matches wins.
    pub fn parse_timestamp(self, date: &str, time: &str, order: DateOrder) -> Option<NaiveDateTime> {
        let datetime = format!("{date}, {}", normalize_time(time));

        self.timestamp_formats(date, order)
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&datetime, format).ok())
    }
}

/// Rewrites exporter quirks in the time part: narrow no-break spaces before
/// the meridiem and dotted `a.m.`/`p.m.` markers.
fn normalize_time(time: &str) -> String {
    let spaced: String = time
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| *c != '.')
        .collect();

    // "9:15AM" -> "9:15 AM", "9:15 a m" -> "9:15 AM"
    let upper = spaced.to_uppercase();
    match upper.find(['A', 'P']) {
        Some(idx) => {
            let (clock, meridiem) = upper.split_at(idx);
            let meridiem: String = meridiem.chars().filter(|c| !c.is_whitespace()).collect();
            format!("{} {}", clock.trim_end(), meridiem)
        }
        None => upper,
    }
}

/// A line whose prefix matched one of the header patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    pub pattern: HeaderPattern,
    pub date: &'a str,
    pub time: &'a str,
    /// Text after the separator: `Author: body` or a notification.
    pub rest: &'a str,
}

/// Tries every pattern in priority order against a line.
pub fn match_header(line: &str) -> Option<HeaderMatch<'_>> {
    HEADER_REGEXES.iter().find_map(|(pattern, regex)| {
        let caps = regex.captures(line)?;
        Some(HeaderMatch {
            pattern: *pattern,
            date: caps.get(1)?.as_str(),
            time: caps.get(2)?.as_str(),
            rest: caps.get(3).map_or("", |m| m.as_str()),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_match_android_twelve_hour() {
        let m = match_header("12/1/23, 9:15 AM - Alice: Hello there").unwrap();
        assert_eq!(m.pattern, HeaderPattern::DashTwelveHour);
        assert_eq!(m.date, "12/1/23");
        assert_eq!(m.time, "9:15 AM");
        assert_eq!(m.rest, "Alice: Hello there");
    }

    #[test]
    fn test_match_android_twenty_four_hour() {
        let m = match_header("15/01/2024, 10:30 - Bob: Hi").unwrap();
        assert_eq!(m.pattern, HeaderPattern::DashTwentyFourHour);
        assert_eq!(m.rest, "Bob: Hi");
    }

    #[test]
    fn test_match_dotted() {
        let m = match_header("26.10.2025, 20:40 - Муха: Добрый вечер").unwrap();
        assert_eq!(m.pattern, HeaderPattern::DashDotted);
        assert_eq!(m.rest, "Муха: Добрый вечер");
    }

    #[test]
    fn test_match_bracketed() {
        let m = match_header("[1/15/24, 10:30:45 AM] Alice: Hello").unwrap();
        assert_eq!(m.pattern, HeaderPattern::BracketedTwelveHour);
        let m = match_header("[15.01.24, 10:30:45] Alice: Hello").unwrap();
        assert_eq!(m.pattern, HeaderPattern::BracketedTwentyFourHour);
    }

    #[test]
    fn test_no_match_for_plain_text() {
        assert!(match_header("how are you?").is_none());
        assert!(match_header("12/1/23 was a good day").is_none());
        assert!(match_header("").is_none());
    }

    #[test]
    fn test_parse_twelve_hour_month_first() {
        let ts = HeaderPattern::DashTwelveHour
            .parse_timestamp("12/1/23", "9:15 PM", DateOrder::Auto)
            .unwrap();
        assert_eq!(ts.year(), 2023);
        assert_eq!(ts.month(), 12);
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.hour(), 21);
    }

    #[test]
    fn test_parse_twenty_four_hour_day_first() {
        let ts = HeaderPattern::DashTwentyFourHour
            .parse_timestamp("03/04/2024", "10:30", DateOrder::Auto)
            .unwrap();
        assert_eq!(ts.month(), 4);
        assert_eq!(ts.day(), 3);
    }

    #[test]
    fn test_date_order_override() {
        let ts = HeaderPattern::DashTwentyFourHour
            .parse_timestamp("03/04/2024", "10:30", DateOrder::MonthFirst)
            .unwrap();
        assert_eq!(ts.month(), 3);
        assert_eq!(ts.day(), 4);
    }

    #[test]
    fn test_unambiguous_date_falls_through() {
        let ts = HeaderPattern::DashTwelveHour
            .parse_timestamp("25/12/23", "8:00 AM", DateOrder::Auto)
            .unwrap();
        assert_eq!(ts.month(), 12);
        assert_eq!(ts.day(), 25);
    }

    #[test]
    fn test_four_digit_year_and_seconds() {
        let ts = HeaderPattern::BracketedTwelveHour
            .parse_timestamp("1/15/2024", "10:30:45 AM", DateOrder::Auto)
            .unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.second(), 45);
    }

    #[test]
    fn test_narrow_space_and_dotted_meridiem() {
        let ts = HeaderPattern::DashTwelveHour
            .parse_timestamp("1/1/23", "10:00\u{202f}p.m.", DateOrder::Auto)
            .unwrap();
        assert_eq!(ts.hour(), 22);
    }

    #[test]
    fn test_impossible_date_fails() {
        assert!(HeaderPattern::DashTwelveHour
            .parse_timestamp("13/45/23", "9:15 AM", DateOrder::Auto)
            .is_none());
        assert!(HeaderPattern::DashTwentyFourHour
            .parse_timestamp("15/01/2024", "25:99", DateOrder::Auto)
            .is_none());
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("9:15AM"), "9:15 AM");
        assert_eq!(normalize_time("9:15 pm"), "9:15 PM");
        assert_eq!(normalize_time("20:40"), "20:40");
    }
}
