//! URL extraction for link counting.
//!
//! Finds scheme URLs (`http`, `https`, `ftp`), `www.` hosts and bare domains
//! ending in a common top-level domain. Trailing sentence punctuation is not
//! part of a URL.

use std::sync::LazyLock;

use regex::Regex;

const URL_PATTERN: &str = concat!(
    r"(?i)\b(?:",
    r"(?:https?|ftp)://[^\s<>]+",
    r"|www\.[^\s<>]+",
    r"|[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)*",
    r"\.(?:com|org|net|edu|gov|io|in|co|uk|me|ly|gl|be|app|dev|info|biz|us|ai|tv)\b(?:/[^\s<>]*)?",
    r")",
);

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("URL pattern is a valid regex"));

/// Returns every URL found in the text, in order.
pub fn find_urls(text: &str) -> Vec<&str> {
    URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', '!', '?', ';', ':', ')', '"', '\'']))
        .filter(|url| !url.is_empty())
        .collect()
}

/// Counts the URLs in the text.
pub fn count_urls(text: &str) -> usize {
    find_urls(text).len()
}
