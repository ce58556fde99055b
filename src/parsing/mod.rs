//! Line-level parsing utilities shared by the tokenizer and the record parser.

pub mod header;
pub mod media;
pub mod notification;

pub use header::{HeaderMatch, HeaderPattern, match_header};
pub use media::{is_media_placeholder, normalize_body};
pub use notification::is_notification;

/// Splits `Author: body` on the first `": "`.
///
/// Returns `None` when there is no separator or the author part is blank.
pub fn split_author(text: &str) -> Option<(&str, &str)> {
    let (author, body) = text.split_once(": ")?;
    let author = author.trim();
    if author.is_empty() {
        return None;
    }
    Some((author, body))
}

/// Recognises a full message header: a timestamp prefix followed by either
/// an author or a notification phrase.
pub fn recognize_header(line: &str) -> Option<HeaderMatch<'_>> {
    match_header(line).filter(|h| is_notification(h.rest) || split_author(h.rest).is_some())
}

/// Strips the byte-order mark and direction marks that some exports put at
/// the start of header lines.
pub fn strip_line_marks(line: &str) -> &str {
    line.trim_start_matches(['\u{feff}', '\u{200e}', '\u{200f}'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_author() {
        assert_eq!(split_author("Alice: Hello"), Some(("Alice", "Hello")));
        assert_eq!(split_author("Alice: time: 5pm"), Some(("Alice", "time: 5pm")));
        assert_eq!(split_author("+91 98765 43210: hi"), Some(("+91 98765 43210", "hi")));
        assert_eq!(split_author("no separator"), None);
        assert_eq!(split_author(" : empty author"), None);
    }

    #[test]
    fn test_recognize_header() {
        assert!(recognize_header("12/1/23, 9:15 AM - Alice: Hello there").is_some());
        assert!(recognize_header("1/1/23, 10:00 AM - Bob added Carol").is_some());
        // timestamp prefix but neither author nor known notification
        assert!(recognize_header("1/1/23, 10:00 AM - something odd").is_none());
        assert!(recognize_header("how are you?").is_none());
    }

    #[test]
    fn test_strip_line_marks() {
        assert_eq!(strip_line_marks("\u{feff}12/1/23"), "12/1/23");
        assert_eq!(strip_line_marks("\u{200e}[1/1/23"), "[1/1/23");
        assert_eq!(strip_line_marks("plain"), "plain");
    }
}
