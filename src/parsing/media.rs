//! Message body normalization.

use crate::record::MEDIA_OMITTED;

/// Placeholders written by exporters in place of attachments, lowercased.
const MEDIA_PLACEHOLDERS: &[&str] = &[
    "<media omitted>",
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "gif omitted",
    "document omitted",
    "<без медиафайлов>",
    "<medien ausgeschlossen>",
    "<multimedia omitido>",
    "<média omis>",
    "<media weggelaten>",
    "<mídia oculta>",
    "<media omessi>",
];

const ATTACHED_PREFIX: &str = "<attached:";

/// Trims whitespace and the direction marks exporters sprinkle around placeholders.
fn strip_marks(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || matches!(c, '\u{200e}' | '\u{200f}' | '\u{feff}'))
}

/// Returns `true` if the text is an attachment placeholder in any known locale.
pub fn is_media_placeholder(text: &str) -> bool {
    let lower = strip_marks(text).to_lowercase();
    MEDIA_PLACEHOLDERS.contains(&lower.as_str())
        || (lower.starts_with(ATTACHED_PREFIX) && lower.ends_with('>'))
}

/// Normalizes a raw body: drops trailing line breaks and collapses any media
/// placeholder to [`MEDIA_OMITTED`].
pub fn normalize_body(raw: &str) -> String {
    if is_media_placeholder(raw) {
        return MEDIA_OMITTED.to_string();
    }
    raw.trim_end_matches(['\n', '\r']).to_string()
}
