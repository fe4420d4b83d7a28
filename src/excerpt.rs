//! Listing-page previews of post bodies.

/// Marker appended to a shortened excerpt.
pub const ELLIPSIS: &str = "...";

/// Default excerpt length, in characters, for the post listing.
pub const DEFAULT_EXCERPT_LENGTH: usize = 200;

/// Shorten `text` to at most `max_chars` characters for display.
///
/// Surrounding whitespace is trimmed first. Text that still fits is returned
/// as is; otherwise the first `max_chars` characters are cut back to the last
/// whitespace so no word is split, and [`ELLIPSIS`] is appended. When the
/// prefix contains no whitespace at all the full prefix is kept.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();

    // Byte offset just past the first `max_chars` characters.
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };

    let prefix = &text[..cut];
    let shortened = match prefix.rfind(char::is_whitespace) {
        Some(idx) => prefix[..idx].trim_end(),
        None => prefix,
    };

    let mut out = String::with_capacity(shortened.len() + ELLIPSIS.len());
    out.push_str(shortened);
    out.push_str(ELLIPSIS);
    out
}
