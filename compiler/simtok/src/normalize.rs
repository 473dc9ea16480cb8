//! Literal normalization.
//!
//! Applied to string and char literal tokens before they are emitted.
//! Long string constants are usually data rather than structure, so they
//! collapse to the canonical empty literal `""`. Everything else keeps its
//! text, with raw tab, newline and carriage-return characters spelled as
//! two-character escapes so that a token never spans lines.

use std::borrow::Cow;

/// The canonical collapsed string literal.
pub const EMPTY_STRING_LITERAL: &str = "\"\"";

/// Default collapse threshold, in characters, quotes included.
pub const DEFAULT_MAX_STRING_LITERAL_LEN: usize = 15;

/// Normalize one literal token.
///
/// A string literal (leading `"`) of at least `max_len` characters becomes
/// [`EMPTY_STRING_LITERAL`]. Any other text only has its control
/// characters escaped; text without them is returned borrowed.
pub fn normalize_literal(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.starts_with('"') && text.chars().count() >= max_len {
        return Cow::Borrowed(EMPTY_STRING_LITERAL);
    }
    escape_control_chars(text)
}

/// Replace raw `\n`, `\r` and `\t` with `\\n`, `\\r` and `\\t`.
pub fn escape_control_chars(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r', '\t']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
