//! Numeral rewriting ahead of scanning.
//!
//! The scanner accepts Java 5 numerals only. Two newer spellings are
//! reduced to something it can scan by deleting one character:
//!
//! - a digit-group separator between two digits (`1_000` → `1000`)
//! - a binary prefix followed by a binary digit (`0b101` → `0101`)
//!
//! Each match is three characters wide; the middle one is dropped and the
//! outer two are kept. Matches are found left to right without overlap,
//! so the search resumes after the third character of a match. A numeral
//! with several separators in a row (`1_0_0`) therefore keeps some of
//! them. Line terminators are never removed, so line numbers computed on
//! the rewritten text match the original.
//!
//! The rewritten numeral's value is not meaningful (`0b101` becomes the
//! octal-looking `0101`); only its token boundaries are.

use std::borrow::Cow;

/// Rewrite digit-group separators and binary prefixes.
///
/// Returns the input unchanged (borrowed) when nothing matched.
pub fn rewrite_numerals(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut out = String::new();
    // Start of the not-yet-copied tail of `text`.
    let mut copied = 0;
    let mut i = 0;

    while i + 2 < bytes.len() {
        if is_match(bytes[i], bytes[i + 1], bytes[i + 2]) {
            // All three bytes are ASCII, so `i + 1` and `i + 2` are char
            // boundaries.
            out.push_str(&text[copied..=i]);
            copied = i + 2;
            i += 3;
        } else {
            i += 1;
        }
    }

    if copied == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// `[0-9]_[0-9]` or `0b[01]`.
#[inline]
fn is_match(a: u8, b: u8, c: u8) -> bool {
    match (a, b) {
        (b'0'..=b'9', b'_') => c.is_ascii_digit(),
        (b'0', b'b') => c == b'0' || c == b'1',
        _ => false,
    }
}
