//! Token kind predicates over finished token text.
//!
//! These answer "what is this token?" for consumers that mask or weight
//! token kinds during comparison. They operate on text alone, so they work
//! equally on tokens produced by the lexer and on strings from elsewhere.
//!
//! Numeral predicates are more permissive than the scanner: digit groups
//! separated by single underscores are accepted, matching numerals written
//! for newer language levels.

use std::fmt;

use crate::keywords::is_keyword;

/// Coarse token category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Numeral,
    StringLiteral,
    CharLiteral,
    /// Operators, separators and anything else.
    Operator,
}

impl TokenKind {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::Numeral => "numeral",
            Self::StringLiteral => "string literal",
            Self::CharLiteral => "char literal",
            Self::Operator => "operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric literal sub-form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumeralForm {
    /// `0x1F`, `0xFF_FFL`
    Hexadecimal,
    /// `0b1010L`
    Binary,
    /// `42`, `1_000`, `7L`, `2f`
    Integer,
    Float(FloatSpelling),
}

/// The four ways to spell a floating-point literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatSpelling {
    /// `1.5`, `1.5e3`
    Fraction,
    /// `1.`, `1.e3`
    TrailingDot,
    /// `.5`, `.5e3`
    LeadingDot,
    /// `1e3`
    Exponent,
}

/// Categorize `text`.
///
/// Checked in order keyword, identifier, numeral, string literal, char
/// literal; everything else is an operator.
pub fn classify(text: &str) -> TokenKind {
    if is_keyword(text) {
        TokenKind::Keyword
    } else if is_identifier(text) {
        TokenKind::Identifier
    } else if is_numeral(text) {
        TokenKind::Numeral
    } else if is_string_literal(text) {
        TokenKind::StringLiteral
    } else if is_char_literal(text) {
        TokenKind::CharLiteral
    } else {
        TokenKind::Operator
    }
}

// ─── Identifiers ───────────────────────────────────────────────────

/// Returns `true` for a non-keyword identifier.
///
/// ASCII letters, `_` and `$` start an identifier; digits may follow.
/// Non-ASCII letters are accepted as the scanner accepts them.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_ident_start(first) && chars.all(is_ident_continue) && !is_keyword(text)
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$' || (!c.is_ascii() && c.is_alphabetic())
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || (!c.is_ascii() && c.is_alphanumeric())
}

// ─── Numerals ──────────────────────────────────────────────────────

/// Returns `true` if `text` is a numeric literal in any form.
pub fn is_numeral(text: &str) -> bool {
    numeral_form(text).is_some()
}

/// Determine which numeric literal form `text` spells, if any.
pub fn numeral_form(text: &str) -> Option<NumeralForm> {
    let bytes = text.as_bytes();

    if let Some(digits) = strip_radix_prefix(bytes, b'x') {
        let len = digit_groups(digits, |b| b.is_ascii_hexdigit());
        return (len > 0 && is_suffix(&digits[len..], b"lLfFdD")).then_some(NumeralForm::Hexadecimal);
    }

    if let Some(digits) = strip_radix_prefix(bytes, b'b') {
        let len = digit_groups(digits, |b| b == b'0' || b == b'1');
        if len > 0 && is_suffix(&digits[len..], b"lL") {
            return Some(NumeralForm::Binary);
        }
    }

    let len = digit_groups(bytes, |b| b.is_ascii_digit());
    if len > 0 && is_suffix(&bytes[len..], b"lLfFdD") {
        return Some(NumeralForm::Integer);
    }

    float_spelling(bytes).map(NumeralForm::Float)
}

/// `0x...` / `0X...` (or `0b` / `0B`) with the prefix removed.
fn strip_radix_prefix(bytes: &[u8], radix: u8) -> Option<&[u8]> {
    match bytes {
        [b'0', r, rest @ ..] if r.to_ascii_lowercase() == radix => Some(rest),
        _ => None,
    }
}

/// Length of the longest prefix of the form `(d+_)*d+`, or 0.
fn digit_groups(bytes: &[u8], is_digit: impl Fn(u8) -> bool) -> usize {
    let run = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|&&b| is_digit(b))
            .count()
    };

    let mut len = run(0);
    if len == 0 {
        return 0;
    }
    while bytes.get(len) == Some(&b'_') {
        let next = run(len + 1);
        if next == 0 {
            break;
        }
        len += 1 + next;
    }
    len
}

/// Empty, or exactly one byte drawn from `allowed`.
fn is_suffix(rest: &[u8], allowed: &[u8]) -> bool {
    match rest {
        [] => true,
        [b] => allowed.contains(b),
        _ => false,
    }
}

fn decimal_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length of an optional `[eE][-+]?[0-9]+` exponent.
///
/// `Some(0)` when there is no exponent marker, `None` when a marker is not
/// followed by digits.
fn exponent_len(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [b'e' | b'E', b'+' | b'-', rest @ ..] => {
            let digits = decimal_digits(rest);
            (digits > 0).then_some(2 + digits)
        }
        [b'e' | b'E', rest @ ..] => {
            let digits = decimal_digits(rest);
            (digits > 0).then_some(1 + digits)
        }
        _ => Some(0),
    }
}

fn float_spelling(bytes: &[u8]) -> Option<FloatSpelling> {
    let int_len = decimal_digits(bytes);
    let rest = &bytes[int_len..];

    let (spelling, tail) = if let [b'.', frac @ ..] = rest {
        let frac_len = decimal_digits(frac);
        let spelling = match (int_len > 0, frac_len > 0) {
            (true, true) => FloatSpelling::Fraction,
            (true, false) => FloatSpelling::TrailingDot,
            (false, true) => FloatSpelling::LeadingDot,
            (false, false) => return None,
        };
        (spelling, &frac[frac_len..])
    } else if int_len > 0 {
        (FloatSpelling::Exponent, rest)
    } else {
        return None;
    };

    let exp_len = exponent_len(tail)?;
    // Without a dot the exponent is what makes it a float.
    if spelling == FloatSpelling::Exponent && exp_len == 0 {
        return None;
    }
    is_suffix(&tail[exp_len..], b"fFdD").then_some(spelling)
}

// ─── Literals ──────────────────────────────────────────────────────

/// Returns `true` for a double-quoted string literal on a single line.
///
/// The empty literal `""` qualifies; it is the marker that oversized
/// literals collapse to.
pub fn is_string_literal(text: &str) -> bool {
    is_quoted(text, '"', 2)
}

/// Returns `true` for a single-quoted literal with at least one character
/// between the quotes.
pub fn is_char_literal(text: &str) -> bool {
    is_quoted(text, '\'', 3)
}

fn is_quoted(text: &str, quote: char, min_len: usize) -> bool {
    text.len() >= min_len
        && text.starts_with(quote)
        && text.ends_with(quote)
        && !text.contains(['\n', '\r'])
}
