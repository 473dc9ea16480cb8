//! Recovered lexical errors.
//!
//! Lexing never fails. A span the scanner cannot classify is skipped and
//! recorded here so consumers can report it; recorded errors have no
//! effect on the token stream.

use simtok_core::RawTag;

/// A skipped span of source text.
///
/// `offset` and `len` are byte positions in the text that was scanned,
/// i.e. after numeral rewriting. Rewriting only removes characters that
/// sit inside numerals, so `line` always matches the original input.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct LexError {
    pub offset: u32,
    pub len: u32,
    /// 1-based line of the first skipped byte.
    pub line: u32,
    pub kind: LexErrorKind,
}

/// What was skipped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character outside the grammar (`#`, `\`, a control character, a
    /// non-letter outside ASCII).
    #[error("invalid character")]
    InvalidCharacter,
    /// A `"` literal that reached the end of its line.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A `'` literal without its closing quote, or `''`.
    #[error("unterminated character literal")]
    UnterminatedChar,
    /// A `/*` comment that runs to the end of input.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// `0x` without digits, or an exponent without digits.
    #[error("malformed numeric literal")]
    MalformedNumber,
    #[error("interior null byte")]
    InteriorNull,
}

impl LexErrorKind {
    /// Map a scanner error tag to its kind. `None` for non-error tags.
    pub fn from_tag(tag: RawTag) -> Option<Self> {
        match tag {
            RawTag::InvalidByte => Some(Self::InvalidCharacter),
            RawTag::UnterminatedString => Some(Self::UnterminatedString),
            RawTag::UnterminatedChar => Some(Self::UnterminatedChar),
            RawTag::UnterminatedComment => Some(Self::UnterminatedComment),
            RawTag::MalformedNumber => Some(Self::MalformedNumber),
            RawTag::InteriorNull => Some(Self::InteriorNull),
            _ => None,
        }
    }
}
