//! Raw token tags produced by the scanner.
//!
//! A [`RawTag`] says *what* the scanner recognized; the token's text is
//! recovered by the caller from the source offset and [`RawToken::len`].
//! Discriminants are grouped into semantic ranges so that category checks
//! are a single comparison.

/// Kind of a raw token.
///
/// Layout of the `u8` discriminants:
///
/// | Range   | Category                    |
/// |---------|-----------------------------|
/// | 0-15    | identifiers and literals    |
/// | 32-79   | operators                   |
/// | 80-95   | delimiters and punctuation  |
/// | 112-119 | trivia                      |
/// | 240-254 | recovered errors            |
/// | 255     | end of input                |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // ─── Identifiers & Literals ───────────────────────────────────
    /// Identifier or keyword; keywords are resolved by the classifier.
    Ident = 0,
    /// Decimal integer, optionally suffixed with `l`/`L`.
    Int = 1,
    /// Floating-point literal in any of the four spellings.
    Float = 2,
    /// `0x` hexadecimal literal.
    HexInt = 3,
    /// `0b` binary literal.
    BinInt = 4,
    /// Double-quoted string literal, quotes included.
    String = 5,
    /// Single-quoted character literal, quotes included.
    Char = 6,

    // ─── Operators ────────────────────────────────────────────────
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    Caret = 37,
    Ampersand = 38,
    Pipe = 39,
    Tilde = 40,
    Bang = 41,
    Equal = 42,
    Less = 43,
    Greater = 44,
    Question = 45,
    Colon = 46,
    PlusPlus = 47,
    MinusMinus = 48,
    EqualEqual = 49,
    BangEqual = 50,
    LessEqual = 51,
    GreaterEqual = 52,
    AmpersandAmpersand = 53,
    PipePipe = 54,
    /// `<<`
    Shl = 55,
    /// `>>`, which may also close two generic argument lists.
    Shr = 56,
    /// `>>>`, which may also close three generic argument lists.
    UnsignedShr = 57,
    PlusEqual = 58,
    MinusEqual = 59,
    StarEqual = 60,
    SlashEqual = 61,
    PercentEqual = 62,
    CaretEqual = 63,
    AmpersandEqual = 64,
    PipeEqual = 65,
    ShlEqual = 66,
    ShrEqual = 67,
    UnsignedShrEqual = 68,
    At = 69,

    // ─── Delimiters ───────────────────────────────────────────────
    LeftParen = 80,
    RightParen = 81,
    LeftBracket = 82,
    RightBracket = 83,
    LeftBrace = 84,
    RightBrace = 85,
    Comma = 86,
    Semicolon = 87,
    Dot = 88,
    /// `...` (varargs)
    Ellipsis = 89,

    // ─── Trivia ───────────────────────────────────────────────────
    /// Spaces, tabs and form feeds.
    Whitespace = 112,
    /// `\n`, `\r\n` or a lone `\r`.
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,

    // ─── Errors ───────────────────────────────────────────────────
    /// A character no grammar rule accepts.
    InvalidByte = 240,
    /// String literal cut off by a line terminator or end of input.
    UnterminatedString = 241,
    /// Empty, over-long or unclosed character literal.
    UnterminatedChar = 242,
    /// `/*` without a matching `*/`.
    UnterminatedComment = 243,
    /// Numeral prefix or exponent with no digits (`0x`, `1e`).
    MalformedNumber = 244,
    /// NUL byte inside the source content.
    InteriorNull = 245,

    // ─── Control ──────────────────────────────────────────────────
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for tags whose spelling never varies.
    ///
    /// Returns `None` for identifiers, literals, trivia and error tags.
    pub fn lexeme(self) -> Option<&'static str> {
        let text = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Ampersand => "&",
            Self::Pipe => "|",
            Self::Tilde => "~",
            Self::Bang => "!",
            Self::Equal => "=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Question => "?",
            Self::Colon => ":",
            Self::PlusPlus => "++",
            Self::MinusMinus => "--",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::AmpersandAmpersand => "&&",
            Self::PipePipe => "||",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UnsignedShr => ">>>",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::CaretEqual => "^=",
            Self::AmpersandEqual => "&=",
            Self::PipeEqual => "|=",
            Self::ShlEqual => "<<=",
            Self::ShrEqual => ">>=",
            Self::UnsignedShrEqual => ">>>=",
            Self::At => "@",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Ellipsis => "...",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable name, used in diagnostics and trace output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer literal",
            Self::Float => "float literal",
            Self::HexInt => "hex integer literal",
            Self::BinInt => "binary integer literal",
            Self::String => "string literal",
            Self::Char => "char literal",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::InvalidByte => "invalid character",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedChar => "unterminated char literal",
            Self::UnterminatedComment => "unterminated block comment",
            Self::MalformedNumber => "malformed numeric literal",
            Self::InteriorNull => "interior null byte",
            Self::Eof => "end of file",
            // Every remaining tag has a fixed spelling.
            _ => "operator",
        }
    }

    /// Whitespace, line terminators and comments: never emitted as tokens.
    #[inline]
    pub fn is_trivia(self) -> bool {
        (self as u8) >= 112 && (self as u8) < 120
    }

    /// Recovered scanning errors: the span is skipped.
    #[inline]
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != Self::Eof
    }

    /// Numeric literal of any radix or spelling.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::HexInt | Self::BinInt)
    }
}

/// A `(tag, len)` pair produced by the scanner.
///
/// The byte offset is implicit: it is the sum of the lengths of every
/// preceding token, trivia included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

/// `RawTag` must stay one byte; `RawToken` fits in a register pair.
const _: () = assert!(std::mem::size_of::<RawTag>() == 1);
const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);
