//! Java 5 lexical grammar as a byte-driven state machine.
//!
//! [`RawScanner::next_token`] looks at one byte, picks the rule for it, and
//! runs that rule to the end of the token. Every byte value has an arm, so
//! there is no fallback path; the zero byte at the end of the buffer lands
//! in the same arm as an interior NUL and is told apart there.
//!
//! Keywords come out as identifiers and literals come out unparsed. Deciding
//! what a token means is left to the caller.
//!
//! # Recovery
//!
//! Nothing here fails. A span no rule accepts comes back as an error tag
//! (`InvalidByte`, `UnterminatedString`, ...) covering at least one byte, so
//! the caller can skip it and the scan always makes progress. The lengths
//! of all tokens, trivia and error tags included, sum to the source length.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Streaming scanner over one [`Cursor`].
///
/// Yields `(tag, len)` pairs and never allocates. Malformed input yields
/// error tags rather than stopping the scan.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Scan one token starting at the cursor.
    ///
    /// At end of input this returns `Eof` with length 0, as many times as
    /// it is called.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'\'' => self.char_literal(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.plus(start),
            b'-' => self.minus(start),
            b'*' => self.with_assign(start, RawTag::Star, RawTag::StarEqual),
            b'%' => self.with_assign(start, RawTag::Percent, RawTag::PercentEqual),
            b'^' => self.with_assign(start, RawTag::Caret, RawTag::CaretEqual),
            b'!' => self.with_assign(start, RawTag::Bang, RawTag::BangEqual),
            b'=' => self.with_assign(start, RawTag::Equal, RawTag::EqualEqual),
            b'~' => self.single(start, RawTag::Tilde),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'&' => self.ampersand(start),
            b'|' => self.pipe(start),
            b'.' => self.dot(start),
            b'?' => self.single(start, RawTag::Question),
            b':' => self.single(start, RawTag::Colon),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b'@' => self.single(start, RawTag::At),
            128..=255 => self.non_ascii(start),
            // Remaining control characters, DEL, and ASCII punctuation that
            // Java does not use (`#`, `\`, backtick).
            1..=8 | 11 | 14..=31 | 127 | b'#' | b'\\' | b'`' => self.invalid_byte(start),
        }
    }

    /// Build a token spanning `start` to the current position.
    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: advance past it.
            let start = self.cursor.pos();
            self.cursor.advance();
            self.token(start, RawTag::InteriorNull)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // \r\n is one terminator
            self.cursor.advance();
        }
        self.token(start, RawTag::Newline)
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ──────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume first '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.advance();
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance();
                if self.cursor.eat_block_comment_body() {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedComment)
                }
            }
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::SlashEqual)
            }
            _ => self.token(start, RawTag::Slash),
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.eat_ident_continue();
        self.token(start, RawTag::Ident)
    }

    /// Non-ASCII lead byte: a letter starts an identifier, anything else
    /// is skipped as a whole character.
    fn non_ascii(&mut self, start: u32) -> RawToken {
        if self.cursor.current_char().is_some_and(char::is_alphabetic) {
            self.cursor.advance_char();
            self.eat_ident_continue();
            self.token(start, RawTag::Ident)
        } else {
            self.cursor.advance_char();
            self.token(start, RawTag::InvalidByte)
        }
    }

    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if is_ident_continue(b) {
                self.cursor.advance();
            } else if b >= 0x80
                && self
                    .cursor
                    .current_char()
                    .is_some_and(char::is_alphanumeric)
            {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
    }

    // ─── Operators ─────────────────────────────────────────────────

    /// One-byte token.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `op` or `op=`.
    fn with_assign(&mut self, start: u32, bare: RawTag, assign: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(start, assign)
        } else {
            self.token(start, bare)
        }
    }

    fn plus(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'+' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::PlusPlus);
        }
        self.with_assign(start, RawTag::Plus, RawTag::PlusEqual)
    }

    fn minus(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'-' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::MinusMinus);
        }
        self.with_assign(start, RawTag::Minus, RawTag::MinusEqual)
    }

    fn ampersand(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'&' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::AmpersandAmpersand);
        }
        self.with_assign(start, RawTag::Ampersand, RawTag::AmpersandEqual)
    }

    fn pipe(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'|' {
            self.cursor.advance_n(2);
            return self.token(start, RawTag::PipePipe);
        }
        self.with_assign(start, RawTag::Pipe, RawTag::PipeEqual)
    }

    fn less(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'<' {
            self.cursor.advance(); // consume first '<'
            return self.with_assign(start, RawTag::Shl, RawTag::ShlEqual);
        }
        self.with_assign(start, RawTag::Less, RawTag::LessEqual)
    }

    /// Longest match over `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=`.
    ///
    /// Runs of `>` are always scanned greedily; whether `>>` closes two
    /// generic argument lists is decided after scanning.
    fn greater(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() != b'>' {
            return self.with_assign(start, RawTag::Greater, RawTag::GreaterEqual);
        }
        self.cursor.advance(); // consume first '>'
        if self.cursor.peek() == b'>' {
            self.cursor.advance(); // consume second '>'
            return self.with_assign(start, RawTag::UnsignedShr, RawTag::UnsignedShrEqual);
        }
        self.with_assign(start, RawTag::Shr, RawTag::ShrEqual)
    }

    fn dot(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            // `.5`, `.5e3`, `.5f`
            self.cursor.advance(); // consume '.'
            self.eat_decimal_digits();
            return self.float_tail(start);
        }
        if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
            self.cursor.advance_n(3);
            return self.token(start, RawTag::Ellipsis);
        }
        self.single(start, RawTag::Dot)
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' && matches!(self.cursor.current(), b'x' | b'X') {
            return self.hex_number(start);
        }

        // Only treat `0b` as a prefix when a binary digit follows; `0b`
        // alone scans as `0` then identifier `b`.
        if first == b'0'
            && matches!(self.cursor.current(), b'b' | b'B')
            && matches!(self.cursor.peek(), b'0' | b'1')
        {
            return self.bin_number(start);
        }

        self.eat_decimal_digits();

        match self.cursor.current() {
            b'.' => {
                // `1.`, `1.5`, `1.e3`
                self.cursor.advance();
                self.eat_decimal_digits();
                self.float_tail(start)
            }
            b'e' | b'E' | b'f' | b'F' | b'd' | b'D' => self.float_tail(start),
            b'l' | b'L' => {
                self.cursor.advance();
                self.token(start, RawTag::Int)
            }
            _ => self.token(start, RawTag::Int),
        }
    }

    fn hex_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume 'x' or 'X'
        let digits_start = self.cursor.pos();
        self.cursor.eat_while(|b| b.is_ascii_hexdigit());
        if self.cursor.pos() == digits_start {
            return self.token(start, RawTag::MalformedNumber);
        }
        self.eat_long_suffix();
        self.token(start, RawTag::HexInt)
    }

    fn bin_number(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume 'b' or 'B'
        self.cursor.eat_while(|b| b == b'0' || b == b'1');
        self.eat_long_suffix();
        self.token(start, RawTag::BinInt)
    }

    fn eat_decimal_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }

    fn eat_long_suffix(&mut self) {
        if matches!(self.cursor.current(), b'l' | b'L') {
            self.cursor.advance();
        }
    }

    /// Optional exponent and optional `f/F/d/D` suffix after the mantissa.
    fn float_tail(&mut self, start: u32) -> RawToken {
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            let digits_start = self.cursor.pos();
            self.eat_decimal_digits();
            if self.cursor.pos() == digits_start {
                return self.token(start, RawTag::MalformedNumber);
            }
        }
        if matches!(self.cursor.current(), b'f' | b'F' | b'd' | b'D') {
            self.cursor.advance();
        }
        self.token(start, RawTag::Float)
    }

    // ─── String & Char Literals ────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.token(start, RawTag::String);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.eat_escaped_char();
                }
                // Line terminator or EOF: the terminator is left for the
                // next token so line counting stays exact.
                _ => return self.token(start, RawTag::UnterminatedString),
            }
        }
    }

    /// Consume the character after a backslash, unless it ends the line.
    fn eat_escaped_char(&mut self) {
        match self.cursor.current() {
            b'\n' | b'\r' => {}
            0 if self.cursor.is_eof() => {}
            _ => self.cursor.advance_char(),
        }
    }

    fn char_literal(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '\''

        match self.cursor.current() {
            b'\\' => {
                self.cursor.advance(); // consume '\'
                self.char_escape();
            }
            b'\'' => {
                // `''`: consume both quotes so the second one does not
                // open another literal.
                self.cursor.advance();
                return self.token(start, RawTag::UnterminatedChar);
            }
            b'\n' | b'\r' => return self.token(start, RawTag::UnterminatedChar),
            0 if self.cursor.is_eof() => return self.token(start, RawTag::UnterminatedChar),
            _ => self.cursor.advance_char(),
        }

        if self.cursor.current() == b'\'' {
            self.cursor.advance();
            self.token(start, RawTag::Char)
        } else {
            self.token(start, RawTag::UnterminatedChar)
        }
    }

    /// Escape body inside a char literal: `\uXXXX` (any number of `u`),
    /// up to three octal digits, or a single character.
    fn char_escape(&mut self) {
        match self.cursor.current() {
            b'u' => {
                self.cursor.eat_while(|b| b == b'u');
                for _ in 0..4 {
                    if !self.cursor.current().is_ascii_hexdigit() {
                        break;
                    }
                    self.cursor.advance();
                }
            }
            b'0'..=b'7' => {
                for _ in 0..3 {
                    if !matches!(self.cursor.current(), b'0'..=b'7') {
                        break;
                    }
                    self.cursor.advance();
                }
            }
            _ => self.eat_escaped_char(),
        }
    }

    // ─── Error tokens ──────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::InvalidByte)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// ASCII bytes that may continue a Java identifier: letters, digits, `_`
/// and `$`. Zero is not among them, so identifier loops stop at end of
/// input.
#[allow(
    clippy::cast_possible_truncation,
    reason = "i < 256"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'$'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is an ASCII identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Scan all of `source` at once.
///
/// The result holds every token, trivia and error tags included, but not
/// the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}
