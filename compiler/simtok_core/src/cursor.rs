//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads never check bounds against the text length: the buffer ends in
//! zero bytes, so a scan loop that stops on `0x00` stops at end of input.
//! Java source may itself contain NUL; [`Cursor::is_eof`] tells the two
//! apart by position.
//!
//! Skips over comment and string bodies use `memchr` instead of a byte
//! loop, since those bodies are usually the longest runs in a file.

/// Scanning position inside a padded source buffer.
///
/// `Copy`, so a caller can save a position and return to it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Text followed by at least three zero bytes.
    bytes: &'a [u8],
    pos: u32,
    /// Text length; `bytes[end]` is the first padding byte.
    end: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(bytes: &'a [u8], end: u32) -> Self {
        debug_assert!(
            bytes.len() >= end as usize + 3,
            "buffer must leave room for the end marker and two lookahead bytes"
        );
        debug_assert!(bytes[end as usize] == 0, "end marker must be 0x00");
        Self { bytes, pos: 0, end }
    }

    /// Byte under the cursor; `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.bytes[self.pos as usize]
    }

    /// Byte after the current one.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.bytes[self.pos as usize + 1]
    }

    /// Byte two past the current one.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.bytes[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// `true` once the cursor is on the end marker (not an interior NUL).
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end && self.current() == 0
    }

    /// Offset of the cursor in the text.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Text length in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.end
    }

    /// Skip bytes while `pred` holds.
    ///
    /// `pred(0)` must be `false`, or the loop would run into the padding.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Length of the UTF-8 sequence introduced by `lead`.
    ///
    /// Continuation and invalid lead bytes count as 1 so that the cursor
    /// always moves.
    #[inline]
    pub fn utf8_char_width(lead: u8) -> u32 {
        match lead {
            0xF0..=0xF7 => 4,
            0xE0..=0xEF => 3,
            0xC0..=0xDF => 2,
            _ => 1,
        }
    }

    /// Step over one whole character. Stops at the end of the text even
    /// if the last sequence is cut short.
    #[inline]
    pub fn advance_char(&mut self) {
        let next = self.pos + Self::utf8_char_width(self.current());
        self.pos = if self.pos < self.end {
            next.min(self.end)
        } else {
            self.pos + 1
        };
    }

    /// Decode the character under the cursor. `None` at end of input.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let from = self.pos as usize;
        let to = (from + Self::utf8_char_width(self.current()) as usize).min(self.end as usize);
        std::str::from_utf8(self.bytes.get(from..to)?)
            .ok()?
            .chars()
            .next()
    }

    /// The text from the cursor to the end of input.
    #[inline]
    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos as usize..self.end as usize]
    }

    /// Move to `found` bytes ahead, or to end of input when `None`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "an offset into rest() is below the u32 text length"
    )]
    #[inline]
    fn jump(&mut self, found: Option<usize>) {
        self.pos = match found {
            Some(offset) => self.pos + offset as u32,
            None => self.end,
        };
    }

    /// Line comment body: stop on the next `\n` or `\r`, leaving it
    /// unconsumed.
    pub fn eat_until_newline_or_eof(&mut self) {
        let found = memchr::memchr2(b'\n', b'\r', self.rest());
        self.jump(found);
    }

    /// String body: stop on the next `"`, `\`, `\n` or `\r` and return it,
    /// or return `0` at end of input.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let rest = self.rest();
        // memchr3 takes at most three needles; `\r` gets its own search.
        let found = match (
            memchr::memchr3(b'"', b'\\', b'\n', rest),
            memchr::memchr(b'\r', rest),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.jump(found);
        self.current()
    }

    /// Block comment body, entered after `/*`. Consumes through `*/` and
    /// returns `true`; without a terminator, moves to end of input and
    /// returns `false`.
    pub fn eat_block_comment_body(&mut self) -> bool {
        let found = memchr::memmem::find(self.rest(), b"*/");
        self.jump(found);
        if found.is_some() {
            self.pos += 2;
        }
        found.is_some()
    }

    /// Space, tab and form feed. Line terminators are separate tokens.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0C));
    }
}
