//! Owned, zero-padded copy of the text being scanned.
//!
//! Java source is copied once into a buffer that ends in at least three
//! `0x00` bytes. The first of them marks end of input; the others let the
//! scanner look two bytes ahead from any position, including end of input,
//! without a length check.

use crate::Cursor;

/// Allocation granule; the buffer length is a multiple of it.
const CACHE_LINE: usize = 64;

/// Bytes reserved after the text: the end marker plus two lookahead bytes.
const TAIL: usize = 3;

/// Scannable copy of one source text.
///
/// ```text
/// | text (len bytes) | 0x00 | 0x00 ... 0x00 |
///                    ^ end marker    ^ padded to CACHE_LINE
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    bytes: Vec<u8>,
    /// Text length; `bytes[len]` is the end marker.
    len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a fresh zero-padded buffer.
    ///
    /// Text beyond `u32::MAX` bytes is not copied, so scanning such an
    /// input stops at that length.
    pub fn new(source: &str) -> Self {
        let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
        let text = &source.as_bytes()[..len as usize];

        let capacity = (text.len() + TAIL).next_multiple_of(CACHE_LINE);
        let mut bytes = Vec::with_capacity(capacity);
        bytes.extend_from_slice(text);
        bytes.resize(capacity, 0);

        Self { bytes, len }
    }

    /// The copied text, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// The whole buffer, end marker and padding included.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A cursor at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes, self.len)
    }

    /// Text length in bytes.
    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests;
