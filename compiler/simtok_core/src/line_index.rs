//! Byte offset to line number mapping.
//!
//! Line terminators follow the Java convention: `\n`, `\r\n` (a single
//! terminator) and a lone `\r`. Lines are numbered from 1.

/// Sorted start offsets of every line in a source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// `line_starts[k]` is the byte offset where line `k + 1` begins.
    /// Always non-empty: line 1 starts at offset 0.
    line_starts: Vec<u32>,
}

impl LineIndex {
    /// Build the index with a single SIMD-accelerated pass over `source`.
    pub fn new(source: &[u8]) -> Self {
        let mut line_starts = vec![0];
        for pos in memchr::memchr2_iter(b'\n', b'\r', source) {
            // `\r\n` counts once; the `\n` records the line start.
            if source[pos] == b'\r' && source.get(pos + 1) == Some(&b'\n') {
                continue;
            }
            let Ok(next) = u32::try_from(pos + 1) else {
                break;
            };
            line_starts.push(next);
        }
        Self { line_starts }
    }

    /// 1-based line containing byte `offset`.
    ///
    /// Offsets past the end of the source map to the last line.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "line count is bounded by the u32 source length"
    )]
    pub fn line_of(&self, offset: u32) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }

    /// Number of lines in the source. An empty source has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
