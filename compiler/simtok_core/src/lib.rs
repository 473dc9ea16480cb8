//! Low-level scanner for Java-family source text.
//!
//! This crate turns source text into `(RawTag, len)` pairs. It never
//! allocates per token, never fails, and leaves all text-level decisions
//! (literal normalization, generic bracket splitting, line grouping) to the
//! integration layer in `simtok`.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//!                                      LineIndex: offset → line
//! ```

mod cursor;
mod line_index;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use line_index::LineIndex;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
