//! Lexer configuration.

use crate::normalize::DEFAULT_MAX_STRING_LITERAL_LEN;

/// Knobs for [`JavaLexer`](crate::JavaLexer).
///
/// The defaults reproduce the reference behavior; turning a pass off is
/// mainly useful for inspecting what the other passes do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// String literals with at least this many characters (quotes
    /// included) collapse to `""`.
    pub max_string_literal_len: usize,
    /// Rewrite digit-group separators and binary prefixes before scanning.
    pub rewrite_numerals: bool,
    /// Split `>>` / `>>>` runs that close type argument lists.
    pub split_generic_closers: bool,
}

impl LexerOptions {
    pub const fn new() -> Self {
        Self {
            max_string_literal_len: DEFAULT_MAX_STRING_LITERAL_LEN,
            rewrite_numerals: true,
            split_generic_closers: true,
        }
    }

    #[must_use]
    pub const fn with_max_string_literal_len(mut self, len: usize) -> Self {
        self.max_string_literal_len = len;
        self
    }

    #[must_use]
    pub const fn with_rewrite_numerals(mut self, enabled: bool) -> Self {
        self.rewrite_numerals = enabled;
        self
    }

    #[must_use]
    pub const fn with_split_generic_closers(mut self, enabled: bool) -> Self {
        self.split_generic_closers = enabled;
        self
    }
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self::new()
    }
}
