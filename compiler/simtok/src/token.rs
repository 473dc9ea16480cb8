//! Finished token value.

use std::fmt;

use crate::classify::{classify, TokenKind};

/// One token of output: its final text and the 1-based line it starts on.
///
/// The text is never empty. The kind is not stored; [`Token::kind`]
/// computes it from the text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    text: String,
    line: u32,
}

impl Token {
    pub(crate) fn new(text: impl Into<String>, line: u32) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "tokens are never empty");
        debug_assert!(line >= 1, "line numbers are 1-based");
        Self { text, line }
    }

    /// Token text after normalization.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based source line of the token's first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Coarse category of the text.
    pub fn kind(&self) -> TokenKind {
        classify(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
