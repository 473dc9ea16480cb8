//! Line assembly and the tokenization result.
//!
//! Tokens are stored once, in emission order. Lines are ranges into that
//! list: `line_starts[k]` is the index of the first token on line `k + 1`.
//! A line without tokens is an empty range, so blank and comment-only lines
//! cost one index each.

use crate::lex_error::LexError;
use crate::token::Token;

// ─── LineAssembler ─────────────────────────────────────────────────

/// Accumulates tokens and back-fills empty lines.
///
/// Tokens must arrive with non-decreasing line numbers.
#[derive(Debug, Default)]
pub(crate) struct LineAssembler {
    tokens: Vec<Token>,
    line_starts: Vec<u32>,
}

impl LineAssembler {
    pub(crate) fn with_capacity(tokens: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(tokens),
            line_starts: Vec::new(),
        }
    }

    /// Append `token`, opening any lines between the previous token's
    /// line and this one.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token count is bounded by the u32 source length"
    )]
    pub(crate) fn push(&mut self, token: Token) {
        debug_assert!(
            self.tokens.last().map_or(1, Token::line) <= token.line(),
            "tokens must arrive in line order"
        );
        let index = self.tokens.len() as u32;
        while self.line_starts.len() < token.line() as usize {
            self.line_starts.push(index);
        }
        self.tokens.push(token);
    }

    /// Texts of the tokens emitted so far, newest first.
    pub(crate) fn preceding_texts(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().rev().map(Token::text)
    }

    pub(crate) fn finish(self, errors: Vec<LexError>) -> TokenizedSource {
        TokenizedSource {
            tokens: self.tokens,
            line_starts: self.line_starts,
            errors,
        }
    }
}

// ─── TokenizedSource ───────────────────────────────────────────────

/// Line-aligned tokens of one source text.
///
/// There is one line per source line up to and including the last line
/// that holds a token; trailing lines without tokens are not represented.
/// Index 0 of [`lines`](Self::lines) is line 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenizedSource {
    tokens: Vec<Token>,
    line_starts: Vec<u32>,
    errors: Vec<LexError>,
}

impl TokenizedSource {
    /// All tokens in emission order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of lines, equal to the largest line number of any token
    /// (0 when there are no tokens).
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Tokens on the line at `index` (0-based, so `line(0)` is line 1).
    pub fn line(&self, index: usize) -> Option<&[Token]> {
        let start = *self.line_starts.get(index)? as usize;
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(self.tokens.len(), |&s| s as usize);
        self.tokens.get(start..end)
    }

    /// Iterate over lines, line 1 first.
    pub fn lines(&self) -> impl ExactSizeIterator<Item = &[Token]> + '_ {
        (0..self.line_count()).map(|index| self.line(index).unwrap_or_default())
    }

    /// Lines with a leading empty slot, so that slot `n` holds line `n`.
    ///
    /// `len() - 1` is the largest line number of any token; tokenless
    /// input yields a single empty slot.
    pub fn numbered_lines(&self) -> Vec<&[Token]> {
        let mut out = Vec::with_capacity(self.line_count() + 1);
        out.push(&[][..]);
        out.extend(self.lines());
        out
    }

    /// Owned token texts per line, line 1 first.
    pub fn line_texts(&self) -> Vec<Vec<String>> {
        self.lines()
            .map(|line| line.iter().map(|t| t.text().to_owned()).collect())
            .collect()
    }

    /// Spans skipped while scanning, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// `true` when no tokens were produced.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests;
