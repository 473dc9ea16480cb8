//! Lexer driver: rewrite, scan, normalize, split, assemble.
//!
//! ```text
//! text ─▶ rewrite_numerals ─▶ RawScanner ─┬─ trivia ─────────▶ dropped
//!                                         ├─ error tags ─────▶ LexError
//!                                         └─ tokens ─▶ normalize_literal
//!                                                    ─▶ generic closer split
//!                                                    ─▶ LineAssembler
//! ```
//!
//! Each call builds its own buffers, so a single lexer can be shared
//! across threads and used for any number of texts.

use std::borrow::Cow;

use simtok_core::{LineIndex, RawScanner, RawTag, SourceBuffer};

use crate::generics::{closes_type_arguments, is_angle_run};
use crate::lex_error::{LexError, LexErrorKind};
use crate::lines::{LineAssembler, TokenizedSource};
use crate::normalize::normalize_literal;
use crate::options::LexerOptions;
use crate::prefilter::rewrite_numerals;
use crate::token::Token;

/// Turns source text into line-aligned tokens.
///
/// Implementations never fail: malformed input yields a best-effort token
/// stream with the skipped spans listed in [`TokenizedSource::errors`].
pub trait Lexer {
    /// Lex a whole text.
    fn lex(&self, text: &str) -> TokenizedSource;

    /// Lex a text supplied as separate lines, joined with `\n`.
    fn lex_lines<I, S>(&self, lines: I) -> TokenizedSource
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (index, line) in lines.into_iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        self.lex(&text)
    }
}

/// Lexer for Java source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JavaLexer {
    options: LexerOptions,
}

impl JavaLexer {
    pub const fn new(options: LexerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Lex independent texts in parallel. Results are in input order.
    pub fn lex_batch<S>(&self, texts: &[S]) -> Vec<TokenizedSource>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.lex(text.as_ref())).collect()
    }

    /// Emit one scanned token, applying literal normalization and
    /// generic closer splitting.
    fn emit(&self, asm: &mut LineAssembler, tag: RawTag, text: &str, line: u32) {
        match tag {
            RawTag::String | RawTag::Char => {
                let text = normalize_literal(text, self.options.max_string_literal_len);
                asm.push(Token::new(text, line));
            }
            _ if text.len() > 1
                && self.options.split_generic_closers
                && is_angle_run(text)
                && closes_type_arguments(asm.preceding_texts()) =>
            {
                tracing::trace!(line, run = text.len(), "splitting generic closers");
                for _ in 0..text.len() {
                    asm.push(Token::new(">", line));
                }
            }
            _ => asm.push(Token::new(text, line)),
        }
    }
}

impl Lexer for JavaLexer {
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    fn lex(&self, text: &str) -> TokenizedSource {
        let source = if self.options.rewrite_numerals {
            rewrite_numerals(text)
        } else {
            Cow::Borrowed(text)
        };

        let buf = SourceBuffer::new(&source);
        let line_index = LineIndex::new(buf.as_bytes());
        // Rough guess: one token per four bytes of source.
        let mut asm = LineAssembler::with_capacity(source.len() / 4);
        let mut errors = Vec::new();

        let mut offset = 0u32;
        for raw in RawScanner::new(buf.cursor()) {
            let start = offset;
            offset += raw.len;
            if raw.tag.is_trivia() {
                continue;
            }

            let line = line_index.line_of(start);
            if let Some(kind) = LexErrorKind::from_tag(raw.tag) {
                tracing::trace!(offset = start, len = raw.len, line, %kind, "skipped span");
                errors.push(LexError {
                    offset: start,
                    len: raw.len,
                    line,
                    kind,
                });
                continue;
            }

            let Some(text) = source.get(start as usize..offset as usize) else {
                continue;
            };
            self.emit(&mut asm, raw.tag, text, line);
        }

        let result = asm.finish(errors);
        tracing::debug!(
            tokens = result.tokens().len(),
            lines = result.line_count(),
            errors = result.errors().len(),
            rewritten = matches!(source, Cow::Owned(_)),
            "lexed"
        );
        result
    }
}
