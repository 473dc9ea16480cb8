//! Line-aligned Java token streams for code-similarity comparison.
//!
//! The output keeps the line structure of the input exactly and normalizes
//! tokens whose content would otherwise skew a comparison:
//!
//! - numerals written with digit separators or binary prefixes are rewritten
//!   before scanning so they stay single tokens
//! - long string literals collapse to `""`
//! - control characters inside literals become escapes
//! - `>>` and `>>>` closing nested type arguments split into single `>`
//!
//! Lexing never fails. Spans the scanner cannot classify are skipped and
//! listed in [`TokenizedSource::errors`].
//!
//! ```text
//! let src = simtok::tokenize("Map<String,List<Integer>> m;\n\nint x;");
//! src.line_texts() == [
//!     ["Map", "<", "String", ",", "List", "<", "Integer", ">", ">", "m", ";"],
//!     [],
//!     ["int", "x", ";"],
//! ]
//! ```

mod classify;
mod generics;
mod keywords;
mod lex_error;
mod lexer;
mod lines;
mod normalize;
mod options;
mod prefilter;
mod token;

use std::sync::Once;

pub use classify::{
    classify, is_char_literal, is_identifier, is_numeral, is_string_literal, numeral_form,
    FloatSpelling, NumeralForm, TokenKind,
};
pub use generics::{closes_type_arguments, is_angle_run};
pub use keywords::{is_keyword, KEYWORDS};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{JavaLexer, Lexer};
pub use lines::TokenizedSource;
pub use normalize::{
    escape_control_chars, normalize_literal, DEFAULT_MAX_STRING_LITERAL_LEN, EMPTY_STRING_LITERAL,
};
pub use options::LexerOptions;
pub use prefilter::rewrite_numerals;
pub use token::Token;

/// Lex `text` with default options.
pub fn tokenize(text: &str) -> TokenizedSource {
    JavaLexer::default().lex(text)
}

/// Lex separate lines with default options.
pub fn tokenize_lines<I, S>(lines: I) -> TokenizedSource
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    JavaLexer::default().lex_lines(lines)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Controlled by the `RUST_LOG` environment variable:
/// - `RUST_LOG=simtok=debug` - one summary per lexed text
/// - `RUST_LOG=simtok=trace` - also every skipped span and split run
///
/// Does nothing when `RUST_LOG` is unset or a global subscriber is already
/// installed. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
