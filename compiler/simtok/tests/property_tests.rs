//! Property-based tests for the lexer output shape.
//!
//! These use proptest to generate Java-flavored text (including malformed
//! spans) and verify:
//! 1. Line count: `numbered_lines().len() - 1` is the largest token line
//! 2. Tokens are non-empty and their lines are in range
//! 3. Concatenating lines reproduces the token sequence
//! 4. Stability: lexing the space-joined tokens yields the same tokens

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use simtok::{init_tracing, tokenize, tokenize_lines, JavaLexer, Lexer, Token};

// -- Generation Strategies --

/// Java-ish text: identifiers, numerals, literals, operators, comments,
/// blank lines and a few characters the scanner rejects.
fn source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_ .,;<>=+\\-*/%&|!?:(){}\\[\\]\"'@#\t\r\n\u{00e9}]{0,160}")
        .expect("valid regex")
}

/// Like [`source_strategy`] but without the characters that numeral
/// rewriting and literal escaping act on, so a second pass sees nothing
/// left to rewrite.
fn stable_source_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ac-zA-Z0-9 .,;<>=+\\-*/%&|!?:(){}\\[\\]\"'@#\n]{0,160}")
        .expect("valid regex")
}

fn texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.text().to_owned()).collect()
}

proptest! {
    #[test]
    fn line_count_matches_max_token_line(source in source_strategy()) {
        let src = tokenize(&source);
        let max_line = src.tokens().iter().map(Token::line).max().unwrap_or(0);
        prop_assert_eq!(src.numbered_lines().len() - 1, max_line as usize);
        prop_assert_eq!(src.line_count(), max_line as usize);
    }

    #[test]
    fn tokens_are_non_empty_and_in_range(source in source_strategy()) {
        let src = tokenize(&source);
        for token in src.tokens() {
            prop_assert!(!token.text().is_empty());
            prop_assert!(token.line() >= 1);
            prop_assert!(token.line() as usize <= src.line_count());
        }
    }

    #[test]
    fn tokens_never_span_lines(source in source_strategy()) {
        let src = tokenize(&source);
        for token in src.tokens() {
            prop_assert!(!token.text().contains(['\n', '\r']));
        }
    }

    #[test]
    fn lines_concatenate_to_tokens(source in source_strategy()) {
        let src = tokenize(&source);
        let flat: Vec<&Token> = src.lines().flatten().collect();
        let direct: Vec<&Token> = src.tokens().iter().collect();
        prop_assert_eq!(flat, direct);
        for (index, line) in src.lines().enumerate() {
            for token in line {
                prop_assert_eq!(token.line() as usize, index + 1);
            }
        }
    }

    #[test]
    fn line_count_never_exceeds_source_lines(source in source_strategy()) {
        let src = tokenize(&source);
        let terminators = source.matches('\n').count() + source.matches('\r').count();
        prop_assert!(src.line_count() <= terminators + 1);
    }

    #[test]
    fn relexing_joined_tokens_is_stable(source in stable_source_strategy()) {
        let first = tokenize(&source);
        let joined = texts(first.tokens()).join(" ");
        let second = tokenize(&joined);
        prop_assert_eq!(texts(second.tokens()), texts(first.tokens()));
    }

    #[test]
    fn line_input_matches_joined_text(lines in prop::collection::vec("[a-z0-9 ;<>=\"]{0,20}", 0..8)) {
        prop_assert_eq!(tokenize_lines(&lines), tokenize(&lines.join("\n")));
    }
}

// -- Fixed Scenarios --

#[test]
fn documented_example() {
    let src = tokenize("Map<String,List<Integer>> m;\n\nint x;");
    assert_eq!(
        src.line_texts(),
        vec![
            vec!["Map", "<", "String", ",", "List", "<", "Integer", ">", ">", "m", ";"],
            vec![],
            vec!["int", "x", ";"],
        ]
    );
}

#[test]
fn init_tracing_is_repeatable() {
    init_tracing();
    init_tracing();
    assert_eq!(tokenize("a").tokens().len(), 1);
}

#[test]
fn lexer_is_usable_as_trait_object() {
    let lexer: &dyn Lexer = &JavaLexer::default();
    assert_eq!(lexer.lex("a >> b").tokens().len(), 3);
}

#[test]
fn whole_class() {
    let source = "\
package demo;

import java.util.*;

/** Counts words. */
public class Counter<T extends Comparable<? super T>> {
    private final Map<T, List<Integer>> seen = new HashMap<T, List<Integer>>();
    private static final String BANNER = \"a very long banner string\";

    public int shift(int x) {
        return x >> 2 | 0b1010 & 1_000;
    }
}
";
    let src = tokenize(source);
    let lines = src.line_texts();
    assert_eq!(lines[0], vec!["package", "demo", ";"]);
    assert!(lines[1].is_empty());
    assert_eq!(lines[2], vec!["import", "java", ".", "util", ".", "*", ";"]);
    assert!(lines[4].is_empty(), "javadoc line has no tokens");
    assert_eq!(
        lines[5],
        vec![
            "public", "class", "Counter", "<", "T", "extends", "Comparable", "<", "?", "super",
            "T", ">", ">", "{",
        ]
    );
    assert_eq!(
        lines[6],
        vec![
            "private", "final", "Map", "<", "T", ",", "List", "<", "Integer", ">", ">", "seen",
            "=", "new", "HashMap", "<", "T", ",", "List", "<", "Integer", ">", ">", "(", ")",
            ";",
        ]
    );
    assert_eq!(
        lines[7],
        vec!["private", "static", "final", "String", "BANNER", "=", "\"\"", ";"]
    );
    assert_eq!(
        lines[10],
        vec!["return", "x", ">>", "2", "|", "01010", "&", "1000", ";"]
    );
    assert_eq!(src.line_count(), 13);
    assert!(src.errors().is_empty());
}
