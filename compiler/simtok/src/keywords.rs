//! Reserved word table.
//!
//! The Java keywords plus the literal words `true`, `false` and `null`.
//! The vocabulary is fixed at compile time.
//!
//! # Lookup
//!
//! [`is_keyword`] uses the text's length as a first-pass filter (reserved
//! words range from 2 to 12 bytes), then matches against the words of that
//! length only.

/// Every reserved word, in alphabetical order.
pub const KEYWORDS: [&str; 53] = [
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Returns `true` if `text` is a reserved word.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    let bytes = text.as_bytes();
    let len = bytes.len();

    // Guard: all reserved words are 2-12 chars and start with a lowercase letter
    if !(2..=12).contains(&len) || !bytes[0].is_ascii_lowercase() {
        return false;
    }

    match len {
        2 => matches!(text, "do" | "if"),
        3 => matches!(text, "for" | "int" | "new" | "try"),
        4 => matches!(
            text,
            "byte"
                | "case"
                | "char"
                | "else"
                | "enum"
                | "goto"
                | "long"
                | "null"
                | "this"
                | "true"
                | "void"
        ),
        5 => matches!(
            text,
            "break"
                | "catch"
                | "class"
                | "const"
                | "false"
                | "final"
                | "float"
                | "short"
                | "super"
                | "throw"
                | "while"
        ),
        6 => matches!(
            text,
            "assert"
                | "double"
                | "import"
                | "native"
                | "public"
                | "return"
                | "static"
                | "switch"
                | "throws"
        ),
        7 => matches!(
            text,
            "boolean" | "default" | "extends" | "finally" | "package" | "private"
        ),
        8 => matches!(text, "abstract" | "continue" | "strictfp" | "volatile"),
        9 => matches!(text, "interface" | "protected" | "transient"),
        10 => matches!(text, "implements" | "instanceof"),
        12 => text == "synchronized",
        _ => false,
    }
}
