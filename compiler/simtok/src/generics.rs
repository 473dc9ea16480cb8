//! Splitting `>>` and `>>>` that close nested type arguments.
//!
//! The scanner matches the longest operator, so `List<List<String>>` ends in
//! a single `>>` shift token. Without a parser the only way to tell a shift
//! from two closers is to look back: inside a type argument list the tokens
//! before the run are type names, separators and wildcards, reaching back to
//! an opening `<`.
//!
//! The look-back walks the tokens already emitted, newest first, and stops
//! at the first token that is not part of a type argument list, so the work
//! is proportional to the length of that run rather than the whole stream.
//! It is a heuristic: `A < B >> c` splits, `foo(a) >> 2` does not.

/// Returns `true` if `text` is one or more `>` characters.
pub fn is_angle_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b == b'>')
}

/// Decide whether a run of `>` closes type argument lists.
///
/// `preceding` yields the text of previously emitted tokens, nearest first.
/// Tokens that can appear inside a type argument list are skipped; the scan
/// answers `true` on reaching `<` and `false` on anything else or when the
/// history runs out.
pub fn closes_type_arguments<'a>(preceding: impl IntoIterator<Item = &'a str>) -> bool {
    for text in preceding {
        if text == "<" {
            return true;
        }
        if !is_type_argument_part(text) {
            return false;
        }
    }
    false
}

/// Separators, wildcards, capitalized type names and bound keywords.
fn is_type_argument_part(text: &str) -> bool {
    matches!(text, "," | "." | "?" | "[" | "]" | "extends" | "super")
        || text.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests;
