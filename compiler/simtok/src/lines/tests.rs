use pretty_assertions::assert_eq;

use super::*;

fn assemble(tokens: &[(&str, u32)]) -> TokenizedSource {
    let mut asm = LineAssembler::default();
    for &(text, line) in tokens {
        asm.push(Token::new(text, line));
    }
    asm.finish(Vec::new())
}

#[test]
fn empty_result() {
    let src = assemble(&[]);
    assert!(src.is_empty());
    assert_eq!(src.line_count(), 0);
    assert_eq!(src.lines().count(), 0);
    assert_eq!(src.line(0), None);
    assert_eq!(src.numbered_lines().len(), 1);
    assert!(src.line_texts().is_empty());
}

#[test]
fn tokens_grouped_by_line() {
    let src = assemble(&[("int", 1), ("x", 1), (";", 1), ("x", 2), ("++", 2)]);
    assert_eq!(
        src.line_texts(),
        vec![vec!["int", "x", ";"], vec!["x", "++"]]
    );
}

#[test]
fn skipped_lines_are_back_filled() {
    let src = assemble(&[("a", 1), ("b", 4)]);
    assert_eq!(src.line_count(), 4);
    assert_eq!(
        src.line_texts(),
        vec![vec!["a"], vec![], vec![], vec!["b"]]
    );
    assert_eq!(src.line(1), Some(&[][..]));
}

#[test]
fn leading_blank_lines() {
    let src = assemble(&[("x", 3)]);
    let texts: Vec<Vec<String>> = vec![vec![], vec![], vec!["x".to_owned()]];
    assert_eq!(src.line_texts(), texts);
}

#[test]
fn numbered_lines_are_offset_by_one() {
    let src = assemble(&[("a", 1), ("b", 3)]);
    let numbered = src.numbered_lines();
    assert_eq!(numbered.len() - 1, 3);
    assert!(numbered[0].is_empty());
    assert_eq!(numbered[1][0].text(), "a");
    assert!(numbered[2].is_empty());
    assert_eq!(numbered[3][0].text(), "b");
}

#[test]
fn concatenated_lines_reproduce_token_order() {
    let src = assemble(&[("a", 1), ("b", 1), ("c", 3), ("d", 5)]);
    let flat: Vec<&Token> = src.lines().flatten().collect();
    let direct: Vec<&Token> = src.tokens().iter().collect();
    assert_eq!(flat, direct);
}

#[test]
fn preceding_texts_are_newest_first() {
    let mut asm = LineAssembler::default();
    asm.push(Token::new("<", 1));
    asm.push(Token::new("T", 2));
    assert_eq!(asm.preceding_texts().collect::<Vec<_>>(), vec!["T", "<"]);
}

#[test]
fn errors_are_kept() {
    let mut asm = LineAssembler::with_capacity(1);
    asm.push(Token::new("x", 1));
    let err = LexError {
        offset: 2,
        len: 1,
        line: 1,
        kind: crate::LexErrorKind::InvalidCharacter,
    };
    let src = asm.finish(vec![err.clone()]);
    assert_eq!(src.errors(), &[err]);
}
