use super::*;

/// Run the look-back over `history` (oldest first), as the lexer does.
fn closes(history: &[&str]) -> bool {
    closes_type_arguments(history.iter().rev().copied())
}

#[test]
fn angle_runs() {
    assert!(is_angle_run(">"));
    assert!(is_angle_run(">>"));
    assert!(is_angle_run(">>>"));
    assert!(!is_angle_run(""));
    assert!(!is_angle_run(">="));
    assert!(!is_angle_run(">>="));
    assert!(!is_angle_run("<"));
}

#[test]
fn nested_type_arguments_split() {
    // Map<String,List<Integer
    assert!(closes(&["Map", "<", "String", ",", "List", "<", "Integer"]));
}

#[test]
fn shift_of_lowercase_operand_does_not_split() {
    assert!(!closes(&["a"]));
    assert!(!closes(&["int", "x", "=", "a"]));
}

#[test]
fn exhausted_history_does_not_split() {
    assert!(!closes(&[]));
    assert!(!closes(&["Foo", ","]));
}

#[test]
fn wildcards_and_bounds_are_skipped() {
    // List<? extends Comparable<? super T
    assert!(closes(&["List", "<", "?", "extends", "Comparable", "<", "?", "super", "T"]));
}

#[test]
fn arrays_and_qualified_names_are_skipped() {
    // Map<java.lang.String[], Foo<Bar
    assert!(closes(&["<", "String", "[", "]", ",", "Foo", "<", "Bar"]));
    assert!(closes(&["<", "Outer", ".", "Inner"]));
}

#[test]
fn lowercase_package_segment_stops_the_scan() {
    // List<java.util.Date: `util` is lowercase.
    assert!(!closes(&["List", "<", "java", ".", "util", ".", "Date"]));
}

#[test]
fn other_tokens_stop_the_scan() {
    assert!(!closes(&["<", "A", ")"]));
    assert!(!closes(&["<", "A", "1"]));
    assert!(!closes(&["<", "A", ">"]));
    assert!(!closes(&["<", "A", "<<"]));
}

#[test]
fn only_the_nearest_run_matters() {
    // The `<` far back is unreachable past `x`.
    assert!(!closes(&["<", "x", "A"]));
}

#[test]
fn non_ascii_uppercase_is_a_type_name() {
    assert!(closes(&["<", "\u{00c9}t\u{00e9}"]));
}
