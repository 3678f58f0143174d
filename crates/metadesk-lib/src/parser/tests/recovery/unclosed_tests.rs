use crate::parser::parse;
use crate::parser::tests::snapshot;

#[test]
fn unclosed_anonymous_list_is_absent() {
    insta::assert_snapshot!(snapshot("{a b"), @r"
    File
    ---
    error at 0..4: unbalanced delimiter: missing closing `}` (related: list started here at 0..1)
    ");
}

#[test]
fn unclosed_children_are_dropped() {
    insta::assert_snapshot!(snapshot("x: (1 2"), @r#"
    File
      Main "x" Identifier
    ---
    error at 3..7: unbalanced delimiter: missing closing `)` (related: list started here at 3..4)
    "#);
}

#[test]
fn siblings_survive() {
    insta::assert_snapshot!(snapshot("a: {1}\nb: [2"), @r#"
    File
      Main "a" BraceLeft|BraceRight|Identifier
        Main "1" Numeric
      Main "b" Identifier
    ---
    error at 10..12: unbalanced delimiter: missing closing `]` (related: list started here at 10..11)
    "#);
}

#[test]
fn nested_unclosed() {
    insta::assert_snapshot!(snapshot("{a {b"), @r"
    File
    ---
    error at 3..5: unbalanced delimiter: missing closing `}` (related: list started here at 3..4)
    error at 0..5: unbalanced delimiter: missing closing `}` (related: list started here at 0..1)
    ");
}

#[test]
fn unclosed_tag_arguments() {
    insta::assert_snapshot!(snapshot("@doc(1 2"), @r"
    File
    ---
    error at 4..8: unbalanced delimiter: missing closing `)` (related: list started here at 4..5)
    error at 8..8: expected a label
    ");
}

#[test]
fn report_points_at_opener() {
    let source = "config: {\n  name: demo\n";
    let result = parse(source);

    insta::assert_snapshot!(result.diagnostics.report_text(source), @r"
    ERROR: unbalanced delimiter: missing closing `}`
     |
     | config: {\n  name: demo\n
     |         ^
     |
    ");
}
