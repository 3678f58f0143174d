use crate::parser::tests::snapshot;

#[test]
fn stray_separator() {
    insta::assert_snapshot!(snapshot(", a"), @r#"
    File
      Main "a" Identifier
    ---
    error at 0..1: unexpected token: `,`
    "#);
}

#[test]
fn stray_closer_at_root() {
    insta::assert_snapshot!(snapshot("a) b"), @r#"
    File
      Main "a" Identifier
      Main "b" Identifier
    ---
    error at 1..2: unexpected closing delimiter: `)`
    "#);
}

#[test]
fn detached_colon() {
    insta::assert_snapshot!(snapshot("a : b"), @r#"
    File
      Main "a" Identifier
      Main "b" Identifier
    ---
    error at 2..3: unexpected token: `:`
    "#);
}

#[test]
fn bad_character() {
    insta::assert_snapshot!(snapshot("a € b"), @r#"
    File
      Main "a" Identifier
      Main "b" Identifier
    ---
    error at 2..5: unexpected character `€`
    "#);
}

#[test]
fn unterminated_string() {
    insta::assert_snapshot!(snapshot("a \"oops\nb"), @r#"
    File
      Main "a" Identifier
      Main "b" Identifier
    ---
    error at 2..7: unterminated string literal
    "#);
}

#[test]
fn unterminated_comment() {
    insta::assert_snapshot!(snapshot("a /* x"), @r#"
    File
      Main "a" Identifier
    ---
    error at 2..6: unterminated comment
    "#);
}

#[test]
fn failed_node_truncates_implicit_list() {
    insta::assert_snapshot!(snapshot("x: 1 # 2\ny"), @r#"
    File
      Main "x" Identifier
        Main "1" Numeric
      Main "2" Numeric
      Main "y" Identifier
    ---
    error at 5..6: unexpected token: `#`
    "#);
}

#[test]
fn missing_children() {
    insta::assert_snapshot!(snapshot("{a:}"), @r#"
    File
      Main "" BraceLeft|BraceRight
        Main "a" Identifier
    ---
    error at 3..4: expected a child node after `:`
    "#);
}

#[test]
fn missing_tag_label() {
    insta::assert_snapshot!(snapshot("@ foo"), @r#"
    File
      Main "foo" Identifier
    ---
    error at 1..2: expected a label
    "#);
}

#[test]
fn tag_without_node() {
    insta::assert_snapshot!(snapshot("{@foo}"), @r#"
    File
      Main "" BraceLeft|BraceRight
    ---
    error at 5..6: expected a label
    "#);
}

#[test]
fn tag_arguments_not_parenthesized() {
    insta::assert_snapshot!(snapshot("@foo[1] bar"), @r#"
    File
      Main "bar" Identifier
        Tag "foo" BracketLeft|BracketRight|Identifier
          Main "1" Numeric
    ---
    error at 4..7: tag arguments must be enclosed in `(` and `)`
    "#);
}

#[test]
fn missing_whitespace_after_tag() {
    insta::assert_snapshot!(snapshot(r#"@foo"bar""#), @r#"
    File
      Main "bar" StringDoubleQuote|StringLiteral
        Tag "foo" Identifier
    ---
    error at 4..9: missing whitespace between tag and node
    "#);
}

#[test]
fn missing_whitespace_before_list() {
    insta::assert_snapshot!(snapshot("@t(x){a}"), @r#"
    File
      Main "" BraceLeft|BraceRight
        Tag "t" ParenLeft|ParenRight|Identifier
          Main "x" Identifier
        Main "a" Identifier
    ---
    error at 5..6: missing whitespace between tag and node
    "#);
}

#[test]
fn one_error_per_position() {
    insta::assert_snapshot!(snapshot("a: )"), @r#"
    File
      Main "a" Identifier
    ---
    error at 3..4: expected a child node after `:`
    "#);
}
