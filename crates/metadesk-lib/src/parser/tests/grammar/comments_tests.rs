use indoc::indoc;

use crate::parser::parse;
use crate::parser::tests::snapshot;

#[test]
fn comments_attach_to_next_node() {
    let input = indoc! {"
    // first
    a
    /* second */ b
    "};

    insta::assert_snapshot!(snapshot(input), @r#"
    File
      Main "a" Identifier // " first"
      Main "b" Identifier // " second "
    "#);
}

#[test]
fn last_comment_wins() {
    let input = indoc! {"
    // one
    // two
    a
    "};

    let result = parse(input);
    assert_eq!(result.tree.root().first_child().unwrap().comment(), " two");
}

#[test]
fn comment_before_tags() {
    insta::assert_snapshot!(snapshot("// doc\n@tag x"), @r#"
    File
      Main "x" Identifier // " doc"
        Tag "tag" Identifier
    "#);
}

#[test]
fn comment_after_tags_takes_precedence() {
    insta::assert_snapshot!(snapshot("// a\n@tag // b\nx"), @r#"
    File
      Main "x" Identifier // " b"
        Tag "tag" Identifier
    "#);
}

#[test]
fn comment_inside_implicit_list() {
    insta::assert_snapshot!(snapshot("a: b /* c */ d"), @r#"
    File
      Main "a" Identifier
        Main "b" Identifier
        Main "d" Identifier // " c "
    "#);
}

#[test]
fn trailing_comment_moves_to_next_line() {
    insta::assert_snapshot!(snapshot("a: b // tail\nc"), @r#"
    File
      Main "a" Identifier
        Main "b" Identifier
      Main "c" Identifier // " tail"
    "#);
}

#[test]
fn comment_between_children() {
    let input = indoc! {"
    {
      a, // after a
      b
    }
    "};

    insta::assert_snapshot!(snapshot(input), @r#"
    File
      Main "" BraceLeft|BraceRight
        Main "a" BeforeComma|Identifier
        Main "b" AfterComma|Identifier // " after a"
    "#);
}

#[test]
fn nested_block_comment() {
    insta::assert_snapshot!(snapshot("/* outer /* inner */ still */ x"), @r#"
    File
      Main "x" Identifier // " outer /* inner */ still "
    "#);
}
