use indoc::indoc;

use crate::diagnostics::DiagnosticKind;
use crate::parser::parse;
use crate::parser::tests::snapshot;
use crate::tree::NodeFlags;

#[test]
fn empty_input() {
    let result = parse("");
    assert!(result.is_valid());
    assert!(result.tree.is_empty());
    insta::assert_snapshot!(snapshot(""), @"File");
}

#[test]
fn empty_sets() {
    for source in ["{}", "()", "[]"] {
        let result = parse(source);
        assert!(result.is_valid(), "{source}");

        let root = result.tree.root();
        assert_eq!(root.child_count(), 1, "{source}");
        let set = root.child_at(0).unwrap();
        assert_eq!(set.string(), "");
        assert!(set.is_anonymous());
        assert_eq!(set.child_count(), 0);
    }

    insta::assert_snapshot!(snapshot("{}"), @r#"
    File
      Main "" BraceLeft|BraceRight
    "#);
}

#[test]
fn empty_mixed_sets_are_mismatched() {
    for source in ["[)", "(]"] {
        let result = parse(source);

        let root = result.tree.root();
        assert_eq!(root.child_count(), 1, "{source}");
        let set = root.child_at(0).unwrap();
        assert_eq!(set.string(), "");
        assert_eq!(set.child_count(), 0);

        assert_eq!(result.diagnostics.len(), 1, "{source}");
        let diagnostic = result.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.kind(), DiagnosticKind::MismatchedDelimiters);
    }

    insta::assert_snapshot!(snapshot("[)"), @r#"
    File
      Main "" ParenRight|BracketLeft
    ---
    error at 1..2: mismatched delimiters: `[` closed by `)`
    "#);
}

#[test]
fn unnamed_set() {
    let result = parse("{a, b, c}");
    assert!(result.is_valid());

    let set = result.tree.root().first_child().unwrap();
    let labels: Vec<_> = set.children().map(|c| c.string()).collect();
    assert_eq!(labels, ["a", "b", "c"]);

    insta::assert_snapshot!(snapshot("{a, b, c}"), @r#"
    File
      Main "" BraceLeft|BraceRight
        Main "a" BeforeComma|Identifier
        Main "b" BeforeComma|AfterComma|Identifier
        Main "c" AfterComma|Identifier
    "#);
}

#[test]
fn nested_sets() {
    insta::assert_snapshot!(snapshot("{a b:{1 2 3} c}"), @r#"
    File
      Main "" BraceLeft|BraceRight
        Main "a" Identifier
        Main "b" BraceLeft|BraceRight|Identifier
          Main "1" Numeric
          Main "2" Numeric
          Main "3" Numeric
        Main "c" Identifier
    "#);
}

#[test]
fn mixed_anonymous_and_operator_children() {
    let source = "foo: { (size: u64) -> *void }";
    let result = parse(source);
    assert!(result.is_valid());

    let foo = result.tree.root().child_by_string("foo").unwrap();
    let labels: Vec<_> = foo.children().map(|c| c.string()).collect();
    assert_eq!(labels, ["", "->", "*", "void"]);

    let size = foo.first_child().unwrap().first_child().unwrap();
    assert_eq!(size.string(), "size");
    assert_eq!(size.child_count(), 1);
    assert_eq!(size.first_child().unwrap().string(), "u64");

    insta::assert_snapshot!(snapshot(source), @r#"
    File
      Main "foo" BraceLeft|BraceRight|Identifier
        Main "" ParenLeft|ParenRight
          Main "size" Identifier
            Main "u64" Identifier
        Main "->" Symbol
        Main "*" Symbol
        Main "void" Identifier
    "#);
}

#[test]
fn separator_adjacency() {
    let result = parse("(a b, c; d)");
    assert!(result.is_valid());

    let set = result.tree.root().first_child().unwrap();
    let separators: Vec<_> = set
        .children()
        .map(|c| c.flags() & NodeFlags::SEPARATORS)
        .collect();
    assert_eq!(
        separators,
        [
            NodeFlags::empty(),
            NodeFlags::BEFORE_COMMA,
            NodeFlags::AFTER_COMMA | NodeFlags::BEFORE_SEMICOLON,
            NodeFlags::AFTER_SEMICOLON,
        ]
    );

    insta::assert_snapshot!(snapshot("(a b, c; d)"), @r#"
    File
      Main "" ParenLeft|ParenRight
        Main "a" Identifier
        Main "b" BeforeComma|Identifier
        Main "c" BeforeSemicolon|AfterComma|Identifier
        Main "d" AfterSemicolon|Identifier
    "#);
}

#[test]
fn interval_delimiters() {
    let cases = [
        ("(0, 100)", NodeFlags::PAREN_LEFT | NodeFlags::PAREN_RIGHT),
        ("(0, 100]", NodeFlags::PAREN_LEFT | NodeFlags::BRACKET_RIGHT),
        ("[0, 100)", NodeFlags::BRACKET_LEFT | NodeFlags::PAREN_RIGHT),
        ("[0, 100]", NodeFlags::BRACKET_LEFT | NodeFlags::BRACKET_RIGHT),
        ("{0, 100}", NodeFlags::BRACE_LEFT | NodeFlags::BRACE_RIGHT),
    ];

    for (source, expected) in cases {
        let result = parse(source);
        assert!(result.is_valid(), "{source}");

        let set = result.tree.root().first_child().unwrap();
        assert_eq!(set.flags() & NodeFlags::SET_DELIMITERS, expected, "{source}");
        assert_eq!(set.child_count(), 2, "{source}");
    }
}

#[test]
fn implicit_list_ends_at_newline() {
    insta::assert_snapshot!(snapshot("a: b c\nd"), @r#"
    File
      Main "a" Identifier
        Main "b" Identifier
        Main "c" Identifier
      Main "d" Identifier
    "#);
}

#[test]
fn implicit_list_separator_flags_owner() {
    insta::assert_snapshot!(snapshot("{a: b c, d}"), @r#"
    File
      Main "" BraceLeft|BraceRight
        Main "a" BeforeComma|Identifier
          Main "b" Identifier
          Main "c" Identifier
        Main "d" AfterComma|Identifier
    "#);
}

#[test]
fn nested_implicit_lists_end_together() {
    insta::assert_snapshot!(snapshot("a: b: c d, e"), @r#"
    File
      Main "a" BeforeComma|Identifier
        Main "b" Identifier
          Main "c" Identifier
          Main "d" Identifier
      Main "e" AfterComma|Identifier
    "#);
}

#[test]
fn implicit_list_ends_at_closer() {
    insta::assert_snapshot!(snapshot("(x: 1 2)"), @r#"
    File
      Main "" ParenLeft|ParenRight
        Main "x" Identifier
          Main "1" Numeric
          Main "2" Numeric
    "#);
}

#[test]
fn children_on_next_line() {
    let input = indoc! {"
    a:
      b c
    "};

    insta::assert_snapshot!(snapshot(input), @r#"
    File
      Main "a" Identifier
        Main "b" Identifier
        Main "c" Identifier
    "#);
}

#[test]
fn explicit_children_on_next_line() {
    let input = indoc! {"
    a:
    {
      b
    }
    "};

    insta::assert_snapshot!(snapshot(input), @r#"
    File
      Main "a" BraceLeft|BraceRight|Identifier
        Main "b" Identifier
    "#);
}

#[test]
fn blank_line_after_colon() {
    insta::assert_snapshot!(snapshot("a:\n\nb"), @r#"
    File
      Main "a" Identifier
      Main "b" Identifier
    ---
    error at 3..4: expected a child node after `:`
    "#);
}

#[test]
fn node_spans_cover_children() {
    let source = "  x: {y z}  w: 1 2\n";
    let result = parse(source);
    assert!(result.is_valid());

    let root = result.tree.root();
    let x = root.child_by_string("x").unwrap();
    assert_eq!(x.raw(), "x: {y z}");
    assert_eq!(u32::from(x.offset()), 2);

    let w = root.child_by_string("w").unwrap();
    assert_eq!(w.raw(), "w: 1 2");
}

#[test]
fn document() {
    let input = indoc! {r#"
    // Point type
    @struct Point: {
      x: f32,
      y: f32,
    }

    @fn length: { (p: Point) -> f32 }
    "#};

    insta::assert_snapshot!(snapshot(input), @r#"
    File
      Main "Point" BraceLeft|BraceRight|Identifier // " Point type"
        Tag "struct" Identifier
        Main "x" BeforeComma|Identifier
          Main "f32" Identifier
        Main "y" BeforeComma|AfterComma|Identifier
          Main "f32" Identifier
      Main "length" BraceLeft|BraceRight|Identifier
        Tag "fn" Identifier
        Main "" ParenLeft|ParenRight
          Main "p" Identifier
            Main "Point" Identifier
        Main "->" Symbol
        Main "f32" Identifier
    "#);
}
