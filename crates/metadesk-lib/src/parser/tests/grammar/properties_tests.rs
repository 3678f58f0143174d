use indoc::indoc;
use proptest::prelude::*;

use crate::parser::parse;
use crate::tree::{NodeFlags, NodeKind, TreePrinter};

#[test]
fn label_kinds_are_exclusive() {
    let source = r#"ident 42 -1.5e+3 0xFF "dq" 'sq' `tick` """triple""" ''' single triplet ''' <=>"#;
    let result = parse(source);
    assert!(result.is_valid());

    let expected = [
        ("ident", NodeFlags::IDENTIFIER),
        ("42", NodeFlags::NUMERIC),
        ("-1.5e+3", NodeFlags::NUMERIC),
        ("0xFF", NodeFlags::NUMERIC),
        ("dq", NodeFlags::STRING_LITERAL | NodeFlags::STRING_DOUBLE_QUOTE),
        ("sq", NodeFlags::STRING_LITERAL | NodeFlags::STRING_SINGLE_QUOTE),
        ("tick", NodeFlags::STRING_LITERAL | NodeFlags::STRING_TICK),
        (
            "triple",
            NodeFlags::STRING_LITERAL | NodeFlags::STRING_DOUBLE_QUOTE | NodeFlags::STRING_TRIPLET,
        ),
        (
            " single triplet ",
            NodeFlags::STRING_LITERAL | NodeFlags::STRING_SINGLE_QUOTE | NodeFlags::STRING_TRIPLET,
        ),
        ("<=>", NodeFlags::SYMBOL),
    ];

    let root = result.tree.root();
    assert_eq!(root.child_count(), expected.len());
    for (node, (label, flags)) in root.children().zip(expected) {
        assert_eq!(node.string(), label);
        assert_eq!(node.flags(), flags, "{label}");
        assert_eq!((node.flags() & NodeFlags::LABEL_KINDS).bits().count_ones(), 1);
    }
}

#[test]
fn string_payload_keeps_escapes() {
    let result = parse(r#"greeting: "say \"hi\"""#);
    assert!(result.is_valid());

    let greeting = result.tree.root().first_child().unwrap();
    let value = greeting.first_child().unwrap();
    assert_eq!(value.string(), r#"say \"hi\""#);
    assert!(!value.is_anonymous());
}

#[test]
fn empty_string_label_is_not_anonymous() {
    let result = parse(r#""""#);
    assert!(result.is_valid());

    let node = result.tree.root().first_child().unwrap();
    assert_eq!(node.string(), "");
    assert!(!node.is_anonymous());
}

#[test]
fn back_references() {
    let result = parse("list: {a b c}");
    let list = result.tree.root().first_child().unwrap();
    let [a, b, c]: [_; 3] = list.children().collect::<Vec<_>>().try_into().unwrap();

    assert_eq!(a.parent(), Some(list));
    assert_eq!(list.parent().map(|p| p.kind()), Some(NodeKind::File));
    assert_eq!(a.prev_sibling(), None);
    assert_eq!(a.next_sibling(), Some(b));
    assert_eq!(b.prev_sibling(), Some(a));
    assert_eq!(c.next_sibling(), None);
    assert_eq!(list.last_child(), Some(c));
}

#[test]
fn well_formed_dump_reparses() {
    let input = indoc! {r#"
    // Config
    @version(2) settings: {
      name: "demo", retries: 3;
      @range(0, 100) ratio: 0.5
      ops: { (a: u8) -> *void }
      nested: [x: y: z, w]
      text: """multi
    line"""
    }
    "#};

    let result = parse(input);
    assert!(result.is_valid());

    let dump = TreePrinter::new(&result.tree).dump();
    let reparsed = parse(&dump);
    assert!(reparsed.is_valid(), "{dump}");
    assert_eq!(TreePrinter::new(&reparsed.tree).dump(), dump);
}

fn metadesk_like() -> impl Strategy<Value = String> {
    let atom = prop_oneof![
        Just("a".to_string()),
        Just("42".to_string()),
        Just("\"s\"".to_string()),
        Just("->".to_string()),
        Just(" ".to_string()),
        Just("\n".to_string()),
        Just(":".to_string()),
        Just(",".to_string()),
        Just(";".to_string()),
        Just("@".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        Just("[".to_string()),
        Just("]".to_string()),
        Just("{".to_string()),
        Just("}".to_string()),
        Just("// c\n".to_string()),
        Just("/*".to_string()),
        Just("*/".to_string()),
        Just("#".to_string()),
        Just("'".to_string()),
        Just("é".to_string()),
    ];
    prop::collection::vec(atom, 0..48).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn parse_always_terminates(source in metadesk_like()) {
        let result = parse(&source);
        for node in result.tree.root().descendants() {
            let range = node.node().range;
            prop_assert_eq!(node.raw(), &source[range]);
        }
        for diagnostic in &result.diagnostics {
            prop_assert!(usize::from(diagnostic.offset()) <= source.len());
        }
    }

    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,64}") {
        let _ = parse(&source);
    }

    #[test]
    fn valid_dumps_reparse(source in metadesk_like()) {
        let result = parse(&source);
        if result.is_valid() {
            let dump = TreePrinter::new(&result.tree).dump();
            let reparsed = parse(&dump);
            prop_assert!(reparsed.is_valid(), "source: {:?}\ndump: {:?}", source, dump);
        }
    }
}
