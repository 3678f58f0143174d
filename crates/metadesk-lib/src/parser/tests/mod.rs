mod grammar;
mod recovery;

use std::fmt::Write;

use crate::parser::parse;
use crate::tree::{NodeKind, NodeRef};

/// Outline of the parsed tree, one node per line with tags before children,
/// followed by the diagnostics after a `---` line.
pub(super) fn snapshot(source: &str) -> String {
    let result = parse(source);
    let mut out = String::new();
    outline(result.tree.root(), 0, &mut out);
    if !result.diagnostics.is_empty() {
        out.push_str("---\n");
        for diagnostic in &result.diagnostics {
            writeln!(out, "{diagnostic}").unwrap();
        }
    }
    out
}

fn outline(node: NodeRef<'_, '_>, indent: usize, out: &mut String) {
    write!(out, "{}{}", "  ".repeat(indent), node.kind().as_str()).unwrap();
    if node.kind() != NodeKind::File {
        write!(out, " {:?}", node.string()).unwrap();
    }
    if !node.flags().is_empty() {
        write!(out, " {}", node.flags()).unwrap();
    }
    if !node.comment().is_empty() {
        write!(out, " // {:?}", node.comment()).unwrap();
    }
    out.push('\n');
    for tag in node.tags() {
        outline(tag, indent + 1, out);
    }
    for child in node.children() {
        outline(child, indent + 1, out);
    }
}
