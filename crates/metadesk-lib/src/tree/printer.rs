//! Re-serializes a tree as Metadesk text.
//!
//! Explicit lists are written one child per line, implicit lists stay on the
//! label's line. Kind, flags and location are written as line comments, so the
//! dump of a well-formed tree parses again without errors.

use std::fmt::Write;

use bitflags::bitflags;

use super::{NodeId, NodeKind, NodeRef, Tree};

bitflags! {
    /// Facets of a node included in the dump.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct GenerateFlags: u32 {
        const TAGS = 1 << 0;
        const TAG_ARGUMENTS = 1 << 1;
        const CHILDREN = 1 << 2;
        const COMMENTS = 1 << 3;
        const NODE_KIND = 1 << 4;
        const NODE_FLAGS = 1 << 5;
        const LOCATION = 1 << 6;

        const TREE = Self::TAGS.bits() | Self::TAG_ARGUMENTS.bits() | Self::CHILDREN.bits();
        const ALL = Self::TREE.bits()
            | Self::COMMENTS.bits()
            | Self::NODE_KIND.bits()
            | Self::NODE_FLAGS.bits()
            | Self::LOCATION.bits();
    }
}

impl Default for GenerateFlags {
    fn default() -> Self {
        Self::TREE
    }
}

pub struct TreePrinter<'t, 'src> {
    tree: &'t Tree<'src>,
    flags: GenerateFlags,
}

impl<'t, 'src> TreePrinter<'t, 'src> {
    pub fn new(tree: &'t Tree<'src>) -> Self {
        Self {
            tree,
            flags: GenerateFlags::TREE,
        }
    }

    pub fn flags(mut self, flags: GenerateFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Dumps the whole file.
    pub fn dump(&self) -> String {
        self.dump_node(self.tree.root_id())
    }

    /// Dumps one node and everything below it. The root dumps its children.
    pub fn dump_node(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.format_node(self.tree.get(id), &mut out)
            .expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.tree.root(), w)
    }

    fn format_node(&self, node: NodeRef<'t, 'src>, w: &mut impl Write) -> std::fmt::Result {
        if node.kind() != NodeKind::File {
            return self.format_block(node, 0, w);
        }
        for child in node.children() {
            self.format_block(child, 0, w)?;
        }
        Ok(())
    }

    fn format_block(
        &self,
        node: NodeRef<'t, 'src>,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);

        if self.flags.contains(GenerateFlags::COMMENTS) {
            for line in node.comment().lines().filter(|l| !l.trim().is_empty()) {
                writeln!(w, "{prefix}//{}", line.trim_end())?;
            }
        }
        if let Some(meta) = self.metadata(node) {
            writeln!(w, "{prefix}// {meta}")?;
        }

        write!(w, "{prefix}")?;
        self.format_head(node, w)?;

        if !self.flags.contains(GenerateFlags::CHILDREN) {
            return writeln!(w);
        }

        let sep = if node.is_anonymous() { "" } else { ": " };
        match delimiters(node) {
            Some((open, close)) if node.child_count() > 0 => {
                writeln!(w, "{sep}{open}")?;
                for child in node.children() {
                    self.format_block(child, indent + 1, w)?;
                }
                writeln!(w, "{prefix}{close}")
            }
            Some((open, close)) => writeln!(w, "{sep}{open}{close}"),
            None if node.child_count() > 0 => {
                write!(w, ": ")?;
                self.format_inline_list(node, " ", w)?;
                writeln!(w)
            }
            None => writeln!(w),
        }
    }

    /// Single-line form, used for implicit lists and tag arguments.
    fn format_inline(&self, node: NodeRef<'t, 'src>, w: &mut impl Write) -> std::fmt::Result {
        self.format_head(node, w)?;

        if !self.flags.contains(GenerateFlags::CHILDREN) {
            return Ok(());
        }

        let sep = if node.is_anonymous() { "" } else { ": " };
        match delimiters(node) {
            Some((open, close)) => {
                write!(w, "{sep}{open}")?;
                self.format_inline_list(node, ", ", w)?;
                write!(w, "{close}")
            }
            None if node.child_count() > 0 => {
                write!(w, ": ")?;
                self.format_inline_list(node, " ", w)
            }
            None => Ok(()),
        }
    }

    fn format_inline_list(
        &self,
        node: NodeRef<'t, 'src>,
        joiner: &str,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        for (i, child) in node.children().enumerate() {
            if i > 0 {
                w.write_str(joiner)?;
            }
            self.format_inline(child, w)?;
        }
        Ok(())
    }

    /// Tags and label.
    fn format_head(&self, node: NodeRef<'t, 'src>, w: &mut impl Write) -> std::fmt::Result {
        if self.flags.contains(GenerateFlags::TAGS) {
            for tag in node.tags() {
                write!(w, "@")?;
                write_label(tag, w)?;
                if self.flags.contains(GenerateFlags::TAG_ARGUMENTS)
                    && let Some((open, close)) = tag_delimiters(tag)
                {
                    write!(w, "{open}")?;
                    self.format_inline_list(tag, ", ", w)?;
                    write!(w, "{close}")?;
                }
                write!(w, " ")?;
            }
        }
        write_label(node, w)
    }

    fn metadata(&self, node: NodeRef<'t, 'src>) -> Option<String> {
        let mut parts = Vec::new();
        if self.flags.contains(GenerateFlags::NODE_KIND) {
            parts.push(format!("kind: {}", node.kind().as_str()));
        }
        if self.flags.contains(GenerateFlags::NODE_FLAGS) && !node.flags().is_empty() {
            parts.push(format!("flags: {}", node.flags()));
        }
        if self.flags.contains(GenerateFlags::LOCATION) {
            let (line, column) = line_col(self.tree.source(), node.offset().into());
            parts.push(format!("loc: {line}:{column}"));
        }
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Label as it appears in source: string literals get their quotes back.
fn write_label(node: NodeRef<'_, '_>, w: &mut impl Write) -> std::fmt::Result {
    match node.flags().to_string_style() {
        Some(style) => {
            let delimiter = style.delimiter();
            write!(w, "{delimiter}{}{delimiter}", node.string())
        }
        None => w.write_str(node.string()),
    }
}

/// Delimiters to write for a node's children, `None` for an implicit list.
fn delimiters(node: NodeRef<'_, '_>) -> Option<(char, char)> {
    match node.flags().delimiters() {
        (Some(open), Some(close)) => Some((open, close)),
        (Some(open), None) => Some((open, matching_closer(open))),
        _ if node.is_anonymous() => Some(('{', '}')),
        _ => None,
    }
}

fn tag_delimiters(tag: NodeRef<'_, '_>) -> Option<(char, char)> {
    match tag.flags().delimiters() {
        (None, None) if tag.child_count() == 0 => None,
        _ => Some(('(', ')')),
    }
}

fn matching_closer(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// 1-based line and column (in characters) of a byte offset.
fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}
