use super::{is_closer, label_flags};
use crate::diagnostics::DiagnosticKind;
use crate::lexer::{TokenKind, text_range, token_sets};
use crate::parser::Parser;
use crate::tree::{Node, NodeFlags, NodeId, NodeKind};

impl<'src> Parser<'src> {
    /// Tags, then an anonymous explicit list or a label with optional children.
    ///
    /// `comment` is attached to the node unless another comment follows its tags.
    /// Returns `None` if no node starts here; the cause has been reported and
    /// the cursor has moved past it.
    pub(super) fn parse_node(&mut self, comment: &'src str) -> Option<NodeId> {
        if !self.enter_recursion() {
            return None;
        }
        let node = self.parse_node_inner(comment);
        self.exit_recursion();
        node
    }

    fn parse_node_inner(&mut self, mut comment: &'src str) -> Option<NodeId> {
        let start = self.offset();

        let mut tags = Vec::new();
        if self.check_reserved('@') {
            let (tag_ids, tag_comment) = self.parse_tag_list();
            tags = tag_ids;
            if let Some(c) = tag_comment {
                comment = c;
            }
        }

        let glued_to_tags = !tags.is_empty() && self.last.is_some_and(|t| !t.kind.is_trivia());
        if glued_to_tags
            && (self.at_opener() || self.check(token_sets::LABEL, |_| true).is_some())
        {
            self.error(DiagnosticKind::MissingWhitespace);
        }

        let mut node = Node::new(NodeKind::Main);
        let children;
        let end;

        if self.at_opener() {
            let list = self.parse_explicit_list()?;
            node.flags = list.flags;
            children = list.children;
            end = self.offset();
        } else if let Some(label) = self.check(token_sets::LABEL, |_| true) {
            self.bump();
            node.string = label.string;
            node.flags = label_flags(&label);
            let (label_children, label_end) = self.parse_label_children(&mut node.flags);
            children = label_children;
            end = label_end;
        } else {
            self.error_no_node();
            return None;
        }

        let range = text_range(start, end);
        node.range = range;
        node.raw = self.slice(range);
        node.comment = comment;

        let id = self.tree.alloc(node);
        self.tree.set_tags(id, tags);
        self.tree.set_children(id, children);
        Some(id)
    }

    /// Optional `:` and the children after a label. Returns the children and
    /// the end offset of the node.
    fn parse_label_children(&mut self, flags: &mut NodeFlags) -> (Vec<NodeId>, usize) {
        if self.consume_reserved(':').is_none() {
            return (Vec::new(), self.offset());
        }
        let colon_end = self.offset();
        self.consume_whitespace_node();

        if self.at_opener() {
            return match self.parse_explicit_list() {
                Some(list) => {
                    *flags |= list.flags;
                    (list.children, self.offset())
                }
                None => (Vec::new(), colon_end),
            };
        }

        let children = self.parse_implicit_list();
        let end = children
            .last()
            .map_or(colon_end, |&last| self.tree.node(last).range.end().into());
        (children, end)
    }

    /// `@label(args)`, repeated with whitespace in between.
    ///
    /// Returns the tags and the last comment seen after them.
    fn parse_tag_list(&mut self) -> (Vec<NodeId>, Option<&'src str>) {
        let mut tags = Vec::new();
        let mut comment = None;

        while let Some(at) = self.consume_reserved('@') {
            let start = self.offset() - at.len();
            if let Some(tag) = self.parse_tag(start) {
                tags.push(tag);
            }
            if let Some(token) = self.consume_whitespace_all() {
                comment = Some(token.string);
            }
        }

        (tags, comment)
    }

    /// Label and arguments of one tag, `@` already consumed.
    fn parse_tag(&mut self, start: usize) -> Option<NodeId> {
        let Some(label) = self.consume(token_sets::LABEL, |_| true) else {
            self.error(DiagnosticKind::ExpectedLabel);
            return None;
        };

        let mut tag = Node::new(NodeKind::Tag);
        tag.string = label.string;
        tag.flags = label_flags(&label);

        let mut args = Vec::new();
        let mut end = self.offset();
        if self.at_opener() {
            let args_start = self.offset();
            if let Some(list) = self.parse_explicit_list() {
                let parenthesized = NodeFlags::PAREN_LEFT | NodeFlags::PAREN_RIGHT;
                if list.flags != parenthesized && !self.truncated {
                    let range = self.range_from(args_start);
                    self.error_at(DiagnosticKind::TagArgumentsNotParenthesized, range);
                }
                tag.flags |= list.flags;
                args = list.children;
                end = self.offset();
            }
        }

        let range = text_range(start, end);
        tag.range = range;
        tag.raw = self.slice(range);

        let id = self.tree.alloc(tag);
        self.tree.set_children(id, args);
        Some(id)
    }

    /// Reports the token where a node was expected and skips it.
    ///
    /// Closing delimiters and end of input are left for the enclosing list.
    fn error_no_node(&mut self) {
        let token = match self.peek() {
            Some(token) if !is_closer(&token) => token,
            _ => {
                self.error(DiagnosticKind::ExpectedLabel);
                return;
            }
        };

        match token.kind {
            TokenKind::BrokenComment => self.error(DiagnosticKind::UnterminatedComment),
            TokenKind::BrokenStringLiteral => self.error(DiagnosticKind::UnterminatedString),
            TokenKind::BadCharacter => self.error_msg(DiagnosticKind::BadCharacter, token.raw),
            _ => self.error_msg(
                DiagnosticKind::UnexpectedToken,
                format!("`{}`", token.raw.escape_debug()),
            ),
        }
        self.bump();
    }
}
