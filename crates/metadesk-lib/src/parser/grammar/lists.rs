use std::mem;

use super::{closer_for, is_closer, is_opener, reserved_char, separator};
use crate::diagnostics::DiagnosticKind;
use crate::lexer::token_sets;
use crate::parser::Parser;
use crate::parser::core::Terminator;
use crate::tree::{NodeFlags, NodeId};

/// Children of an explicit list and the delimiters that enclosed them.
pub(super) struct ExplicitList {
    pub children: Vec<NodeId>,
    pub flags: NodeFlags,
}

impl<'src> Parser<'src> {
    /// The whole document: explicit children closed by end of input.
    pub(crate) fn parse_root(&mut self) {
        let children = self.parse_explicit_children(false);
        let root = self.tree.root_id();
        self.tree.set_children(root, children);
    }

    /// `(` | `[` | `{`, children, then a closing delimiter.
    ///
    /// Returns `None` when input ends before the closer; the list is absent.
    pub(super) fn parse_explicit_list(&mut self) -> Option<ExplicitList> {
        let start = self.offset();
        let open = self.consume(token_sets::RESERVED, is_opener)?;
        let open_char = reserved_char(&open)?;
        let open_range = self.range_from(start);
        let mut flags = NodeFlags::opener(open_char).unwrap_or_default();

        let children = self.parse_explicit_children(true);

        let close_start = self.offset();
        let Some(close) = self.consume(token_sets::RESERVED, is_closer) else {
            if self.truncated {
                return Some(ExplicitList { children, flags });
            }
            self.error_unclosed_list(open_range, closer_for(open_char));
            return None;
        };
        let close_char = reserved_char(&close)?;
        flags |= NodeFlags::closer(close_char).unwrap_or_default();

        if !delimiters_compatible(open_char, close_char, !children.is_empty()) {
            let range = self.range_from(close_start);
            self.error_mismatched(range, open_char, close_char);
        }

        Some(ExplicitList { children, flags })
    }

    /// Nodes up to a closing delimiter, each optionally followed by `,` or `;`.
    ///
    /// At the root (`in_list == false`) end of input is the closer, and stray
    /// closing delimiters are reported and skipped.
    pub(super) fn parse_explicit_children(&mut self, in_list: bool) -> Vec<NodeId> {
        let mut children: Vec<NodeId> = Vec::new();
        let mut after_separator = NodeFlags::empty();
        let mut trailing_comment = "";

        loop {
            let comment = self
                .consume_whitespace_all()
                .map_or(trailing_comment, |t| t.string);
            trailing_comment = "";

            if self.should_stop() {
                break;
            }

            if let Some(closer) = self.check(token_sets::RESERVED, is_closer) {
                if in_list {
                    break;
                }
                self.error_msg(
                    DiagnosticKind::UnexpectedClosingDelimiter,
                    format!("`{}`", closer.raw),
                );
                self.bump();
                continue;
            }

            let Some(id) = self.parse_node(comment) else {
                self.implicit_terminator = None;
                continue;
            };
            self.tree.node_mut(id).flags |= after_separator;
            after_separator = NodeFlags::empty();
            children.push(id);

            if !self.pending_comment.is_empty() {
                trailing_comment = mem::take(&mut self.pending_comment);
            }

            let terminator = match self.implicit_terminator.take() {
                Some(t @ (Terminator::Comma | Terminator::Semicolon)) => Some(t),
                _ => {
                    if let Some(token) = self.consume_whitespace_all() {
                        trailing_comment = token.string;
                    }
                    self.consume_separator()
                }
            };

            let node = self.tree.node_mut(id);
            match terminator {
                Some(Terminator::Comma) => {
                    node.flags |= NodeFlags::BEFORE_COMMA;
                    after_separator = NodeFlags::AFTER_COMMA;
                }
                Some(Terminator::Semicolon) => {
                    node.flags |= NodeFlags::BEFORE_SEMICOLON;
                    after_separator = NodeFlags::AFTER_SEMICOLON;
                }
                Some(Terminator::Newline) | None => {}
            }
        }

        children
    }

    /// Nodes on the rest of the line after `label:`.
    ///
    /// Ends at a newline or separator (consumed and handed to the enclosing
    /// explicit list), at a closing delimiter, or at end of input.
    pub(super) fn parse_implicit_list(&mut self) -> Vec<NodeId> {
        let mut children = Vec::new();

        if self.should_stop() || self.at_closer() || self.at_terminator() {
            self.error(DiagnosticKind::ExpectedChildren);
            return children;
        }

        let mut comment = "";
        loop {
            if self.should_stop() || self.at_closer() {
                break;
            }
            if let Some(terminator) = self.consume_terminator() {
                self.implicit_terminator = Some(terminator);
                break;
            }

            let Some(id) = self.parse_node(mem::take(&mut comment)) else {
                break;
            };
            children.push(id);

            if self.implicit_terminator.is_some() {
                break;
            }
            if let Some(token) = self.consume_whitespace_line() {
                comment = token.string;
            }
        }

        if !comment.is_empty() {
            self.pending_comment = comment;
        }
        children
    }

    pub(super) fn at_opener(&self) -> bool {
        self.check(token_sets::RESERVED, is_opener).is_some()
    }

    fn at_closer(&self) -> bool {
        self.check(token_sets::RESERVED, is_closer).is_some()
    }

    fn at_terminator(&self) -> bool {
        self.check(token_sets::NEWLINE, |_| true).is_some()
            || self
                .check(token_sets::RESERVED, |t| separator(t).is_some())
                .is_some()
    }

    fn consume_separator(&mut self) -> Option<Terminator> {
        let token = self.consume(token_sets::RESERVED, |t| separator(t).is_some())?;
        separator(&token)
    }

    fn consume_terminator(&mut self) -> Option<Terminator> {
        if self.consume(token_sets::NEWLINE, |_| true).is_some() {
            return Some(Terminator::Newline);
        }
        self.consume_separator()
    }
}

/// `{` pairs only with `}`. Parens and brackets mix freely as interval
/// bounds, but a mixed pair needs at least one child.
fn delimiters_compatible(open: char, close: char, has_children: bool) -> bool {
    match (open == '{', close == '}') {
        (true, true) => true,
        (false, false) => closer_for(open) == close || has_children,
        _ => false,
    }
}
