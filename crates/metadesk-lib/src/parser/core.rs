//! Parser state machine and low-level cursor operations.

use std::cell::Cell;

use rowan::{TextRange, TextSize};

use super::{DEFAULT_RECURSION_FUEL, ParseResult};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::lexer::{Token, TokenKind, TokenSet, next_token, text_range, token_sets};
use crate::tree::Tree;

const DEBUG_FUEL: u32 = 256;

/// Token that ended an implicit list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Terminator {
    Newline,
    Comma,
    Semicolon,
}

/// Cursor over the source plus the tree and diagnostics under construction.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) pos: usize,
    pub(super) last: Option<Token<'src>>,
    pub(super) tree: Tree<'src>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    /// Input was cut short by the recursion limit.
    pub(super) truncated: bool,
    /// Set by an implicit list that consumed its terminator. Every enclosing
    /// implicit list stops when it sees this; the nearest explicit list takes it.
    pub(super) implicit_terminator: Option<Terminator>,
    /// Comment after the last node of an implicit list, owed to the next node.
    pub(super) pending_comment: &'src str,
    last_diagnostic_pos: Option<TextSize>,
    pub(super) debug_fuel: Cell<u32>,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            last: None,
            tree: Tree::new(source),
            diagnostics: Diagnostics::new(),
            depth: 0,
            truncated: false,
            implicit_terminator: None,
            pending_comment: "",
            last_diagnostic_pos: None,
            debug_fuel: Cell::new(DEBUG_FUEL),
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: Some(DEFAULT_RECURSION_FUEL),
            fatal_error: None,
        }
    }

    /// Budget of consumed tokens. `None` means unlimited.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    /// Maximum node nesting depth. `None` means unlimited.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    pub fn parse(self) -> Result<ParseResult<'src>, Error> {
        match self.run() {
            (_, Some(err)) => Err(err),
            (result, None) => Ok(result),
        }
    }

    pub(super) fn run(mut self) -> (ParseResult<'src>, Option<Error>) {
        let _span = tracing::debug_span!("parse", len = self.source.len()).entered();

        self.parse_root();

        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        tracing::debug!(
            nodes = self.tree.len(),
            diagnostics = self.diagnostics.len(),
            exec_fuel_consumed,
            "parse finished"
        );

        let result = ParseResult {
            tree: self.tree,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        };
        (result, self.fatal_error)
    }

    /// Byte offset of the cursor: `source.len() - remaining.len()`.
    #[inline]
    pub(super) fn offset(&self) -> usize {
        self.pos
    }

    pub(super) fn done(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.done() || self.fatal_error.is_some()
    }

    fn remaining(&self) -> &'src str {
        let source: &'src str = self.source;
        &source[self.pos..]
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(DEBUG_FUEL);
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    pub(super) fn peek(&self) -> Option<Token<'src>> {
        self.ensure_progress();
        next_token(self.remaining())
    }

    /// Next token, if its kind is in `set` and `predicate` holds. Never consumes.
    pub(super) fn check(
        &self,
        set: TokenSet,
        predicate: impl Fn(&Token<'src>) -> bool,
    ) -> Option<Token<'src>> {
        self.peek()
            .filter(|token| set.contains(token.kind) && predicate(token))
    }

    /// Like [`check`](Self::check), advancing past the token on success.
    pub(super) fn consume(
        &mut self,
        set: TokenSet,
        predicate: impl Fn(&Token<'src>) -> bool,
    ) -> Option<Token<'src>> {
        let token = self.check(set, predicate)?;
        self.advance(token);
        Some(token)
    }

    /// Consumes matching tokens until the first that doesn't match.
    pub(super) fn consume_all(
        &mut self,
        set: TokenSet,
        predicate: impl Fn(&Token<'src>) -> bool,
    ) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.consume(set, &predicate) {
            tokens.push(token);
            self.ensure_bounded(tokens.len());
        }
        tokens
    }

    /// Consumes the next token whatever it is.
    pub(super) fn bump(&mut self) -> Option<Token<'src>> {
        let token = self.peek()?;
        self.advance(token);
        Some(token)
    }

    fn advance(&mut self, token: Token<'src>) {
        self.reset_debug_fuel();
        self.consume_exec_fuel();
        self.pos += token.len();
        self.last = Some(token);
    }

    pub(super) fn check_reserved(&self, c: char) -> bool {
        self.check(token_sets::RESERVED, |t| t.is_reserved(c))
            .is_some()
    }

    pub(super) fn consume_reserved(&mut self, c: char) -> Option<Token<'src>> {
        self.consume(token_sets::RESERVED, |t| t.is_reserved(c))
    }

    /// Spaces and comments on the current line. Returns the last comment.
    pub(super) fn consume_whitespace_line(&mut self) -> Option<Token<'src>> {
        let tokens = self.consume_all(token_sets::WHITESPACE_LINE, |_| true);
        last_comment(tokens)
    }

    /// Spaces, comments and newlines. Returns the last comment.
    pub(super) fn consume_whitespace_all(&mut self) -> Option<Token<'src>> {
        let tokens = self.consume_all(token_sets::WHITESPACE_ALL, |_| true);
        last_comment(tokens)
    }

    /// Whitespace spanning at most one line break. Returns the last comment.
    pub(super) fn consume_whitespace_node(&mut self) -> Option<Token<'src>> {
        let comment = self.consume_whitespace_line();
        if self.consume(token_sets::NEWLINE, |_| true).is_none() {
            return comment;
        }
        self.consume_whitespace_line().or(comment)
    }

    /// Span of the next token, empty at end of input.
    pub(super) fn current_range(&self) -> TextRange {
        let len = self.peek().map_or(0, |t| t.len());
        text_range(self.pos, self.pos + len)
    }

    pub(super) fn range_from(&self, start: usize) -> TextRange {
        text_range(start, self.pos)
    }

    pub(super) fn slice(&self, range: TextRange) -> &'src str {
        let source: &'src str = self.source;
        &source[range]
    }

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_range();
        self.error_at(kind, range);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_range();
        self.error_at_msg(kind, range, message);
    }

    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).emit();
    }

    pub(super) fn error_at_msg(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
    ) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics.report(kind, range).message(message).emit();
    }

    /// Delimiter pairing errors are always recorded, even where another
    /// error already sits at the same offset.
    pub(super) fn error_mismatched(&mut self, range: TextRange, open: char, close: char) {
        self.last_diagnostic_pos = Some(range.start());
        self.diagnostics
            .report(DiagnosticKind::MismatchedDelimiters, range)
            .message(format!("`{open}` closed by `{close}`"))
            .emit();
    }

    pub(super) fn error_unclosed_list(&mut self, open_range: TextRange, closer: char) {
        self.last_diagnostic_pos = Some(open_range.start());
        // Spans to end of input so the whole unterminated region is underlined
        let full_range = TextRange::new(open_range.start(), TextSize::from(self.pos as u32));
        self.diagnostics
            .report(DiagnosticKind::UnclosedList, full_range)
            .message(closer.to_string())
            .related_to("list started here", open_range)
            .emit();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            self.skip_rest_too_deep();
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    fn skip_rest_too_deep(&mut self) {
        tracing::warn!(
            depth = self.depth,
            offset = self.pos,
            "recursion limit reached, skipping rest of input"
        );
        let range = text_range(self.pos, self.source.len());
        self.error_at(DiagnosticKind::TooDeeplyNested, range);
        self.pos = self.source.len();
        self.truncated = true;
    }
}

fn last_comment(tokens: Vec<Token<'_>>) -> Option<Token<'_>> {
    tokens
        .into_iter()
        .rev()
        .find(|t| t.kind == TokenKind::Comment)
}
