//! Recursive-descent parser producing a [`Tree`] of tagged nodes.
//!
//! # Architecture
//!
//! The parser pulls tokens on demand from [`lexer::next_token`](crate::lexer::next_token)
//! through a byte cursor over the source. There is no token buffer: lookahead
//! re-tokenizes the remaining text, which is cheap because the tokenizer is a
//! pure function of its input.
//!
//! - Whitespace classes matter: newlines end implicit lists, and `:` must be
//!   separated from its children by at most one line break
//! - Comments are attached to the node that follows them
//! - Separator flags are set on a node by the list that owns it, after the
//!   node itself has returned
//!
//! # Recovery Strategy
//!
//! The parser always produces a tree. Grammar errors are recorded as
//! diagnostics and parsing continues:
//!
//! 1. A token that cannot start a node is reported and skipped
//! 2. A node that fails inside an implicit list truncates only that list
//! 3. An explicit list without a closing delimiter is reported at its opener
//!    and treated as absent
//! 4. On recursion limit, the remaining input is skipped and the tree built
//!    so far is kept
//!
//! Exec fuel exhaustion is the only outcome returned as an [`Error`](crate::Error).

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use core::Parser;

use crate::diagnostics::Diagnostics;
use crate::tree::Tree;

/// Maximum node nesting depth unless configured otherwise.
pub const DEFAULT_RECURSION_FUEL: u32 = 256;

/// Tree and diagnostics of one parse.
///
/// The tree is always present. An empty diagnostics list means the input was
/// well formed.
#[derive(Debug, Clone)]
pub struct ParseResult<'src> {
    pub tree: Tree<'src>,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

impl ParseResult<'_> {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parses `source` with the default configuration.
///
/// Without an exec fuel budget there is no fatal outcome, so this never fails.
pub fn parse(source: &str) -> ParseResult<'_> {
    let (result, _) = Parser::new(source).run();
    result
}
