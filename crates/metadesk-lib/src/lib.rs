//! Metadesk: tokenizer and parser for a comment-preserving, tree-structured
//! data description language.
//!
//! # Example
//!
//! ```
//! use metadesk_lib::parse;
//!
//! let source = r#"
//!     @doc("A point") point: { x: f32, y: f32 }
//! "#;
//!
//! let result = parse(source);
//! assert!(result.diagnostics.is_empty());
//!
//! let point = result.tree.root().child_by_string("point").unwrap();
//! assert!(point.has_tag("doc"));
//! assert_eq!(point.child_count(), 2);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod tree;


pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use parser::{DEFAULT_RECURSION_FUEL, ParseResult, Parser, parse};
pub use tree::{GenerateFlags, Node, NodeFlags, NodeId, NodeKind, NodeRef, Tree, TreePrinter};

/// Errors that abort a parse.
///
/// Malformed input is never an error here; it is reported through
/// [`Diagnostics`] alongside the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many tokens consumed).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,
}

pub type Result<T> = std::result::Result<T, Error>;
