//! Grammar productions for Metadesk.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//!
//! ```text
//! node              = [tag-list [whitespace-all]] (named-node | anonymous-node)
//! named-node        = label [":" [whitespace-node] (explicit-list | implicit-list)]
//! anonymous-node    = explicit-list
//! tag-list          = "@" label [explicit-list] [whitespace-all] [tag-list]
//! explicit-list     = opener explicit-children closer
//! explicit-children = [whitespace-all] [node [whitespace-all] [separator] explicit-children]
//! implicit-list     = implicit-children (separator | newline)
//! implicit-children = node [whitespace-line] [implicit-children]
//! root              = explicit-children
//! ```

mod lists;
mod nodes;

use crate::lexer::{Token, TokenKind};
use crate::tree::NodeFlags;

use super::core::Terminator;

fn reserved_char(token: &Token<'_>) -> Option<char> {
    (token.kind == TokenKind::Reserved)
        .then(|| token.raw.chars().next())
        .flatten()
}

fn is_opener(token: &Token<'_>) -> bool {
    reserved_char(token).is_some_and(|c| NodeFlags::opener(c).is_some())
}

fn is_closer(token: &Token<'_>) -> bool {
    reserved_char(token).is_some_and(|c| NodeFlags::closer(c).is_some())
}

fn separator(token: &Token<'_>) -> Option<Terminator> {
    match reserved_char(token)? {
        ',' => Some(Terminator::Comma),
        ';' => Some(Terminator::Semicolon),
        _ => None,
    }
}

/// Closing character matching an opener.
fn closer_for(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// Label-kind and string-style flags for a label token.
fn label_flags(token: &Token<'_>) -> NodeFlags {
    let flags = NodeFlags::label_kind(token.kind);
    match token.style {
        Some(style) => flags | NodeFlags::string_style(style),
        None => flags,
    }
}
