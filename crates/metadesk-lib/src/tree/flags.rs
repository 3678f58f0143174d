//! Node flag vocabulary.
//!
//! Flags are organized into four disjoint groups, each maskable on its own:
//! - **Set delimiters**: which of `( ) [ ] { }` opened and closed the node's list
//! - **Separators**: whether a `,` or `;` followed or preceded the node
//! - **String delimiters**: quote family and triplet-ness of a string label
//! - **Label kinds**: which token kind produced the label

use bitflags::bitflags;

use crate::lexer::{Quote, StringStyle, TokenKind};

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct NodeFlags: u32 {
        // === Set delimiters (bits 0-7) ===
        const PAREN_LEFT = 1 << 0;
        const PAREN_RIGHT = 1 << 1;
        const BRACKET_LEFT = 1 << 2;
        const BRACKET_RIGHT = 1 << 3;
        const BRACE_LEFT = 1 << 4;
        const BRACE_RIGHT = 1 << 5;

        // === Separators (bits 8-15) ===
        const BEFORE_SEMICOLON = 1 << 8;
        const AFTER_SEMICOLON = 1 << 9;
        const BEFORE_COMMA = 1 << 10;
        const AFTER_COMMA = 1 << 11;

        // === String delimiters (bits 16-23) ===
        const STRING_SINGLE_QUOTE = 1 << 16;
        const STRING_DOUBLE_QUOTE = 1 << 17;
        const STRING_TICK = 1 << 18;
        const STRING_TRIPLET = 1 << 19;

        // === Label kinds (bits 24-31) ===
        const NUMERIC = 1 << 24;
        const IDENTIFIER = 1 << 25;
        const STRING_LITERAL = 1 << 26;
        const SYMBOL = 1 << 27;
    }
}

/// Display names, in bit order.
const NAMES: &[(NodeFlags, &str)] = &[
    (NodeFlags::PAREN_LEFT, "ParenLeft"),
    (NodeFlags::PAREN_RIGHT, "ParenRight"),
    (NodeFlags::BRACKET_LEFT, "BracketLeft"),
    (NodeFlags::BRACKET_RIGHT, "BracketRight"),
    (NodeFlags::BRACE_LEFT, "BraceLeft"),
    (NodeFlags::BRACE_RIGHT, "BraceRight"),
    (NodeFlags::BEFORE_SEMICOLON, "BeforeSemicolon"),
    (NodeFlags::AFTER_SEMICOLON, "AfterSemicolon"),
    (NodeFlags::BEFORE_COMMA, "BeforeComma"),
    (NodeFlags::AFTER_COMMA, "AfterComma"),
    (NodeFlags::STRING_SINGLE_QUOTE, "StringSingleQuote"),
    (NodeFlags::STRING_DOUBLE_QUOTE, "StringDoubleQuote"),
    (NodeFlags::STRING_TICK, "StringTick"),
    (NodeFlags::STRING_TRIPLET, "StringTriplet"),
    (NodeFlags::NUMERIC, "Numeric"),
    (NodeFlags::IDENTIFIER, "Identifier"),
    (NodeFlags::STRING_LITERAL, "StringLiteral"),
    (NodeFlags::SYMBOL, "Symbol"),
];

impl NodeFlags {
    pub const SET_DELIMITERS: Self = Self::PAREN_LEFT
        .union(Self::PAREN_RIGHT)
        .union(Self::BRACKET_LEFT)
        .union(Self::BRACKET_RIGHT)
        .union(Self::BRACE_LEFT)
        .union(Self::BRACE_RIGHT);

    pub const SEPARATORS: Self = Self::BEFORE_SEMICOLON
        .union(Self::AFTER_SEMICOLON)
        .union(Self::BEFORE_COMMA)
        .union(Self::AFTER_COMMA);

    pub const STRING_DELIMITERS: Self = Self::STRING_SINGLE_QUOTE
        .union(Self::STRING_DOUBLE_QUOTE)
        .union(Self::STRING_TICK)
        .union(Self::STRING_TRIPLET);

    pub const LABEL_KINDS: Self = Self::NUMERIC
        .union(Self::IDENTIFIER)
        .union(Self::STRING_LITERAL)
        .union(Self::SYMBOL);

    /// All four group masks, in bit order.
    pub const GROUPS: [Self; 4] = [
        Self::SET_DELIMITERS,
        Self::SEPARATORS,
        Self::STRING_DELIMITERS,
        Self::LABEL_KINDS,
    ];

    /// Flag for an opening delimiter character.
    pub fn opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::PAREN_LEFT),
            '[' => Some(Self::BRACKET_LEFT),
            '{' => Some(Self::BRACE_LEFT),
            _ => None,
        }
    }

    /// Flag for a closing delimiter character.
    pub fn closer(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::PAREN_RIGHT),
            ']' => Some(Self::BRACKET_RIGHT),
            '}' => Some(Self::BRACE_RIGHT),
            _ => None,
        }
    }

    /// Label-kind flag for a token kind that can label a node.
    pub fn label_kind(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Numeric => Self::NUMERIC,
            TokenKind::Identifier => Self::IDENTIFIER,
            TokenKind::StringLiteral => Self::STRING_LITERAL,
            TokenKind::Symbol => Self::SYMBOL,
            _ => Self::empty(),
        }
    }

    pub fn string_style(style: StringStyle) -> Self {
        let quote = match style.quote {
            Quote::Single => Self::STRING_SINGLE_QUOTE,
            Quote::Double => Self::STRING_DOUBLE_QUOTE,
            Quote::Backtick => Self::STRING_TICK,
        };
        if style.triplet {
            quote | Self::STRING_TRIPLET
        } else {
            quote
        }
    }

    /// Inverse of [`string_style`](Self::string_style), `None` for non-string labels.
    pub fn to_string_style(self) -> Option<StringStyle> {
        let quote = if self.contains(Self::STRING_SINGLE_QUOTE) {
            Quote::Single
        } else if self.contains(Self::STRING_DOUBLE_QUOTE) {
            Quote::Double
        } else if self.contains(Self::STRING_TICK) {
            Quote::Backtick
        } else {
            return None;
        };
        Some(StringStyle {
            quote,
            triplet: self.contains(Self::STRING_TRIPLET),
        })
    }

    /// Opening and closing characters recorded in the set-delimiter group.
    pub fn delimiters(self) -> (Option<char>, Option<char>) {
        let open = if self.contains(Self::PAREN_LEFT) {
            Some('(')
        } else if self.contains(Self::BRACKET_LEFT) {
            Some('[')
        } else if self.contains(Self::BRACE_LEFT) {
            Some('{')
        } else {
            None
        };
        let close = if self.contains(Self::PAREN_RIGHT) {
            Some(')')
        } else if self.contains(Self::BRACKET_RIGHT) {
            Some(']')
        } else if self.contains(Self::BRACE_RIGHT) {
            Some('}')
        } else {
            None
        };
        (open, close)
    }

    /// Names of the set flags, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
    }
}

impl std::fmt::Display for NodeFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for name in self.names() {
            if !first {
                f.write_str("|")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}
