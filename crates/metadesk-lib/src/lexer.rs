//! Tokenizer for Metadesk source.
//!
//! The tokenizer is a pure function from a text cursor to the next token:
//! [`next_token`] never fails and never allocates. Garbage input produces a
//! failure-kind token (`BrokenComment`, `BrokenStringLiteral`, `BadCharacter`)
//! spanning at least one character, so repeatedly tokenizing the remainder
//! always terminates and the raw slices partition the input exactly.
//!
//! Whitespace, comments and strings are scanned by hand (they need depth
//! counters and escape tracking). Everything else is classified by a small
//! Logos automaton over identifiers, numbers, symbol runs and reserved
//! characters.

use logos::Logos;
use rowan::{TextRange, TextSize};

/// Token kinds. The first eight are well-formed tokens, the last three are
/// lexical faults the grammar layer decides how to report.
///
/// `#[repr(u8)]` keeps discriminants small enough for [`TokenSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Identifier = 0,
    Numeric,
    StringLiteral,
    Symbol,
    Reserved,
    Comment,
    Whitespace,
    Newline,
    BrokenComment,
    BrokenStringLiteral,
    BadCharacter,
}

impl TokenKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline | Self::Comment)
    }

    #[inline]
    pub fn is_broken(self) -> bool {
        matches!(
            self,
            Self::BrokenComment | Self::BrokenStringLiteral | Self::BadCharacter
        )
    }
}

/// Quote family of a string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Single,
    Double,
    Backtick,
}

impl Quote {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            '`' => Some(Self::Backtick),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }
}

/// How a string literal was delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StringStyle {
    pub quote: Quote,
    /// Delimited by three quote characters on each side (may span lines).
    pub triplet: bool,
}

impl StringStyle {
    pub fn delimiter_len(self) -> usize {
        if self.triplet { 3 } else { 1 }
    }

    /// The delimiter as written on one side of the literal.
    pub fn delimiter(self) -> String {
        std::iter::repeat_n(self.quote.as_char(), self.delimiter_len()).collect()
    }
}

/// One token: `raw` is the exact consumed slice, `string` the semantic payload
/// (delimiters stripped for strings and comments, equal to `raw` otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    pub raw: &'s str,
    pub string: &'s str,
    /// Set for string literals, including broken ones.
    pub style: Option<StringStyle>,
}

impl<'s> Token<'s> {
    fn simple(kind: TokenKind, raw: &'s str) -> Self {
        Self {
            kind,
            raw,
            string: raw,
            style: None,
        }
    }

    /// Length in bytes of the consumed slice. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Whether this is the reserved character `c`.
    #[inline]
    pub fn is_reserved(&self, c: char) -> bool {
        self.kind == TokenKind::Reserved && self.raw.starts_with(c)
    }
}

/// Atoms classified by the automaton. Longest match wins; the patterns
/// are pairwise disjoint at equal length so no priorities are needed.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    /// Loose numeric literal: also covers `0xFF`, `10ms`, `1.5e-3`.
    #[regex(r"-?[0-9]([eE][+-]|[A-Za-z0-9._])*")]
    Numeric,

    #[regex(r"[~!$%^&*=+<.>/?|\-]+")]
    Symbol,

    #[regex(r"[{}()\[\]#,;:@]")]
    Reserved,
}

impl Atom {
    fn kind(self) -> TokenKind {
        match self {
            Self::Identifier => TokenKind::Identifier,
            Self::Numeric => TokenKind::Numeric,
            Self::Symbol => TokenKind::Symbol,
            Self::Reserved => TokenKind::Reserved,
        }
    }
}

#[inline]
fn is_line_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\t' | '\x0C' | '\x0B')
}

/// Returns the token at the start of `text`, or `None` at end of input.
pub fn next_token(text: &str) -> Option<Token<'_>> {
    let first = text.chars().next()?;
    let token = match first {
        '\n' => Token::simple(TokenKind::Newline, &text[..1]),
        c if is_line_whitespace(c) => {
            let end = text
                .find(|c: char| !is_line_whitespace(c))
                .unwrap_or(text.len());
            Token::simple(TokenKind::Whitespace, &text[..end])
        }
        '/' if text[1..].starts_with('/') => lex_line_comment(text),
        '/' if text[1..].starts_with('*') => lex_block_comment(text),
        c => match Quote::from_char(c) {
            Some(quote) => lex_string(text, quote),
            None => lex_atom(text),
        },
    };
    debug_assert!(!token.raw.is_empty(), "tokenizer produced an empty token");
    Some(token)
}

/// Like [`next_token`], also returning the text after the token.
pub fn split_token(text: &str) -> Option<(Token<'_>, &str)> {
    let token = next_token(text)?;
    Some((token, &text[token.len()..]))
}

fn lex_line_comment(text: &str) -> Token<'_> {
    let end = text.find(['\n', '\r']).unwrap_or(text.len());
    Token {
        kind: TokenKind::Comment,
        raw: &text[..end],
        string: &text[2..end],
        style: None,
    }
}

/// Block comments nest: `/* a /* b */ c */` is one comment.
fn lex_block_comment(text: &str) -> Token<'_> {
    let bytes = text.as_bytes();
    let mut depth = 1usize;
    let mut i = 2;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return Token {
                        kind: TokenKind::Comment,
                        raw: &text[..i],
                        string: &text[2..i - 2],
                        style: None,
                    };
                }
            }
            _ => i += 1,
        }
    }

    Token {
        kind: TokenKind::BrokenComment,
        raw: text,
        string: &text[2..],
        style: None,
    }
}

/// Scans a string literal. A backslash only escapes the active quote
/// character or another backslash. Single-delimited strings break at a
/// newline without consuming it; triplet strings may span lines.
fn lex_string(text: &str, quote: Quote) -> Token<'_> {
    let delim = quote.as_char() as u8;
    let bytes = text.as_bytes();
    let triplet = bytes.len() >= 3 && bytes[1] == delim && bytes[2] == delim;
    let style = StringStyle { quote, triplet };
    let open = style.delimiter_len();

    let broken = |end: usize| Token {
        kind: TokenKind::BrokenStringLiteral,
        raw: &text[..end],
        string: &text[open..end],
        style: Some(style),
    };

    let mut run = 0;
    let mut i = open;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\\' && matches!(bytes.get(i + 1), Some(&next) if next == delim || next == b'\\')
        {
            run = 0;
            i += 2;
            continue;
        }
        if b == b'\n' && !triplet {
            return broken(i);
        }
        if b == delim {
            run += 1;
            i += 1;
            if run == open {
                return Token {
                    kind: TokenKind::StringLiteral,
                    raw: &text[..i],
                    string: &text[open..i - open],
                    style: Some(style),
                };
            }
            continue;
        }
        run = 0;
        i += 1;
    }

    broken(text.len())
}

fn lex_atom(text: &str) -> Token<'_> {
    let mut lexer = Atom::lexer(text);
    match lexer.next() {
        Some(Ok(atom)) if lexer.span().start == 0 => {
            Token::simple(atom.kind(), &text[..lexer.span().end])
        }
        _ => {
            let len = text.chars().next().map_or(1, char::len_utf8);
            Token::simple(TokenKind::BadCharacter, &text[..len])
        }
    }
}

/// Token with its absolute position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken<'s> {
    pub token: Token<'s>,
    pub range: TextRange,
}

pub(crate) fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

/// Tokenizes the whole source, trivia included.
pub fn lex(source: &str) -> Vec<SpannedToken<'_>> {
    let mut tokens = Vec::new();
    let mut rest = source;
    while let Some((token, remaining)) = split_token(rest) {
        let start = source.len() - rest.len();
        tokens.push(SpannedToken {
            token,
            range: text_range(start, start + token.len()),
        });
        rest = remaining;
    }
    tokens
}

/// 64-bit bitset of `TokenKind`s for O(1) membership testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[TokenKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u8;
            assert!(kind < 64, "TokenKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        TokenSet(1 << kind as u8)
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        self.0 & (1 << kind as u8) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

pub mod token_sets {
    use super::{TokenKind, TokenSet};

    /// Tokens that can serve as a node or tag label.
    pub const LABEL: TokenSet = TokenSet::new(&[
        TokenKind::Identifier,
        TokenKind::Numeric,
        TokenKind::StringLiteral,
        TokenKind::Symbol,
    ]);

    /// Whitespace that does not end a line.
    pub const WHITESPACE_LINE: TokenSet =
        TokenSet::new(&[TokenKind::Whitespace, TokenKind::Comment]);

    pub const WHITESPACE_ALL: TokenSet = WHITESPACE_LINE.union(TokenSet::single(TokenKind::Newline));

    pub const NEWLINE: TokenSet = TokenSet::single(TokenKind::Newline);

    pub const RESERVED: TokenSet = TokenSet::single(TokenKind::Reserved);
}
