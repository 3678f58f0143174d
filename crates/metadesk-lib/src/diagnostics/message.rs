use rowan::{TextRange, TextSize};
use serde::{Serialize, Serializer};

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Priority rationale:
/// - Structural errors discard or truncate whole lists
/// - Missing pieces are root causes the user should fix first
/// - Stray tokens are local mistakes the parser skips over
/// - Lexical faults are reported where the grammar meets them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    // Whole lists are affected
    UnclosedList,
    MismatchedDelimiters,
    TooDeeplyNested,

    // User omitted something required
    ExpectedLabel,
    ExpectedChildren,
    MissingWhitespace,

    // User wrote something that doesn't belong
    TagArgumentsNotParenthesized,
    UnexpectedClosingDelimiter,
    UnexpectedToken,

    // Broken tokens
    UnterminatedComment,
    UnterminatedString,
    BadCharacter,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedList => "unbalanced delimiter",
            Self::MismatchedDelimiters => "mismatched delimiters",
            Self::TooDeeplyNested => "too deeply nested",

            Self::ExpectedLabel => "expected a label",
            Self::ExpectedChildren => "expected a child node after `:`",
            Self::MissingWhitespace => "missing whitespace between tag and node",

            Self::TagArgumentsNotParenthesized => "tag arguments must be enclosed in `(` and `)`",
            Self::UnexpectedClosingDelimiter => "unexpected closing delimiter",
            Self::UnexpectedToken => "unexpected token",

            Self::UnterminatedComment => "unterminated comment",
            Self::UnterminatedString => "unterminated string literal",
            Self::BadCharacter => "unexpected character",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedList => "unbalanced delimiter: missing closing `{}`".to_string(),
            Self::MismatchedDelimiters => "mismatched delimiters: {}".to_string(),
            Self::BadCharacter => "unexpected character `{}`".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_text_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

/// One recorded parse error: a message and the source position it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in rich output).
    #[serde(serialize_with = "serialize_text_range")]
    pub(crate) range: TextRange,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) related: Vec<RelatedInfo>,
}

fn serialize_text_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

impl Diagnostic {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    /// Byte offset into the source where the error was detected.
    pub fn offset(&self) -> TextSize {
        self.range.start()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
