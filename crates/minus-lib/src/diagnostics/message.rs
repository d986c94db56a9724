use std::fmt;

use rowan::TextRange;

/// Every syntax error the parser can raise.
///
/// Each variant names the piece the user omitted or got wrong; all of them
/// abort the enclosing assignment statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    ExpectedIdentifier,
    ExpectedEquals,
    ExpectedExpression,
    ExpectedCloseParen,
    ExpectedSemicolon,
    /// Expression nesting reached the parser's recursion limit.
    NestingTooDeep,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ExpectedIdentifier => "expected identifier in assignment statement",
            Self::ExpectedEquals => "expected '=' after identifier in assignment statement",
            Self::ExpectedExpression => "expected '(' | number | '-' in expression",
            Self::ExpectedCloseParen => "expected ')' after expression",
            Self::ExpectedSemicolon => "expected ';' in assignment statement",
            Self::NestingTooDeep => "expression nested too deeply",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        format!("{}: {{}}", self.fallback_message())
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Text of the offending token, echoed in front of the message.
    pub(crate) found: String,
    /// Absent when the offending token came from a span-less token stream.
    pub(crate) range: Option<TextRange>,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn new(
        kind: DiagnosticKind,
        found: impl Into<String>,
        range: Option<TextRange>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            found: found.into(),
            range,
            message: message.into(),
        }
    }

    pub(crate) fn with_default_message(
        kind: DiagnosticKind,
        found: impl Into<String>,
        range: Option<TextRange>,
    ) -> Self {
        Self::new(kind, found, range, kind.fallback_message())
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.found, self.message)
    }
}
