//! Side channel for syntax errors.
//!
//! The parser never aborts on a malformed statement; it records a diagnostic
//! here and moves on. Callers decide whether and how to show them.

mod message;
mod printer;


use crate::token::Token;

pub use message::DiagnosticKind;
pub use printer::DiagnosticsPrinter;

pub(crate) use message::DiagnosticMessage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic of the given kind, blaming `found`.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to add detail.
    pub fn report(&mut self, kind: DiagnosticKind, found: &Token) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(
                kind,
                found.display_text(),
                found.span,
            ),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Every diagnostic is an error; there are no warnings in this language.
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.messages.len()
    }

    pub fn kinds(&self) -> impl Iterator<Item = DiagnosticKind> + '_ {
        self.messages.iter().map(|m| m.kind)
    }

    pub(crate) fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.messages
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    /// Plain rendering, one diagnostic per line.
    pub fn render(&self) -> String {
        self.printer().render()
    }

    /// Annotated rendering against the source the tokens were lexed from.
    pub fn render_with_source(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
