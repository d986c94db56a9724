//! Parser state and low-level cursor operations.

use std::cell::Cell;

use tracing::{debug, warn};

use crate::Error;
use crate::ast::StatementList;
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::token::{Token, TokenKind, TokenSet};

#[derive(Debug)]
pub struct ParseResult {
    pub statements: StatementList,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// Raised on an unmet expectation. Only the statement production catches it.
///
/// By the time a `ParseError` exists its diagnostic has already been recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} {}", .token.display_text(), .message)]
pub struct ParseError {
    pub token: Token,
    pub message: String,
}

pub(super) type PResult<T> = std::result::Result<T, ParseError>;

/// Cursor over an `Eof`-terminated token sequence.
///
/// The position never moves past the `Eof` token, so [`peek`](Self::peek) is total.
pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) debug_fuel: Cell<u32>,
    exec_fuel_initial: Option<u32>,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl Parser {
    /// Normalizes the stream to exactly one trailing end marker.
    ///
    /// A trailing `Eof` is kept (it may carry a span); any other `Eof` is
    /// dropped so it cannot cut the program short. `Garbage` passes through
    /// and is reported like any other unexpected token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        let end = match tokens.last() {
            Some(last) if last.is_eof() => tokens.pop(),
            _ => None,
        };
        let before = tokens.len();
        tokens.retain(|t| !t.is_eof());
        if tokens.len() != before {
            debug!(dropped = before - tokens.len(), "interior end markers removed");
        }
        tokens.push(end.unwrap_or_else(Token::eof));
        Self {
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
            depth: 0,
            debug_fuel: Cell::new(256),
            exec_fuel_initial: None,
            exec_fuel_remaining: None,
            recursion_fuel_limit: None,
            fatal_error: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_initial = limit;
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel_limit = limit;
        self
    }

    /// Runs the whole grammar. The parser is spent afterwards.
    pub fn parse(mut self) -> Result<ParseResult, Error> {
        let statements = self.parse_program();
        self.finish(statements)
    }

    fn finish(self, statements: StatementList) -> Result<ParseResult, Error> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        let exec_fuel_consumed = match (self.exec_fuel_initial, self.exec_fuel_remaining) {
            (Some(initial), Some(remaining)) => initial.saturating_sub(remaining),
            _ => 0,
        };
        Ok(ParseResult {
            statements,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        })
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.is_at_end() || self.has_fatal_error()
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    fn consume_exec_fuel(&mut self) {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                if self.fatal_error.is_none() {
                    warn!(pos = self.pos, "execution fuel exhausted");
                    self.fatal_error = Some(Error::ExecFuelExhausted);
                }
                return;
            }
            *remaining -= 1;
        }
    }

    /// Current token, not consumed.
    pub fn peek(&self) -> &Token {
        self.ensure_progress();
        &self.tokens[self.pos]
    }

    pub fn is_at_end(&self) -> bool {
        self.tokens[self.pos].is_eof()
    }

    /// Token right behind the cursor; `None` before the first advance.
    pub fn previous(&self) -> Option<&Token> {
        self.pos.checked_sub(1).map(|i| &self.tokens[i])
    }

    /// Returns the current token and steps over it, unless it is the end marker.
    pub fn advance(&mut self) -> &Token {
        let at = self.pos;
        if !self.is_at_end() {
            self.reset_debug_fuel();
            self.consume_exec_fuel();
            self.pos += 1;
        }
        &self.tokens[at]
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(super) fn currently_is_one_of(&self, set: TokenSet) -> bool {
        set.contains(self.peek().kind)
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        self.match_any(TokenSet::single(kind))
    }

    /// Consumes the current token if its kind is in `set`; otherwise leaves the cursor alone.
    pub fn match_any(&mut self, set: TokenSet) -> bool {
        if self.currently_is_one_of(set) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Like [`eat`](Self::eat), but hands back the consumed token's text.
    pub(super) fn eat_text(&mut self, kind: TokenKind) -> Option<String> {
        self.check(kind).then(|| self.advance().text.clone())
    }

    /// On mismatch: records a diagnostic and raises, without consuming.
    pub fn consume(&mut self, kind: TokenKind, expected: DiagnosticKind) -> PResult<Token> {
        if self.check(kind) {
            return Ok(self.advance().clone());
        }
        Err(self.error(expected))
    }

    /// Blames the current token, records the diagnostic, and returns the signal to propagate.
    pub(super) fn error(&mut self, kind: DiagnosticKind) -> ParseError {
        let token = self.peek().clone();
        self.diagnostics.report(kind, &token).emit();
        debug!(
            pos = self.pos,
            found = token.display_text(),
            ?kind,
            "parse error"
        );
        ParseError {
            token,
            message: kind.fallback_message().to_string(),
        }
    }

    pub(super) fn enter_recursion(&mut self) -> PResult<()> {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            warn!(depth = self.depth, "recursion limit exceeded");
            return Err(self.error(DiagnosticKind::NestingTooDeep));
        }
        self.depth += 1;
        self.reset_debug_fuel();
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }
}
