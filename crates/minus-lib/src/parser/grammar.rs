//! Grammar productions, one method per rule:
//!
//! ```text
//! Program        := Statement Statement*
//! Statement      := Identifier '=' Expression ';'
//! Expression     := '(' Expression ')' ExpressionTail
//!                 | '-' Expression
//!                 | Number ExpressionTail
//! ExpressionTail := '-' Expression
//!                 | ε
//! ```
//!
//! A tail always attaches to the base it follows and its operand is a full
//! Expression, so chains nest to the right: `1 - 2 - 3` is `1 - (2 - 3)`.

use tracing::{debug, trace};

use super::core::{PResult, Parser};
use crate::ast::{AssignmentStatement, Expr, Identifier, MINUS, StatementList};
use crate::diagnostics::DiagnosticKind;
use crate::token::TokenKind;
use crate::token::token_sets::{EXPR_FIRST, STATEMENT_START, TAIL_FIRST};

/// Trailing `- Expression` fragment, waiting for the base it belongs to.
#[derive(Debug)]
struct Tail {
    op: &'static str,
    operand: Expr,
}

impl Parser {
    pub(crate) fn parse_program(&mut self) -> StatementList {
        let mut list = StatementList::new();

        // The first statement is mandatory, so even an empty stream gets one attempt.
        if let Some(statement) = self.parse_statement() {
            list.push(statement);
        }

        while !self.should_stop() {
            if let Some(statement) = self.parse_statement() {
                list.push(statement);
            }
        }

        list
    }

    /// The only place a `ParseError` is caught. A failed statement yields nothing.
    fn parse_statement(&mut self) -> Option<AssignmentStatement> {
        trace!(pos = self.pos, "statement");
        match self.parse_assignment() {
            Ok(statement) => Some(statement),
            Err(_) if self.has_fatal_error() => None,
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    fn parse_assignment(&mut self) -> PResult<AssignmentStatement> {
        let target = self.consume(TokenKind::Id, DiagnosticKind::ExpectedIdentifier)?;
        self.consume(TokenKind::Eq, DiagnosticKind::ExpectedEquals)?;
        let value = self.parse_expr()?;
        self.consume(TokenKind::Semicolon, DiagnosticKind::ExpectedSemicolon)?;

        Ok(AssignmentStatement::new(Identifier::new(target.text), value))
    }

    pub(super) fn parse_expr(&mut self) -> PResult<Expr> {
        self.enter_recursion()?;
        let expr = self.parse_expr_inner();
        self.exit_recursion();
        expr
    }

    fn parse_expr_inner(&mut self) -> PResult<Expr> {
        if !self.currently_is_one_of(EXPR_FIRST) {
            return Err(self.error(DiagnosticKind::ExpectedExpression));
        }

        if self.eat(TokenKind::LParen) {
            let inner = self.parse_expr()?;
            self.consume(TokenKind::RParen, DiagnosticKind::ExpectedCloseParen)?;
            return self.attach_tail(inner);
        }

        if let Some(text) = self.eat_text(TokenKind::Number) {
            return self.attach_tail(Expr::number(text));
        }

        // '-' is all that is left of EXPR_FIRST
        self.advance();
        let operand = self.parse_expr()?;
        Ok(Expr::unary(MINUS, operand))
    }

    /// `None` is the ε alternative.
    fn parse_expr_tail(&mut self) -> PResult<Option<Tail>> {
        if !self.match_any(TAIL_FIRST) {
            return Ok(None);
        }
        let operand = self.parse_expr()?;
        Ok(Some(Tail { op: MINUS, operand }))
    }

    fn attach_tail(&mut self, base: Expr) -> PResult<Expr> {
        Ok(match self.parse_expr_tail()? {
            Some(Tail { op, operand }) => Expr::binary(base, op, operand),
            None => base,
        })
    }

    /// Discards tokens until the next likely statement boundary.
    ///
    /// The token the error was raised on is always skipped, even when it is a
    /// `;` or an identifier. After that, stop right after a `;` or right before
    /// an identifier.
    fn synchronize(&mut self) {
        let start = self.pos;
        self.advance();

        while !self.is_at_end() {
            if self
                .previous()
                .is_some_and(|t| t.kind == TokenKind::Semicolon)
            {
                break;
            }
            if self.currently_is_one_of(STATEMENT_START) {
                break;
            }
            self.advance();
        }

        debug!(from = start, to = self.pos, "synchronized");
    }
}
