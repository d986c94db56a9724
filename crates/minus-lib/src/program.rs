//! Parse pipeline facade: tokens (or source) in, AST and diagnostics out.

use crate::ast::StatementList;
use crate::diagnostics::Diagnostics;
use crate::lexer::lex;
use crate::parser::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL, ParseResult, Parser};
use crate::printer::AstPrinter;
use crate::render::render;
use crate::token::Token;
use crate::{Error, Result};

/// A parsed program.
///
/// Create with [`from_tokens`](Self::from_tokens) or
/// [`from_source`](Self::from_source), optionally configure fuel limits,
/// then call [`exec`](Self::exec) to parse.
///
/// Check [`is_valid`](Self::is_valid) or [`diagnostics`](Self::diagnostics)
/// to find out whether any statement was dropped.
#[derive(Debug, Clone)]
pub struct Program<'a> {
    source: Option<&'a str>,
    tokens: Vec<Token>,
    statements: StatementList,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
    exec_fuel_consumed: u32,
    diagnostics: Diagnostics,
}

impl<'a> Program<'a> {
    /// Wraps an externally produced token stream.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            source: None,
            tokens,
            statements: StatementList::new(),
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            exec_fuel_consumed: 0,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Lexes `source`; diagnostics can then be rendered against it.
    pub fn from_source(source: &'a str) -> Self {
        Self {
            source: Some(source),
            ..Self::from_tokens(lex(source))
        }
    }

    /// Set execution fuel limit. None = infinite.
    ///
    /// Every consumed token costs one unit. Returns error from
    /// [`exec`](Self::exec) when exhausted.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Set expression nesting limit. None = infinite.
    ///
    /// Recursion fuel restores when exiting recursion. A statement nested
    /// deeper than the limit is dropped with a `NestingTooDeep` diagnostic.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    /// Parse the token stream.
    ///
    /// Returns `Err` only if exec fuel runs out. Syntax errors are
    /// collected and accessible via [`diagnostics`](Self::diagnostics).
    pub fn exec(mut self) -> Result<Self> {
        let parser = Parser::new(std::mem::take(&mut self.tokens))
            .with_exec_fuel(self.exec_fuel)
            .with_recursion_fuel(self.recursion_fuel);

        let ParseResult {
            statements,
            diagnostics,
            exec_fuel_consumed,
        } = parser.parse()?;
        self.statements = statements;
        self.diagnostics = diagnostics;
        self.exec_fuel_consumed = exec_fuel_consumed;
        Ok(self)
    }

    pub fn statements(&self) -> &StatementList {
        &self.statements
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn source(&self) -> Option<&'a str> {
        self.source
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// True when every statement parsed cleanly.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    /// Canonical text of the surviving statements.
    pub fn render(&self) -> String {
        render(&self.statements)
    }

    pub fn dump_ast(&self) -> String {
        AstPrinter::new(&self.statements).dump()
    }

    /// Diagnostics annotated against the source when there is one.
    pub fn dump_diagnostics(&self) -> String {
        match self.source {
            Some(source) => self.diagnostics.render_with_source(source),
            None => self.diagnostics.render(),
        }
    }

    /// The AST, or every diagnostic if any statement was dropped.
    pub fn into_valid(self) -> Result<StatementList> {
        if self.is_valid() {
            Ok(self.statements)
        } else {
            Err(Error::ProgramParseError(self.diagnostics))
        }
    }
}

impl<'a> TryFrom<&'a str> for Program<'a> {
    type Error = Error;

    fn try_from(source: &'a str) -> Result<Self> {
        Self::from_source(source).exec()
    }
}

impl TryFrom<Vec<Token>> for Program<'_> {
    type Error = Error;

    fn try_from(tokens: Vec<Token>) -> Result<Self> {
        Self::from_tokens(tokens).exec()
    }
}
