//! Recursive-descent parser for the assignment language.
//!
//! # Architecture
//!
//! - One token of lookahead over an `Eof`-terminated stream; no backtracking
//! - One method per grammar production, see `grammar.rs`
//! - Syntax errors travel as `Err(ParseError)` through `?` and are caught only
//!   at the statement boundary
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a [`StatementList`].
//!
//! 1. A failing statement records one diagnostic and contributes no node
//! 2. Synchronization skips the offending token, then stops after the next `;`
//!    or before the next identifier
//! 3. Parsing resumes with a fresh statement attempt
//!
//! Nesting deeper than the recursion fuel fails only the enclosing statement.
//! Exec fuel exhaustion is the exception: it returns an actual
//! [`Error`](crate::Error) once the current statement finishes.

mod core;
mod grammar;
mod invariants;


pub use core::{ParseError, ParseResult, Parser};

use crate::PassResult;
use crate::ast::StatementList;
use crate::token::Token;

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Main entry point, with default fuel limits. Returns Err on exec fuel exhaustion.
pub fn parse(tokens: Vec<Token>) -> PassResult<StatementList> {
    let ParseResult {
        statements,
        diagnostics,
        ..
    } = Parser::new(tokens)
        .with_exec_fuel(Some(DEFAULT_EXEC_FUEL))
        .with_recursion_fuel(Some(DEFAULT_RECURSION_FUEL))
        .parse()?;
    Ok((statements, diagnostics))
}
