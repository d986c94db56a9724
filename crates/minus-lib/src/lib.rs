//! Minus: an error-recovering parser for a tiny assignment language.
//!
//! A program is a sequence of `id = expr;` statements whose right-hand sides
//! are built from numbers, parentheses, and the single operator `-`.
//!
//! # Example
//!
//! ```
//! use minus_lib::Program;
//!
//! let source = "A = (1 - 3) - 3; B = -1 - 3 - 2;";
//!
//! let program = Program::try_from(source).expect("out of fuel");
//! assert!(program.is_valid());
//! assert_eq!(program.render(), "A = 1 - 3 - 3;\nB = -1 - 3 - 2;\n");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod program;
pub mod render;
pub mod token;


/// Result type for passes that produce both output and diagnostics.
///
/// The pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use ast::{AssignmentStatement, Expr, Identifier, Node, StatementList};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter};
pub use parser::{ParseError, parse};
pub use program::Program;
pub use render::render;
pub use token::{Token, TokenKind};

/// Errors that abort a parse outright.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many tokens consumed).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    #[error("program parsing failed with {} errors", .0.error_count())]
    ProgramParseError(Diagnostics),
}

/// Result type for program operations.
pub type Result<T> = std::result::Result<T, Error>;
