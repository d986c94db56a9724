//! Token kinds and tokens for the assignment language.
//!
//! `TokenKind` doubles as the lexer definition: Logos derives recognition for
//! the terminal kinds, while `Garbage` and `Eof` are synthesized by the lexer
//! and the parser respectively.

use std::fmt;

use logos::Logos;
use rowan::TextRange;
use serde::Serialize;

/// All token kinds. `#[repr(u8)]` keeps discriminants small enough for [`TokenSet`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[repr(u8)]
pub enum TokenKind {
    #[token("(")]
    LParen = 0,

    #[token(")")]
    RParen,

    #[token(";")]
    Semicolon,

    #[token("-")]
    Minus,

    #[token("=")]
    Eq,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Id,

    /// Kept as raw text; never converted to a numeric value.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    /// Coalesced unrecognized characters
    Garbage,

    /// End-of-input marker. Never consumed past.
    Eof,
}

use TokenKind::*;

impl TokenKind {
    /// Human-readable name used in diagnostics and dumps.
    pub fn describe(self) -> &'static str {
        match self {
            LParen => "'('",
            RParen => "')'",
            Semicolon => "';'",
            Minus => "'-'",
            Eq => "'='",
            Id => "identifier",
            Number => "number",
            Garbage => "unrecognized input",
            Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Immutable lexical unit: kind plus literal text.
///
/// Tokens from an external producer usually have no span; tokens from
/// [`lex`](crate::lexer::lex) carry the byte range they were sliced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    #[serde(skip)]
    pub span: Option<TextRange>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            span: None,
        }
    }

    pub fn at(kind: TokenKind, text: impl Into<String>, span: TextRange) -> Self {
        Self {
            kind,
            text: text.into(),
            span: Some(span),
        }
    }

    pub fn eof() -> Self {
        Self::new(Eof, "")
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == Eof
    }

    /// Text echoed into diagnostics. The end marker has no text of its own.
    pub fn display_text(&self) -> &str {
        if self.is_eof() {
            Eof.describe()
        } else {
            &self.text
        }
    }
}

/// 64-bit bitset of `TokenKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
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
        TokenSet::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        let kind = kind as u8;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        ALL_KINDS.into_iter().filter(move |k| self.contains(*k))
    }
}

const ALL_KINDS: [TokenKind; 9] = [LParen, RParen, Semicolon, Minus, Eq, Id, Number, Garbage, Eof];

impl fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// FIRST set of Expression.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[LParen, Minus, Number]);

    /// FIRST set of ExpressionTail.
    pub const TAIL_FIRST: TokenSet = TokenSet::single(Minus);

    /// Tokens a statement can start with; synchronization stops before these.
    pub const STATEMENT_START: TokenSet = TokenSet::single(Id);
}
