//! Lexer for the assignment language.
//!
//! The parser consumes any externally built token stream; this lexer is the
//! convenient way to get one from source text.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into a single `Garbage`
//! token instead of one token per character. The parser reports it like any
//! other unexpected token.

use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

use crate::token::{Token, TokenKind};

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into spanned tokens, always terminated by `Eof`.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                let span = lexer.span();
                if let Some(start) = error_start.take() {
                    push_garbage(source, start..span.start, &mut tokens);
                }
                tokens.push(Token::at(kind, lexer.slice(), range_to_text_range(span)));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    push_garbage(source, start..source.len(), &mut tokens);
                }
                break;
            }
        }
    }

    let end = source.len();
    tokens.push(Token::at(TokenKind::Eof, "", range_to_text_range(end..end)));
    tokens
}

/// Whitespace is skipped silently, so a garbage run may end in it. Trim it off the span.
fn push_garbage(source: &str, range: Range<usize>, tokens: &mut Vec<Token>) {
    let text = source[range.clone()].trim_end();
    let range = range.start..range.start + text.len();
    tokens.push(Token::at(
        TokenKind::Garbage,
        text,
        range_to_text_range(range),
    ));
}
