use super::recovered;
use crate::Program;
use crate::token::{Token, TokenKind};

#[test]
fn empty_input() {
    let program = Program::try_from("").unwrap();

    assert!(program.statements().is_empty());
    assert_eq!(program.diagnostics().len(), 1);
    insta::assert_snapshot!(program.diagnostics().render(), @"end of input expected identifier in assignment statement");
}

#[test]
fn whitespace_only_input() {
    let program = Program::try_from("  \n\t ").unwrap();

    assert!(program.statements().is_empty());
    assert_eq!(program.diagnostics().len(), 1);
}

#[test]
fn only_end_marker() {
    let program = Program::try_from(vec![Token::eof()]).unwrap();

    assert!(program.statements().is_empty());
    assert_eq!(program.diagnostics().len(), 1);
}

#[test]
fn missing_expression_at_end() {
    insta::assert_snapshot!(recovered("A = 1; B ="), @r"
    A = 1;
    ---
    end of input expected '(' | number | '-' in expression
    ");
}

#[test]
fn missing_final_semicolon() {
    insta::assert_snapshot!(recovered("A = 1; B = 2"), @r"
    A = 1;
    ---
    end of input expected ';' in assignment statement
    ");
}

#[test]
fn unclosed_group() {
    insta::assert_snapshot!(recovered("A = (1 - 2; B = 3;"), @r"
    B = 3;
    ---
    ; expected ')' after expression
    ");
}

#[test]
fn unclosed_group_at_end() {
    insta::assert_snapshot!(recovered("A = ((1"), @r"
    ---
    end of input expected ')' after expression
    ");
}

#[test]
fn dangling_tail() {
    insta::assert_snapshot!(recovered("A = 1 -; B = 2;"), @r"
    B = 2;
    ---
    ; expected '(' | number | '-' in expression
    ");
}

#[test]
fn lone_identifier() {
    let tokens = vec![Token::new(TokenKind::Id, "A")];
    let program = Program::try_from(tokens).unwrap();

    assert!(program.statements().is_empty());
    insta::assert_snapshot!(program.diagnostics().render(), @"end of input expected '=' after identifier in assignment statement");
}
