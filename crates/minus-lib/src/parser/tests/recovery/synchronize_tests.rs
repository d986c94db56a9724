use super::recovered;
use crate::Program;
use crate::diagnostics::DiagnosticKind;

#[test]
fn malformed_statement_is_dropped() {
    let res = Program::expect_invalid("A = 1; B = ; C = 2;");

    insta::assert_snapshot!(res, @"; expected '(' | number | '-' in expression");
    insta::assert_snapshot!(recovered("A = 1; B = ; C = 2;"), @r"
    A = 1;
    C = 2;
    ---
    ; expected '(' | number | '-' in expression
    ");
}

#[test]
fn exactly_one_diagnostic_per_dropped_statement() {
    let program = Program::try_from("A = 1; B = ; C = 2;").unwrap();
    assert_eq!(program.statements().len(), 2);
    assert_eq!(program.diagnostics().len(), 1);
    assert_eq!(
        program.diagnostics().kinds().collect::<Vec<_>>(),
        [DiagnosticKind::ExpectedExpression]
    );
}

#[test]
fn missing_equals() {
    insta::assert_snapshot!(recovered("A 1; B = 2;"), @r"
    B = 2;
    ---
    1 expected '=' after identifier in assignment statement
    ");
}

#[test]
fn missing_semicolon_swallows_next_statement() {
    insta::assert_snapshot!(recovered("A = 1 B = 2; C = 3;"), @r"
    C = 3;
    ---
    B expected ';' in assignment statement
    ");
}

#[test]
fn offending_identifier_is_skipped() {
    insta::assert_snapshot!(recovered("A B = 1; C = 2;"), @r"
    C = 2;
    ---
    B expected '=' after identifier in assignment statement
    ");
}

#[test]
fn stops_before_next_identifier() {
    insta::assert_snapshot!(recovered("A = = 1 B = 2;"), @r"
    B = 2;
    ---
    = expected '(' | number | '-' in expression
    ");
}

#[test]
fn identifier_inside_expression() {
    insta::assert_snapshot!(recovered("A = 1 - x; B = 2;"), @r"
    B = 2;
    ---
    x expected '(' | number | '-' in expression
    ");
}

#[test]
fn every_statement_fails() {
    insta::assert_snapshot!(recovered("= ; = ;"), @r"
    ---
    = expected identifier in assignment statement
    = expected identifier in assignment statement
    ");
}

#[test]
fn consecutive_malformed_statements() {
    let src = "A = 1; B = ; C ; D = (2; E = 3;";
    insta::assert_snapshot!(recovered(src), @r"
    A = 1;
    E = 3;
    ---
    ; expected '(' | number | '-' in expression
    ; expected '=' after identifier in assignment statement
    ; expected ')' after expression
    ");
}

#[test]
fn statement_starting_with_number() {
    insta::assert_snapshot!(recovered("1 = 2; A = 3;"), @r"
    A = 3;
    ---
    1 expected identifier in assignment statement
    ");
}
