use super::recovered;

#[test]
fn garbage_in_expression() {
    insta::assert_snapshot!(recovered("A = 1 $; B = 2;"), @r"
    B = 2;
    ---
    $ expected ';' in assignment statement
    ");
}

#[test]
fn garbage_instead_of_expression() {
    insta::assert_snapshot!(recovered("A = @; B = 2;"), @r"
    B = 2;
    ---
    @ expected '(' | number | '-' in expression
    ");
}

#[test]
fn consecutive_garbage_is_one_token() {
    insta::assert_snapshot!(recovered("A = 1; ^^^ B = 2;"), @r"
    A = 1;
    B = 2;
    ---
    ^^^ expected identifier in assignment statement
    ");
}

#[test]
fn stray_close_paren() {
    insta::assert_snapshot!(recovered("A = 1); B = 2;"), @r"
    B = 2;
    ---
    ) expected ';' in assignment statement
    ");
}

#[test]
fn stray_semicolons() {
    insta::assert_snapshot!(recovered("A = 1;; B = 2;"), @r"
    A = 1;
    B = 2;
    ---
    ; expected identifier in assignment statement
    ");
}
