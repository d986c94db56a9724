use crate::Program;
use crate::ast::{Expr, MINUS};

fn value_of(src: &str) -> Expr {
    let program = Program::expect_valid(src);
    program.statements().statements[0].value.clone()
}

#[test]
fn binary() {
    let res = Program::expect_valid_ast("A = 5 - 2;");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Binary -
          Number 5
          Number 2
    ");
}

#[test]
fn chain_nests_to_the_right() {
    let res = Program::expect_valid_ast("A = 1 - 2 - 3;");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Binary -
          Number 1
          Binary -
            Number 2
            Number 3
    ");
}

#[test]
fn chain_structure() {
    let value = value_of("A = 1 - 2 - 3;");

    let outer = value.as_binary().unwrap();
    assert_eq!(*outer.left, Expr::number("1"));
    assert_eq!(outer.op, MINUS);

    let inner = outer.right.as_binary().unwrap();
    assert_eq!(*inner.left, Expr::number("2"));
    assert_eq!(*inner.right, Expr::number("3"));

    // Left-nested grouping would render the same text, so compare the trees.
    let left_nested = Expr::binary(
        Expr::binary(Expr::number("1"), MINUS, Expr::number("2")),
        MINUS,
        Expr::number("3"),
    );
    assert_eq!(value.to_string(), left_nested.to_string());
    assert_ne!(value, left_nested);
}

#[test]
fn parenthesized_group_is_left_operand() {
    let value = value_of("A = ( 1 - 3 ) - 3;");

    assert_eq!(
        value,
        Expr::binary(
            Expr::binary(Expr::number("1"), MINUS, Expr::number("3")),
            MINUS,
            Expr::number("3"),
        )
    );
}

#[test]
fn parentheses_leave_no_node() {
    let res = Program::expect_valid_ast("A = ((7));");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Number 7
    ");
}

#[test]
fn nested_groups_with_tails() {
    let res = Program::expect_valid_ast("A = ((1 - 2) - 3) - 4;");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Binary -
          Binary -
            Binary -
              Number 1
              Number 2
            Number 3
          Number 4
    ");
}

#[test]
fn unary_takes_whole_expression() {
    let res = Program::expect_valid_ast("A = -1 - 2;");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Unary -
          Binary -
            Number 1
            Number 2
    ");
}

#[test]
fn repeated_unary() {
    let value = value_of("A = --1;");

    assert_eq!(
        value,
        Expr::unary(MINUS, Expr::unary(MINUS, Expr::number("1")))
    );
    assert_eq!(value.to_string(), "--1");
}

#[test]
fn group_limits_unary() {
    let res = Program::expect_valid_ast("A = (-1) - 2;");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Binary -
          Unary -
            Number 1
          Number 2
    ");
}

#[test]
fn tail_operand_may_start_with_minus() {
    let res = Program::expect_valid_ast("A = (1 - 2) - - - 3;");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Binary -
          Binary -
            Number 1
            Number 2
          Unary -
            Unary -
              Number 3
    ");
}

#[test]
fn tail_operand_may_be_group() {
    let res = Program::expect_valid_ast("A = 1 - (2 - 3);");

    insta::assert_snapshot!(res, @r"
    StatementList
      Assignment A
        Binary -
          Number 1
          Binary -
            Number 2
            Number 3
    ");
}

#[test]
fn operator_is_always_minus() {
    let value = value_of("A = -(1 - -2) - 3;");

    fn ops(expr: &Expr, out: &mut Vec<String>) {
        match expr {
            Expr::Number(_) => {}
            Expr::Unary(u) => {
                out.push(u.op.clone());
                ops(&u.operand, out);
            }
            Expr::Binary(b) => {
                out.push(b.op.clone());
                ops(&b.left, out);
                ops(&b.right, out);
            }
        }
    }

    let mut seen = Vec::new();
    ops(&value, &mut seen);
    assert_eq!(seen.len(), 4);
    assert!(seen.iter().all(|op| op == MINUS));
}
