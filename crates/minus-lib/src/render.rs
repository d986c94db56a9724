//! Canonical textual rendering of AST nodes.
//!
//! - statement list: one line per statement, each terminated by `\n`
//! - assignment: `<id> = <expr>;`
//! - binary: `<left> <op> <right>`
//! - unary: `<op><operand>`
//! - identifiers and numbers: raw text

use std::fmt::{self, Write};

use crate::ast::{AssignmentStatement, BinaryExpr, Expr, Identifier, Node, NumberLiteral};
use crate::ast::{StatementList, UnaryExpr};

/// Renders any node to its canonical string.
pub fn render<'a>(node: impl Into<Node<'a>>) -> String {
    let mut out = String::new();
    write_node(&mut out, node.into()).expect("String write never fails");
    out
}

pub fn write_node(w: &mut impl Write, node: Node<'_>) -> fmt::Result {
    match node {
        Node::Identifier(id) => w.write_str(&id.name),
        Node::Number(n) => w.write_str(&n.text),
        Node::Unary(u) => {
            w.write_str(&u.op)?;
            write_node(w, (&*u.operand).into())
        }
        Node::Binary(b) => {
            write_node(w, (&*b.left).into())?;
            write!(w, " {} ", b.op)?;
            write_node(w, (&*b.right).into())
        }
        Node::Assignment(a) => {
            write_node(w, Node::Identifier(&a.target))?;
            w.write_str(" = ")?;
            write_node(w, (&a.value).into())?;
            w.write_char(';')
        }
        Node::StatementList(list) => {
            for statement in list {
                write_node(w, Node::Assignment(statement))?;
                w.write_char('\n')?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, *self)
    }
}

macro_rules! display_via_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_node(f, Node::from(self))
                }
            }
        )*
    };
}

display_via_node!(
    Identifier,
    NumberLiteral,
    UnaryExpr,
    BinaryExpr,
    Expr,
    AssignmentStatement,
    StatementList,
);
