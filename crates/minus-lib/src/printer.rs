//! Indented structural dump of the AST.
//!
//! Unlike the canonical rendering, the dump shows how nodes nest, so
//! `1 - (2 - 3)` and `(1 - 2) - 3` print differently.

use std::fmt::Write;

use crate::ast::{Expr, Node};

pub struct AstPrinter<'a> {
    root: Node<'a>,
    indent: usize,
}

impl<'a> AstPrinter<'a> {
    pub fn new(root: impl Into<Node<'a>>) -> Self {
        Self {
            root: root.into(),
            indent: 2,
        }
    }

    /// Spaces per nesting level (default 2).
    pub fn indent(mut self, width: usize) -> Self {
        self.indent = width;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, node: Node<'_>, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        let pad = depth * self.indent;
        match node {
            Node::StatementList(list) => {
                writeln!(w, "{:pad$}StatementList", "")?;
                for statement in list {
                    self.format_node(Node::Assignment(statement), depth + 1, w)?;
                }
            }
            Node::Assignment(a) => {
                writeln!(w, "{:pad$}Assignment {}", "", a.target.name)?;
                self.format_expr(&a.value, depth + 1, w)?;
            }
            Node::Identifier(id) => writeln!(w, "{:pad$}Identifier {}", "", id.name)?,
            Node::Number(n) => writeln!(w, "{:pad$}Number {}", "", n.text)?,
            Node::Unary(u) => {
                writeln!(w, "{:pad$}Unary {}", "", u.op)?;
                self.format_expr(&u.operand, depth + 1, w)?;
            }
            Node::Binary(b) => {
                writeln!(w, "{:pad$}Binary {}", "", b.op)?;
                self.format_expr(&b.left, depth + 1, w)?;
                self.format_expr(&b.right, depth + 1, w)?;
            }
        }
        Ok(())
    }

    fn format_expr(&self, expr: &Expr, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(expr.into(), depth, w)
    }
}
