//! Owned AST for the assignment language.
//!
//! The tree is strictly owned: every child belongs to exactly one parent and
//! nodes are never mutated after the parser builds them. Parentheses group
//! during parsing only; they leave no node behind.

use serde::Serialize;

/// The only operator the grammar knows.
pub const MINUS: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub name: String,
}

/// Numbers stay raw text; nothing here evaluates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NumberLiteral {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnaryExpr {
    pub op: String,
    pub operand: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub op: String,
    pub right: Box<Expr>,
}

/// Anything that can sit on the right-hand side of `=`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind")]
pub enum Expr {
    Number(NumberLiteral),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssignmentStatement {
    pub target: Identifier,
    pub value: Expr,
}

/// Root of every parse. Only fully formed statements are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StatementList {
    pub statements: Vec<AssignmentStatement>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Expr {
    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(NumberLiteral { text: text.into() })
    }

    pub fn unary(op: impl Into<String>, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op: op.into(),
            operand: Box::new(operand),
        })
    }

    pub fn binary(left: Expr, op: impl Into<String>, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        })
    }

    pub fn as_binary(&self) -> Option<&BinaryExpr> {
        match self {
            Expr::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_unary(&self) -> Option<&UnaryExpr> {
        match self {
            Expr::Unary(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&NumberLiteral> {
        match self {
            Expr::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl AssignmentStatement {
    pub fn new(target: Identifier, value: Expr) -> Self {
        Self { target, value }
    }
}

impl StatementList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: AssignmentStatement) {
        self.statements.push(statement);
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssignmentStatement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a StatementList {
    type Item = &'a AssignmentStatement;
    type IntoIter = std::slice::Iter<'a, AssignmentStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

/// Borrowed view over any node kind.
///
/// This is the one sum type every consumer matches on, so adding a kind is a
/// compile error everywhere it is not handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Identifier(&'a Identifier),
    Number(&'a NumberLiteral),
    Unary(&'a UnaryExpr),
    Binary(&'a BinaryExpr),
    Assignment(&'a AssignmentStatement),
    StatementList(&'a StatementList),
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Number(n) => Node::Number(n),
            Expr::Unary(u) => Node::Unary(u),
            Expr::Binary(b) => Node::Binary(b),
        }
    }
}

macro_rules! node_from {
    ($ty:ty, $variant:ident) => {
        impl<'a> From<&'a $ty> for Node<'a> {
            fn from(node: &'a $ty) -> Self {
                Node::$variant(node)
            }
        }
    };
}

node_from!(Identifier, Identifier);
node_from!(NumberLiteral, Number);
node_from!(UnaryExpr, Unary);
node_from!(BinaryExpr, Binary);
node_from!(AssignmentStatement, Assignment);
node_from!(StatementList, StatementList);
