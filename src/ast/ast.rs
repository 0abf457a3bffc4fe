use std::{fmt::{self, Display}, slice::Iter};

use super::{
    expressions::{
        ArrayExpr, BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, IndexExpr,
        InfixExpr, IntegerExpr, PrefixExpr, StringExpr,
    },
    statements::{BlockStmt, ExpressionStmt, ForStmt, LetStmt, ReturnStmt},
};

/// Statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
    For(ForStmt),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
            Stmt::For(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Integer(IntegerExpr),
    Boolean(BooleanExpr),
    String(StringExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
    Index(IndexExpr),
    Array(ArrayExpr),
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::String(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
            Expr::Index(expr) => expr.fmt(f),
            Expr::Array(expr) => expr.fmt(f),
        }
    }
}

/// What follows `else`: either another `if` or a terminal block.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseClause {
    If(Box<IfExpr>),
    Block(BlockStmt),
}

impl Display for ElseClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElseClause::If(expr) => expr.fmt(f),
            ElseClause::Block(block) => block.fmt(f),
        }
    }
}

/// Root of the syntax tree.
///
/// Renders as its statements joined by `"; "`, so the output re-parses to an
/// equal tree. A program without statements renders as the empty string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.body, "; "))
    }
}

pub(crate) fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}
