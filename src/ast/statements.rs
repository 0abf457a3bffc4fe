use std::{fmt::{self, Display}, slice::Iter};

use super::{
    ast::{join, Expr, Stmt},
    expressions::IdentifierExpr,
};

/// `{ stmt; stmt }`. An empty block renders as `{ }`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            f.write_str("{ }")
        } else {
            write!(f, "{{ {} }}", join(&self.body, "; "))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expression.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub identifier: IdentifierExpr,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {}", self.identifier, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "return {}", value),
            None => f.write_str("return"),
        }
    }
}

/// For Statement
///
/// `for <init>; <condition>; <post> { ... }` where `init` and `post` are
/// `let` or expression statements and may be absent. With neither present it
/// is a condition-only loop, `for <condition> { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub condition: Expr,
    pub post: Option<Box<Stmt>>,
    pub body: BlockStmt,
}

impl Display for ForStmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.init.is_none() && self.post.is_none() {
            return write!(f, "for {} {}", self.condition, self.body);
        }

        f.write_str("for ")?;
        if let Some(init) = &self.init {
            write!(f, "{}", init)?;
        }
        write!(f, "; {};", self.condition)?;
        if let Some(post) = &self.post {
            write!(f, " {}", post)?;
        }
        write!(f, " {}", self.body)
    }
}
