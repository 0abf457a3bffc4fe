//! Parser module for building the syntax tree.
//!
//! Transforms a stream of tokens into a [`Program`](crate::ast::ast::Program).
//! Expressions use a Pratt parser: NUD (null denotation) handlers start an
//! expression, LED (left denotation) handlers extend it, and each infix
//! token has a binding power deciding how tightly it holds its operands.
//!
//! - Statement parsing (`let`, `return`, `for`, blocks, expressions)
//! - Expression parsing (operators, calls, indexing, literals, `if`, `fn`)
//! - Error collection with skip-and-continue recovery
//! - Optional call tracing

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod trace;
