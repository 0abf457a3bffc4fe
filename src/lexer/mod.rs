//! Lexical analysis for the front end.
//!
//! Converts source text into tokens on demand. It handles:
//!
//! - Table-driven matching with anchored regex patterns
//! - Keyword recognition for identifiers
//! - Integer and string literals, operators and punctuation
//! - `Illegal` tokens for anything else, so lexing never fails

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
