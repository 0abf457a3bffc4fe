use std::collections::VecDeque;

use super::tokens::{Token, TokenKind};

/// Anything the parser can pull tokens from, one at a time.
///
/// Implementations must keep returning an `EOF` token once their input is
/// exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A token source over an already scanned list of tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: VecDeque<Token>,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenBuffer {
            tokens: tokens.into(),
        }
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Token {
        self.tokens
            .pop_front()
            .unwrap_or_else(|| Token::new(TokenKind::EOF, ""))
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        TokenBuffer::new(tokens)
    }
}
