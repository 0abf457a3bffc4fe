//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, literals, operators and punctuation,
//! illegal input, and end-of-input behaviour.

use super::{
    lexer::{tokenize, Lexer},
    source::{TokenBuffer, TokenSource},
    tokens::{lookup_identifier, Token, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = tokenize("let five = 5;");

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Let, "let"),
            Token::new(TokenKind::Identifier, "five"),
            Token::new(TokenKind::Assignment, "="),
            Token::new(TokenKind::Integer, "5"),
            Token::new(TokenKind::Semicolon, ";"),
            Token::new(TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("fn let if else true false return for"),
        vec![
            TokenKind::Fn,
            TokenKind::Let,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Return,
            TokenKind::For,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase letter iffy");

    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].value, "letter");
    assert_eq!(tokens[5].value, "iffy");
    assert!(tokens[..6].iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("returns"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("42 0 007");

    assert_eq!(tokens[0], Token::new(TokenKind::Integer, "42"));
    assert_eq!(tokens[1], Token::new(TokenKind::Integer, "0"));
    assert_eq!(tokens[2], Token::new(TokenKind::Integer, "007"));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_digits_then_letters_split() {
    assert_eq!(
        tokenize("12abc"),
        vec![
            Token::new(TokenKind::Integer, "12"),
            Token::new(TokenKind::Identifier, "abc"),
            Token::new(TokenKind::EOF, ""),
        ]
    );
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#);

    assert_eq!(tokens[0], Token::new(TokenKind::String, "hello"));
    assert_eq!(tokens[1], Token::new(TokenKind::String, "multiple words"));
    assert_eq!(tokens[2], Token::new(TokenKind::String, ""));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_string_has_no_escapes() {
    let tokens = tokenize(r#""tab\there""#);

    assert_eq!(tokens[0], Token::new(TokenKind::String, r"tab\there"));
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = tokenize("\"abc def");

    assert_eq!(tokens[0], Token::new(TokenKind::String, "abc def"));
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == != , ; ( ) { } [ ]"),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_two_character_operators_without_spaces() {
    assert_eq!(
        kinds("a==b!=!c=d"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_illegal_characters() {
    let tokens = tokenize("a @ é");

    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "@"));
    assert_eq!(tokens[2], Token::new(TokenKind::Illegal, "é"));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_spans_are_byte_offsets() {
    let tokens = tokenize("let  x");

    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[2].span.start.0, 6);
}

#[test]
fn test_equality_ignores_span() {
    let scanned = tokenize("   x");

    assert_eq!(scanned[0], Token::new(TokenKind::Identifier, "x"));
}

#[test]
fn test_whitespace_only() {
    assert_eq!(kinds(" \t\r\n "), vec![TokenKind::EOF]);
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    }
}

#[test]
fn test_full_program() {
    let source = "let add = fn(x, y) { x + y; };\nlet result = add(five, ten);\nif (5 < 10) { return true; } else { return false; }\n[1, 2][0];\nfor (let i = 0; i < 3; let i = i + 1) { i }";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Fn,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::If,
            TokenKind::OpenParen,
            TokenKind::Integer,
            TokenKind::Less,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::Else,
            TokenKind::OpenCurly,
            TokenKind::Return,
            TokenKind::False,
            TokenKind::Semicolon,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::Integer,
            TokenKind::Comma,
            TokenKind::Integer,
            TokenKind::CloseBracket,
            TokenKind::OpenBracket,
            TokenKind::Integer,
            TokenKind::CloseBracket,
            TokenKind::Semicolon,
            TokenKind::For,
            TokenKind::OpenParen,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::Less,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::Identifier,
            TokenKind::CloseCurly,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_buffer_yields_eof_when_drained() {
    let mut buffer = TokenBuffer::new(vec![Token::new(TokenKind::Integer, "1")]);

    assert_eq!(buffer.next_token(), Token::new(TokenKind::Integer, "1"));
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
    assert_eq!(buffer.next_token().kind, TokenKind::EOF);
}
