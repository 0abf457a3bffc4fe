use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, ForStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.traced("parse_stmt", |parser| {
        let handler = parser
            .get_stmt_lookup()
            .get(&parser.current_token_kind())
            .copied();

        match handler {
            Some(handler) => handler(parser),
            None => parse_expression_stmt(parser),
        }
    })
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.eat(TokenKind::Semicolon);

    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let stmt = parse_let_binding(parser)?;
    parser.eat(TokenKind::Semicolon);

    Ok(stmt)
}

// let <identifier> = <expr>, without the terminator
fn parse_let_binding(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;

    let identifier = IdentifierExpr {
        value: parser.expect(TokenKind::Identifier)?.value,
    };

    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Stmt::Let(LetStmt { identifier, value }))
}

/// A `let` or expression statement with no trailing `;`, as used in the
/// header of a `for` loop.
fn parse_simple_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.current_token_kind() == TokenKind::Let {
        return parse_let_binding(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    Ok(Stmt::Expression(ExpressionStmt { expression }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;

    let value = match parser.current_token_kind() {
        TokenKind::Semicolon | TokenKind::CloseCurly | TokenKind::EOF => None,
        _ => Some(parse_expr(parser, BindingPower::Default)?),
    };

    parser.eat(TokenKind::Semicolon);

    Ok(Stmt::Return(ReturnStmt { value }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let block = parse_block(parser)?;
    parser.eat(TokenKind::Semicolon);

    Ok(Stmt::Block(block))
}

/// Parses `{ ... }`. Statements that fail inside the block are recorded and
/// skipped the same way as at the top level, so the block keeps whatever
/// parsed cleanly.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.traced("parse_block", |parser| {
        parser.nested(|parser| {
            parser.expect(TokenKind::OpenCurly)?;

            let mut body = Vec::new();
            while !matches!(
                parser.current_token_kind(),
                TokenKind::CloseCurly | TokenKind::EOF
            ) {
                match parse_stmt(parser) {
                    Ok(stmt) => body.push(stmt),
                    Err(error) => parser.recover(error),
                }
            }

            parser.expect(TokenKind::CloseCurly)?;

            Ok(BlockStmt { body })
        })
    })
}

/// Parses both loop forms:
///
/// ```text
/// for <init>? ; <condition> (; <post>?)? { ... }
/// for <condition> { ... }
/// ```
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::For)?;

    let init;
    let condition;
    let post;

    if parser.eat(TokenKind::Semicolon) {
        init = None;
        condition = parse_expr(parser, BindingPower::Default)?;
        post = parse_for_post(parser)?;
    } else {
        let first = parse_simple_stmt(parser)?;

        if parser.eat(TokenKind::Semicolon) {
            init = Some(Box::new(first));
            condition = parse_expr(parser, BindingPower::Default)?;
            post = parse_for_post(parser)?;
        } else {
            match first {
                Stmt::Expression(ExpressionStmt { expression }) => {
                    init = None;
                    condition = expression;
                    post = None;
                }
                _ => return Err(parser.error(ErrorImpl::LetAsForCondition)),
            }
        }
    }

    let body = parse_block(parser)?;
    parser.eat(TokenKind::Semicolon);

    Ok(Stmt::For(ForStmt {
        init,
        condition,
        post,
        body,
    }))
}

fn parse_for_post(parser: &mut Parser) -> Result<Option<Box<Stmt>>, Error> {
    if !parser.eat(TokenKind::Semicolon) || parser.current_token_kind() == TokenKind::OpenCurly {
        return Ok(None);
    }

    Ok(Some(Box::new(parse_simple_stmt(parser)?)))
}
