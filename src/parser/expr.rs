use crate::{
    ast::{
        ast::{ElseClause, Expr},
        expressions::{
            ArrayExpr, BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, IndexExpr,
            InfixExpr, IntegerExpr, PrefixExpr, StringExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.traced("parse_expr", |parser| {
        parser.nested(|parser| {
            // First parse NUD
            let token_kind = parser.current_token_kind();
            let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
                return Err(parser.error(ErrorImpl::NoPrefixParseFn { kind: token_kind }));
            };

            let mut left = nud(parser)?;

            // While the current token binds tighter than `bp`, keep extending lhs.
            // Each extension wraps `left` one level deeper.
            while parser.current_binding_power() > bp {
                let token_kind = parser.current_token_kind();
                let operator_bp = parser.current_binding_power();
                let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
                    unreachable!("binding power registered for {} without a LED handler", token_kind);
                };

                parser.deepen()?;
                left = led(parser, left, operator_bp)?;
            }

            Ok(left)
        })
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Integer => {
            let result = parser.current_token().value.parse::<i64>();

            match result {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::Integer(IntegerExpr { value }))
                }
                Err(_) => Err(parser.error(ErrorImpl::IntegerParseError {
                    token: parser.current_token().value.clone(),
                })),
            }
        }
        TokenKind::Identifier => Ok(Expr::Identifier(IdentifierExpr {
            value: parser.advance().value,
        })),
        TokenKind::String => Ok(Expr::String(StringExpr {
            value: parser.advance().value,
        })),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanExpr {
            value: parser.advance().kind == TokenKind::True,
        })),
        kind => unreachable!("primary handler registered for {}", kind),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.traced("parse_prefix_expr", |parser| {
        let operator = parser.advance();
        let right_expr = parse_expr(parser, BindingPower::Unary)?;

        Ok(Expr::Prefix(PrefixExpr {
            operator,
            right_expr: Box::new(right_expr),
        }))
    })
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    parser.traced("parse_binary_expr", |parser| {
        let operator = parser.advance();
        let right = parse_expr(parser, bp)?;

        Ok(Expr::Infix(InfixExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        callee: Box::new(left),
        arguments,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let index = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Expr::Index(IndexExpr {
        left: Box::new(left),
        index: Box::new(index),
    }))
}

pub fn parse_array_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    let elements = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Ok(Expr::Array(ArrayExpr { elements }))
}

/// Comma separated expressions up to and including `end`.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut list = vec![];

    if parser.eat(end) {
        return Ok(list);
    }

    list.push(parse_expr(parser, BindingPower::Default)?);
    while parser.eat(TokenKind::Comma) {
        list.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect(end)?;

    Ok(list)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::If(parse_if(parser)?))
}

fn parse_if(parser: &mut Parser) -> Result<IfExpr, Error> {
    parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.current_token_kind() != TokenKind::Else {
        None
    } else if parser.peek_token_kind() == TokenKind::If {
        parser.advance();
        Some(ElseClause::If(Box::new(parse_if(parser)?)))
    } else {
        parser.advance();
        Some(ElseClause::Block(parse_block(parser)?))
    };

    Ok(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
    })
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::Fn)?;
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    if !parser.eat(TokenKind::CloseParen) {
        loop {
            parameters.push(IdentifierExpr {
                value: parser.expect(TokenKind::Identifier)?.value,
            });

            if !parser.eat(TokenKind::Comma) {
                break;
            }
        }

        parser.expect(TokenKind::CloseParen)?;
    }

    let body = parse_block(parser)?;

    Ok(Expr::Function(FunctionExpr { parameters, body }))
}
