use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression,
            InfixExpression, IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{led_lookup, nud_lookup, BindingPower},
    parser::Parser,
    stmt::parse_block_stmt,
};

/// Precedence-climbing expression parser.
///
/// Starts on the first token of the expression and leaves the parser on its
/// last token. The loop only takes an operator whose binding power is strictly
/// greater than `bp`, so operators of equal power associate to the left.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expression, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup(token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixRule {
                kind: token_kind,
                literal: parser.current_token().literal.clone(),
            },
            parser.current_token().span.start.clone(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next token binds tighter than bp, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let Some(led) = led_lookup(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    Ok(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Ok(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::IntegerParseError {
                token: token.literal.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    match token.literal.parse::<bool>() {
        Ok(value) => Ok(Expression::Boolean(BooleanLiteral { token, value })),
        Err(_) => Err(Error::new(
            ErrorImpl::BooleanParseError {
                token: token.literal.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(rhs),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    // if (<condition>) { <consequence> } else { <alternative> }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_fn_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

/// Parses `x, y, z)` with the parser on the `(`; leaves it on the `)`.
fn parse_fn_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    parser.advance();
    parameters.push(parse_parameter(parser)?);

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parser.advance();
        parameters.push(parse_parameter(parser)?);
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

fn parse_parameter(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.current_token().clone();

    if token.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::InvalidParameter {
                token: token.literal.clone(),
            },
            token.span.start.clone(),
        ));
    }

    Ok(Identifier {
        value: token.literal.clone(),
        token,
    })
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, BindingPower::Lowest)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, BindingPower::Lowest)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(Expression::Call(CallExpression {
        token,
        function: Box::new(left),
        arguments,
    }))
}
