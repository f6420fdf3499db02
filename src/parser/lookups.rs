use crate::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence ladder, lowest to highest. Every precedence decision in the
/// expression parser is a comparison on this ordering.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Statement, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expression, Error>;
pub type LEDHandler = fn(&mut Parser, Expression, BindingPower) -> Result<Expression, Error>;

// The lookups below match on every TokenKind without a wildcard arm, so a new
// token kind does not compile until each table decides what to do with it.

pub fn stmt_lookup(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Let => Some(parse_let_stmt),
        TokenKind::Return => Some(parse_return_stmt),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::Assignment
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Not
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::OpenParen
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Fn
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::True
        | TokenKind::False => None,
    }
}

pub fn nud_lookup(kind: TokenKind) -> Option<NUDHandler> {
    match kind {
        // Literals and symbols
        TokenKind::Identifier => Some(parse_identifier_expr),
        TokenKind::Integer => Some(parse_integer_expr),
        TokenKind::True | TokenKind::False => Some(parse_boolean_expr),

        TokenKind::Not | TokenKind::Dash => Some(parse_prefix_expr),
        TokenKind::OpenParen => Some(parse_grouping_expr),
        TokenKind::If => Some(parse_if_expr),
        TokenKind::Fn => Some(parse_fn_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Assignment
        | TokenKind::Plus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return => None,
    }
}

pub fn led_lookup(kind: TokenKind) -> Option<LEDHandler> {
    match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => Some(parse_binary_expr),

        TokenKind::OpenParen => Some(parse_call_expr),

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Return => None,
    }
}

/// Infix binding power of a token. Tokens that cannot continue an expression
/// sit at `Lowest`, which ends the precedence loop.
pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equals,
        TokenKind::Less | TokenKind::Greater => BindingPower::LessGreater,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Sum,
        TokenKind::Star | TokenKind::Slash => BindingPower::Product,
        TokenKind::OpenParen => BindingPower::Call,

        TokenKind::EOF
        | TokenKind::Illegal
        | TokenKind::Identifier
        | TokenKind::Integer
        | TokenKind::Assignment
        | TokenKind::Not
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Fn
        | TokenKind::Let
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Return => BindingPower::Lowest,
    }
}
