use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{lookups::stmt_lookup, parser::Parser};

/// Parses one statement starting on the current token and leaves the parser
/// on the statement's last token (its `;` when one was written).
pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    if let Some(handler) = stmt_lookup(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_optional_semicolon();

    Ok(Statement::Expression(ExpressionStatement { token, expression }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_optional_semicolon();

    Ok(Statement::Let(LetStatement { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;

    parser.skip_optional_semicolon();

    Ok(Statement::Return(ReturnStatement { token, value }))
}

/// Parses `{ ... }` with the parser on the `{`; leaves it on the matching `}`.
///
/// Statements that fail inside the block are recorded on the parser and
/// skipped up to their `;` or the block's `}`, whichever comes first.
/// Reaching end of input before the `}` fails the whole block.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStatement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly,
                    found: TokenKind::EOF,
                    literal: String::new(),
                },
                parser.current_token().span.start.clone(),
            ));
        }

        // Empty statement
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            continue;
        }

        match parse_stmt(parser) {
            Ok(stmt) => {
                statements.push(stmt);
                parser.advance();
            }
            Err(error) => {
                parser.push_error(error);
                parser.synchronize();

                // The block's own `}` stays under the cursor
                if parser.current_token_kind() == TokenKind::Semicolon {
                    parser.advance();
                }
            }
        }
    }

    Ok(BlockStatement { token, statements })
}
