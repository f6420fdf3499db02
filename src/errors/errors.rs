use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parse error together with the source position it was raised at.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::IntegerParseError { .. } => "IntegerParseError",
            ErrorImpl::BooleanParseError { .. } => "BooleanParseError",
            ErrorImpl::InvalidParameter { .. } => "InvalidParameter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected, literal, ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                literal, expected
            )),
            ErrorImpl::NoPrefixRule { kind, .. } if *kind == TokenKind::EOF => {
                ErrorTip::Suggestion(String::from("Unexpected end of input, is an operand missing?"))
            }
            ErrorImpl::NoPrefixRule { literal, .. } => ErrorTip::Suggestion(format!(
                "`{}` cannot start an expression",
                literal
            )),
            ErrorImpl::IntegerParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid integer: `{}`, is it above the 64-bit integer limit?",
                token
            )),
            ErrorImpl::BooleanParseError { .. } => ErrorTip::None,
            ErrorImpl::InvalidParameter { token } => ErrorTip::Suggestion(format!(
                "Parameter `{}` is not an identifier",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        literal: String,
    },
    #[error("no prefix parse rule for {kind} found")]
    NoPrefixRule { kind: TokenKind, literal: String },
    #[error("could not parse {token:?} as integer")]
    IntegerParseError { token: String },
    #[error("could not parse {token:?} as boolean")]
    BooleanParseError { token: String },
    #[error("expected parameter name, got {token:?}")]
    InvalidParameter { token: String },
}
