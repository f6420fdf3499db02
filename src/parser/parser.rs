//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level entry
//! points. The parser pulls tokens from the lexer into a two-token buffer
//! (`current` and `peek`) and hands statement and expression work to the
//! handlers registered in [`super::lookups`].

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Owns its lexer exclusively. No more than two tokens of lookahead are ever
/// needed by the grammar.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// Token currently being interpreted
    current: Token,
    /// Token after `current`
    peek: Token,
    /// Errors recorded so far, in the order they were found
    errors: Vec<Error>,
}

impl Parser {
    /// Creates a new Parser with `current` and `peek` already filled.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Binding power of the lookahead token when used as an infix operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Binding power of the current token when used as an infix operator.
    pub fn current_binding_power(&self) -> BindingPower {
        binding_power(self.current.kind)
    }

    /// Moves `peek` into `current` and pulls a new `peek` from the lexer.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Advances only if the lookahead is of the expected kind.
    ///
    /// # Returns
    ///
    /// The token now under the cursor, or an `UnexpectedToken` error naming
    /// the lookahead that was found instead. The cursor does not move on error.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                    literal: self.peek.literal.clone(),
                },
                self.peek.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Consumes a `;` after a statement if one is next. The terminator is optional.
    pub fn skip_optional_semicolon(&mut self) {
        if self.peek.kind == TokenKind::Semicolon {
            self.advance();
        }
    }

    /// Records an error and carries on.
    pub fn push_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Skips the rest of a statement that failed to parse.
    ///
    /// Stops on the first `;` or unmatched `}` (or the end-marker) without
    /// consuming it. Braced groups opened while skipping are skipped whole, so
    /// the `}` stopped on always closes a block entered before the failure.
    pub fn synchronize(&mut self) {
        let mut depth = 0usize;

        loop {
            match self.current.kind {
                TokenKind::EOF => return,
                TokenKind::Semicolon if depth == 0 => return,
                TokenKind::CloseCurly if depth == 0 => return,
                TokenKind::CloseCurly => depth -= 1,
                TokenKind::OpenCurly => depth += 1,
                _ => {}
            }

            self.advance();
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Human-readable messages for every recorded error, in order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Parses statements until the end-marker.
    ///
    /// A statement that fails to parse is left out of the program and its
    /// error recorded; parsing resumes after the failed statement's `;`
    /// (see [`Parser::synchronize`]). A lone `;` is an empty statement and
    /// produces nothing.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::EOF {
            if self.current.kind == TokenKind::Semicolon {
                self.advance();
                continue;
            }

            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.push_error(error);
                    self.synchronize();
                }
            }

            // Steps past the statement's last token, its `;`, or a stray `}`
            self.advance();
        }

        program
    }
}

/// Parses a source string into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and a parser
/// over `source` and parses every statement until end of input.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the recorded errors
/// - The Program, possibly with gaps where statements failed to parse
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
