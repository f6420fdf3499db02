use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Fn);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("return", TokenKind::Return);
        map
    };
}

/// Classifies an identifier-shaped lexeme as a keyword or a plain identifier.
///
/// Only exact spellings from [`RESERVED_LOOKUP`] are keywords.
pub fn lookup_identifier(text: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(text)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Integer,

    Assignment, // =
    Plus,
    Dash,
    Not,        // !
    Star,
    Slash,
    Equals,     // ==
    NotEquals,  // !=
    Less,
    Greater,

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Fn,
    Let,
    If,
    Else,
    True,
    False,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, literal: {:?} }}", self.kind, self.literal)
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// One-line summary used by the read-loop: `Integer (10)`, `Plus ()`.
    pub fn describe(&self) -> String {
        if self.is_one_of_many(&[TokenKind::Identifier, TokenKind::Integer, TokenKind::Illegal]) {
            format!("{} ({})", self.kind, self.literal)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
