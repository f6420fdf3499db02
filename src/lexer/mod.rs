//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns source text into a stream of
//! tokens for the parser. It handles:
//!
//! - Pull-based scanning, one token per `next_token` call
//! - Recognition of keywords, identifiers, integer literals, operators and delimiters
//! - Illegal characters, which become tokens instead of errors
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
