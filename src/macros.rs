//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-spelling tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's literal text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for operators and delimiters.
///
/// The generated handler builds a token of the given kind spanning the
/// literal's length at the lexer's cursor, then moves the cursor past it.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^==").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $literal:literal) => {
        |lexer: &mut Lexer, _matched: &str| -> Token {
            let token = MK_TOKEN!($kind, String::from($literal), lexer.span_of($literal.len()));
            lexer.advance_n($literal.len());
            token
        }
    };
}
