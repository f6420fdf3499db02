#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

/// Byte offset into a source and the name of the file it came from.
///
/// Offsets beyond 4 GiB are clamped to `u32::MAX`.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing the byte offset `position`.
///
/// Returns the 1-based line number, the line text (including its newline) and
/// the 0-based column of `position` within that line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((index + 1, line.to_string(), pos - start));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    const SOURCE: &str = "Hello, world!\nlet x = 5;\n\n    Testing { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 38).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_format_error_points_at_column() {
        let source = "let x = 5;\n  let = 10;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: TokenKind::Assignment,
                literal: String::from("="),
            },
            Position(17, Rc::new(String::from("test.mk"))),
        );

        let rendered = super::format_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnexpectedToken (Unexpected token: `=`, expected Identifier)"
        );
        assert_eq!(lines[1], "-> test.mk");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | let = 10;");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_format_error_past_end_of_source() {
        let error = Error::new(
            ErrorImpl::NoPrefixRule {
                kind: TokenKind::EOF,
                literal: String::new(),
            },
            Position(3, Rc::new(String::from("shell"))),
        );

        let rendered = super::format_error(&error, "1 +");
        assert!(rendered.starts_with("Error: NoPrefixRule"));
        assert!(rendered.ends_with("-> shell:3\n"));
    }
}

/// Renders a parse error as a multi-line diagnostic pointing at its source column.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `=`, expected Identifier)
/// -> main.mk
///   |
/// 1 | let = 5;
///   | ----^
/// ```
pub fn format_error(error: &Error, source: &str) -> String {
    let mut out = String::new();
    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("-> {}:{}\n", position.1, position.0));
        return out;
    };

    out.push_str(&format!("-> {}\n", position.1));

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
