//! Line-oriented read loop used by the binary.
//!
//! Each line gets a fresh lexer (and parser), so nothing carries over
//! between lines.

use std::io::{self, BufRead, Write};

use crate::{
    lexer::{lexer::Lexer, tokens::TokenKind},
    parser::parser::parse,
};

pub const PROMPT: &str = ">> ";

/// What the loop prints for each line it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One line per token, up to the end-marker
    #[default]
    Tokens,
    /// The canonical text of the parsed program, or its errors
    Ast,
}

/// Reads lines from `input` until it is exhausted, writing results to `output`.
pub fn start<R: BufRead, W: Write>(input: R, mut output: W, mode: Mode) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match mode {
            Mode::Tokens => write_tokens(&line, &mut output)?,
            Mode::Ast => write_program(&line, &mut output)?,
        }
    }
}

fn write_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(line.to_string(), None);

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::EOF {
            return Ok(());
        }

        writeln!(output, "{}", token.describe())?;
    }
}

fn write_program<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let (parser, program) = parse(line.to_string(), None);

    if parser.errors().is_empty() {
        return writeln!(output, "{}", program);
    }

    writeln!(output, "parser errors:")?;
    for message in parser.error_messages() {
        writeln!(output, "\t{}", message)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{start, Mode};

    fn run(input: &str, mode: Mode) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, mode).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_tokens_mode() {
        let output = run("10 + 10\n", Mode::Tokens);

        assert_eq!(output, ">> Integer (10)\nPlus ()\nInteger (10)\n>> ");
    }

    #[test]
    fn test_each_line_gets_a_fresh_lexer() {
        let output = run("let\nx\n", Mode::Tokens);

        assert_eq!(output, ">> Let ()\n>> Identifier (x)\n>> ");
    }

    #[test]
    fn test_empty_input_only_prompts() {
        assert_eq!(run("", Mode::Tokens), ">> ");
    }

    #[test]
    fn test_ast_mode() {
        let output = run("let x = 1 + 2 * 3;\n", Mode::Ast);

        assert_eq!(output, ">> let x = (1 + (2 * 3));\n>> ");
    }

    #[test]
    fn test_ast_mode_reports_errors() {
        let output = run("let = 5\n", Mode::Ast);

        assert_eq!(
            output,
            ">> parser errors:\n\texpected next token to be Identifier, got Assignment instead\n>> "
        );
    }
}
