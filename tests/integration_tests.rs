//! Integration tests for the front end.
//!
//! These tests drive source text through the public tokenizer and parser
//! entry points and check the resulting trees and their canonical text.

use monkey::{
    ast::ast::{Expression, Statement},
    format_error,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{TokenKind, RESERVED_LOOKUP},
    },
    parser::parser::{parse, Parser},
};

#[test]
fn test_render_catalog() {
    let catalog = [
        ("let x = 5; return x;", "let x = 5;return x;"),
        ("-5 * 5", "((-5) * 5)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("1 + 2 + 3", "((1 + 2) + 3)"),
        ("10 - 2 - 3 - 4", "(((10 - 2) - 3) - 4)"),
        ("8 / 4 / 2", "((8 / 4) / 2)"),
        ("a == b != c", "((a == b) != c)"),
        ("if (x < y) { x }", "if(x < y) x"),
        ("if (x > y) { x } else { y; }", "if(x > y) xelse y"),
        ("let add = fn(a, b) { return a + b; };", "let add = fn(a, b)return (a + b);;"),
        ("let r = add(1, 2);", "let r = add(1, 2);"),
        ("!!true", "(!(!true))"),
    ];

    for (source, expected) in catalog {
        let (parser, program) = parse(source.to_string(), None);
        assert!(
            parser.errors().is_empty(),
            "errors for {:?}: {:?}",
            source,
            parser.error_messages()
        );
        assert_eq!(program.to_string(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_three_let_statements() {
    let source = "let five = 5; let ten = 10; let add = fn(x, y) { x + y; };";
    let (parser, program) = parse(source.to_string(), Some("scenario.mk".to_string()));

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 3);

    let names: Vec<&str> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Statement::Let(let_stmt) => let_stmt.name.value.as_str(),
            other => panic!("expected let statement, got {:?}", other),
        })
        .collect();
    assert_eq!(names, vec!["five", "ten", "add"]);

    let Statement::Let(add) = &program.statements[2] else {
        unreachable!()
    };
    let Expression::Function(function) = &add.value else {
        panic!("expected function literal, got {:?}", add.value);
    };

    let params: Vec<&str> = function.parameters.iter().map(|p| p.value.as_str()).collect();
    assert_eq!(params, vec!["x", "y"]);
    assert_eq!(function.body.statements.len(), 1);
}

#[test]
fn test_if_without_else() {
    let (parser, program) = parse("if (x < y) { x }".to_string(), None);

    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 1);

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expression::If(if_expr) = &stmt.expression else {
        panic!("expected if expression");
    };

    assert_eq!(if_expr.condition.to_string(), "(x < y)");
    assert_eq!(if_expr.consequence.to_string(), "x");
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_missing_identifier_after_let() {
    let (parser, program) = parse("let = 5;".to_string(), None);

    assert_eq!(parser.errors().len(), 1);
    assert!(program.statements.is_empty());
}

#[test]
fn test_errors_do_not_stop_later_statements() {
    let source = "let a = 1;\nlet = 2;\nlet c = 3;\nlet d = (4;\nlet e = 5;";
    let (parser, program) = parse(source.to_string(), None);

    let rendered: Vec<String> = program
        .statements
        .iter()
        .map(|stmt| stmt.to_string())
        .collect();

    assert_eq!(rendered, vec!["let a = 1;", "let c = 3;", "let e = 5;"]);
    assert_eq!(parser.errors().len(), 2);
}

#[test]
fn test_recovery_keeps_blocks_and_statements_apart() {
    let source = "let max = fn(a, b) { if (a > ) { a } else { b } };\nlet y = max(1, 2);";
    let (parser, program) = parse(source.to_string(), None);

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "let max = fn(a, b);let y = max(1, 2);");
}

#[test]
fn test_keyword_classification() {
    for (spelling, kind) in RESERVED_LOOKUP.iter() {
        let tokens = tokenize(spelling.to_string(), None);
        assert_eq!(tokens[0].kind, *kind);
        assert_eq!(tokens[0].literal, *spelling);

        let longer = format!("{}x", spelling);
        let tokens = tokenize(longer.clone(), None);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].literal, longer);
    }
}

#[test]
fn test_end_marker_is_repeated() {
    let mut lexer = Lexer::new("1 +".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Integer);
    assert_eq!(lexer.next_token().kind, TokenKind::Plus);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert!(token.literal.is_empty());
    }
}

#[test]
fn test_independent_parsers() {
    let mut first = Parser::new(Lexer::new("let a = 1;".to_string(), None));
    let mut second = Parser::new(Lexer::new("let = 2;".to_string(), None));

    let second_program = second.parse_program();
    let first_program = first.parse_program();

    assert!(first.errors().is_empty());
    assert_eq!(second.errors().len(), 1);
    assert_eq!(first_program.to_string(), "let a = 1;");
    assert!(second_program.is_empty());
}

#[test]
fn test_format_error_for_parse_failure() {
    let source = "let x = 1;\nlet = 2;\n";
    let (parser, _) = parse(source.to_string(), Some("errors.mk".to_string()));

    let rendered = format_error(&parser.errors()[0], source);

    assert!(rendered.starts_with("Error: UnexpectedToken"));
    assert!(rendered.contains("-> errors.mk\n"));
    assert!(rendered.contains("2 | let = 2;\n"));
    assert!(rendered.ends_with("  | ----^\n"));
}
