use std::fmt::{Debug, Display};

use crate::Span;

use super::{
    expressions::{
        BooleanLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression,
        InfixExpression, IntegerLiteral, PrefixExpression,
    },
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Shared behaviour of every AST node. The canonical text of a node is its
/// `Display` output.
pub trait Node: Debug + Display {
    /// Literal of the token the node was parsed from.
    fn token_literal(&self) -> &str;
    /// Returns the span of the node's originating token.
    fn get_span(&self) -> &Span;
}

/// Statements
///
/// Closed set of statement kinds. Consumers match on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    fn inner(&self) -> &dyn Node {
        match self {
            Statement::Let(stmt) => stmt,
            Statement::Return(stmt) => stmt,
            Statement::Expression(stmt) => stmt,
            Statement::Block(stmt) => stmt,
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        self.inner().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.inner().get_span()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.inner(), f)
    }
}

/// Expressions
///
/// Closed set of expression kinds. Children are boxed so every node owns its
/// subtree exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Expression {
    fn inner(&self) -> &dyn Node {
        match self {
            Expression::Identifier(expr) => expr,
            Expression::Integer(expr) => expr,
            Expression::Boolean(expr) => expr,
            Expression::Prefix(expr) => expr,
            Expression::Infix(expr) => expr,
            Expression::If(expr) => expr,
            Expression::Function(expr) => expr,
            Expression::Call(expr) => expr,
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        self.inner().token_literal()
    }
    fn get_span(&self) -> &Span {
        self.inner().get_span()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.inner(), f)
    }
}

/// Root of every tree the parser produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
