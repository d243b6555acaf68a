use crate::ast::{Block, Expression, Program, Statement};
use core::fmt::{Display, Formatter, Result};

/// Borrowed view over any node of the tree. This is what the evaluator
/// dispatches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    Program(&'a Program),
    Statement(&'a Statement),
    Block(&'a Block),
    Expression(&'a Expression),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    LetStatement,
    ReturnStatement,
    ExpressionStatement,
    Block,
    Identifier,
    IntegerLiteral,
    Boolean,
    Prefix,
    Infix,
    If,
    FunctionLiteral,
    Call,
}

impl Node<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Program(_) => NodeKind::Program,
            Node::Block(_) => NodeKind::Block,
            Node::Statement(stmt) => match stmt {
                Statement::Let(_, _) => NodeKind::LetStatement,
                Statement::Return(_) => NodeKind::ReturnStatement,
                Statement::Expression(_) => NodeKind::ExpressionStatement,
            },
            Node::Expression(expr) => match expr {
                Expression::Identifier(_) => NodeKind::Identifier,
                Expression::IntegerLiteral(_) => NodeKind::IntegerLiteral,
                Expression::Boolean(_) => NodeKind::Boolean,
                Expression::Prefix(_, _) => NodeKind::Prefix,
                Expression::Infix(_, _, _) => NodeKind::Infix,
                Expression::If(_, _, _) => NodeKind::If,
                Expression::Function(_, _) => NodeKind::FunctionLiteral,
                Expression::Call(_, _) => NodeKind::Call,
            },
        }
    }
}

impl<'a> From<&'a Program> for Node<'a> {
    fn from(program: &'a Program) -> Self {
        Node::Program(program)
    }
}

impl<'a> From<&'a Statement> for Node<'a> {
    fn from(stmt: &'a Statement) -> Self {
        Node::Statement(stmt)
    }
}

impl<'a> From<&'a Block> for Node<'a> {
    fn from(block: &'a Block) -> Self {
        Node::Block(block)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        Node::Expression(expr)
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Node::Program(p) => write!(f, "{}", p),
            Node::Statement(s) => write!(f, "{}", s),
            Node::Block(b) => write!(f, "{}", b),
            Node::Expression(e) => write!(f, "{}", e),
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let name = match self {
            NodeKind::Program => "Program",
            NodeKind::LetStatement => "LetStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::Block => "Block",
            NodeKind::Identifier => "Identifier",
            NodeKind::IntegerLiteral => "IntegerLiteral",
            NodeKind::Boolean => "Boolean",
            NodeKind::Prefix => "PrefixExpression",
            NodeKind::Infix => "InfixExpression",
            NodeKind::If => "IfExpression",
            NodeKind::FunctionLiteral => "FunctionLiteral",
            NodeKind::Call => "CallExpression",
        };
        write!(f, "{}", name)
    }
}
