use crate::error::EvalError;
use crate::value::Value;
use ast::ast::{Expression, Statement};
use ast::{Node, NodeKind};
use log::{debug, trace};

pub type RTResult<T> = Result<T, EvalError>;

/// What to do with a node kind that has no evaluation rule yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Produce no value, same as an empty program.
    #[default]
    Lenient,
    /// Fail with [`EvalError::UnsupportedNode`].
    Strict,
}

/// Tree-walking evaluator. Holds no state besides its [`Mode`], so one
/// instance can be reused for any number of trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    mode: Mode,
}

impl Evaluator {
    pub fn new(mode: Mode) -> Evaluator {
        Evaluator { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Reduces `node` to a value. `Ok(None)` means the node legitimately
    /// produced nothing. In [`Mode::Lenient`] this never returns `Err`.
    pub fn eval(&self, node: Node) -> RTResult<Option<Value>> {
        trace!("Interpreting {}", node.kind());
        match node {
            Node::Program(program) => self.eval_statements(&program.statements),
            Node::Statement(stmt) => match stmt {
                Statement::Expression(expr) => self.eval(Node::Expression(expr)),
                Statement::Let(_, _) | Statement::Return(_) => self.unsupported(node.kind()),
            },
            Node::Expression(expr) => match expr {
                Expression::IntegerLiteral(val) => Ok(Some(Value::Integer(*val))),
                Expression::Identifier(_)
                | Expression::Boolean(_)
                | Expression::Prefix(_, _)
                | Expression::Infix(_, _, _)
                | Expression::If(_, _, _)
                | Expression::Function(_, _)
                | Expression::Call(_, _) => self.unsupported(node.kind()),
            },
            Node::Block(_) => self.unsupported(node.kind()),
        }
    }

    /// Evaluates every statement in order and keeps the last result.
    fn eval_statements(&self, stmts: &[Statement]) -> RTResult<Option<Value>> {
        let mut result = None;
        for stmt in stmts {
            result = self.eval(Node::Statement(stmt))?;
        }
        Ok(result)
    }

    fn unsupported(&self, kind: NodeKind) -> RTResult<Option<Value>> {
        match self.mode {
            Mode::Lenient => {
                debug!("No evaluation rule for {kind}, producing no value");
                Ok(None)
            }
            Mode::Strict => Err(EvalError::UnsupportedNode(kind)),
        }
    }
}
