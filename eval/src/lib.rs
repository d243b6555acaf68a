use ast::ast::Program;
use ast::Node;

pub use error::EvalError;
pub use eval::{Evaluator, Mode, RTResult};
pub use value::Value;

mod error;
mod eval;
mod value;

/// Evaluates `node` with the lenient evaluator: unsupported node kinds and
/// empty programs both give `None`.
pub fn eval<'a>(node: impl Into<Node<'a>>) -> Option<Value> {
    Evaluator::default().eval(node.into()).ok().flatten()
}

pub fn eval_program(program: &Program) -> Option<Value> {
    eval(program)
}
