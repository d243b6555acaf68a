use ast::ast::IntType;
use std::fmt::{Display, Formatter, Result};

/// Runtime value produced by the evaluator. Each literal evaluated yields a
/// fresh value owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Integer(IntType),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Value::Integer(val) => write!(f, "{}", val),
        }
    }
}
