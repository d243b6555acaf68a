use ast::NodeKind;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvalError {
    #[error("No evaluation rule for node of kind {0}")]
    UnsupportedNode(NodeKind),
}
