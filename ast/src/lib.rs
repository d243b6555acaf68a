pub mod ast;
mod display;
pub mod node;

pub use node::{Node, NodeKind};
