use ast::ast::Program;
pub use error::ParsingError;
pub use parse::Rule;

mod error;
pub(crate) mod macros;
pub(crate) mod parse;

pub fn parse(source: &str) -> Result<Program, ParsingError> {
    parse::build_ast(source)
}
