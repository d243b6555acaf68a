use thiserror::Error;

use crate::parse::Rule;

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Ran into error while parsing\n{0}")]
    PestError(#[from] pest::error::Error<Rule>),
    #[error("Integer literal {0} does not fit in 64 bits")]
    IntegerOutOfRange(String),
    #[error("Critical Error in Language Grammar")]
    GrammarError,
}
