use crate::common::Function;
use crate::parse::ParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RollError {
    #[error("variable {0:?} is not defined")]
    UndefinedVariable(String),
    #[error("roll mapping {0:?} is not defined")]
    UndefinedRollMapping(String),
    #[error("{0}() needs at least one argument")]
    MissingArguments(Function),
    #[error("too many dice rolled")]
    TooManyRolls,
    #[error("cannot divide by zero")]
    ZeroDivision,
    #[error(transparent)]
    Parse(#[from] ParseError),
}
