use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("cannot roll {token:?}: {size:?} is not a valid die size")]
    InvalidDieSize { token: String, size: String },
    #[error("unknown function {0:?}")]
    UnknownFunction(String),
    #[error("cannot roll {notation:?} ({reason}); please check your syntax and try again")]
    Malformed { notation: String, reason: String },
}

impl ParseError {
    pub(crate) fn malformed(notation: impl ToString, reason: impl ToString) -> Self {
        Self::Malformed {
            notation: notation.to_string(),
            reason: reason.to_string(),
        }
    }
}
