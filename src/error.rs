use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PadError {
    #[error("fill must be exactly one character, got {0:?}")]
    InvalidFill(String),
    #[error("not a number: {0:?}")]
    NotNumeric(String),
    #[error("not a scalar value: {0}")]
    NotScalar(String),
}
