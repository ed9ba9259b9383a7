use crate::rules::ValidationResult;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("form has {} invalid field(s)", .0.len())]
    InvalidSubmission(ValidationResult),
}
