//! User-facing calculator errors.
//!
//! A `CalcError` never leaves the state modified; the caller shows it as a
//! blocking notice and the user corrects the input.

use serde::{Deserialize, Serialize};

use crate::domain::Operation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "error_kind", rename_all = "snake_case")]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    /// The exact result does not fit the decimal range.
    #[error("Result of {op} is out of range")]
    Overflow { op: Operation },
}

pub type CalcResult<T> = Result<T, CalcError>;
