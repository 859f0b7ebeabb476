//! Errors for fallible math operations.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("Index {index} is out of range for a component count of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Cannot normalize a value with zero or non-finite length")]
    ZeroLength,
}
