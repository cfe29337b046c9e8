//! Error types for phrase generation.

use thiserror::Error;

/// An error that occurred while rendering a value as words.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// The value needs a magnitude word beyond the largest configured one.
    #[error("{value} is too large to render: largest magnitude is '{largest}'")]
    UnsupportedMagnitude { value: u128, largest: &'static str },

    /// The value is negative or otherwise not a non-negative integer.
    #[error("cannot render {value}: only non-negative integers have cardinal phrases")]
    InvalidArgument { value: String },
}
