use thiserror::Error;

use crate::generator::GenerateError;
use crate::parser::ParseError;

/// An error that occurred while converting an amount to words.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// The amount is neither a plain decimal number nor an English phrase.
    #[error("invalid amount '{input}': expected digits with an optional decimal point")]
    InvalidAmount { input: String },

    /// One of the two parts could not be rendered.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// A phrase amount could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
