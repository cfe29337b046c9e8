//! English cardinal-number phrases in both directions.
//!
//! ```
//! assert_eq!(
//!     cardinal::generate(475_923_455).unwrap(),
//!     "four hundred and seventy-five million, nine hundred and twenty-three thousand, \
//!      four hundred and fifty-five"
//! );
//! assert_eq!(cardinal::parse("three hundred and forty-five").unwrap(), 345);
//! ```

pub mod generator;
pub mod money;
pub mod parser;
mod token;
pub mod vocabulary;

use std::fmt::Display;

pub use generator::{GenerateError, PhraseGenerator};
pub use parser::{ParseError, ParseMode, PhraseParser};
pub use token::Token;
pub use vocabulary::{Vocabulary, VocabularyError};

pub use cardinal_vocab::{Magnitude, MagnitudeKind};

/// Render a non-negative integer with the English vocabulary.
///
/// Zero renders as the empty string; negative values are rejected with
/// [`GenerateError::InvalidArgument`].
pub fn generate<N>(n: N) -> Result<String, GenerateError>
where
    N: TryInto<u128> + Display + Copy,
{
    PhraseGenerator::default().generate(n)
}

/// Parse an English cardinal phrase, skipping unknown words.
pub fn parse(text: &str) -> Result<u128, ParseError> {
    PhraseParser::default().parse(text)
}
