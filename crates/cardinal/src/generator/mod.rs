//! Integer to English cardinal phrase.
//!
//! The value is split into 3-digit groups. Each non-zero group is rendered
//! on its own and tagged with the group stop for its position; groups are then
//! joined most significant first with `", "`.

mod error;
mod group;

use std::fmt::Display;

use tracing::debug;

pub use error::GenerateError;
use group::{digit_groups, render_group};

use crate::vocabulary::Vocabulary;

/// Renders non-negative integers as English cardinal phrases.
///
/// # Example
///
/// ```
/// use cardinal::PhraseGenerator;
///
/// let generator = PhraseGenerator::default();
/// assert_eq!(
///     generator.generate(23_455).unwrap(),
///     "twenty-three thousand, four hundred and fifty-five"
/// );
/// assert_eq!(generator.generate(0).unwrap(), "");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhraseGenerator<'v> {
    vocabulary: &'v Vocabulary,
}

impl Default for PhraseGenerator<'static> {
    fn default() -> Self {
        Self::new(Vocabulary::english())
    }
}

impl<'v> PhraseGenerator<'v> {
    /// Create a generator over the given vocabulary.
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// The vocabulary this generator renders with.
    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Render any integer type, rejecting negative values.
    ///
    /// Zero renders as the empty string.
    pub fn generate<N>(&self, n: N) -> Result<String, GenerateError>
    where
        N: TryInto<u128> + Display + Copy,
    {
        let value = n.try_into().map_err(|_| {
            debug!(value = %n, "rejected negative value");
            GenerateError::InvalidArgument {
                value: n.to_string(),
            }
        })?;
        self.generate_unsigned(value)
    }

    /// Render an unsigned value.
    pub fn generate_unsigned(&self, value: u128) -> Result<String, GenerateError> {
        let mut phrases = Vec::new();

        for (index, group) in digit_groups(value).enumerate() {
            if group == 0 {
                continue;
            }
            let words = render_group(group);
            if index == 0 {
                phrases.push(words);
                continue;
            }
            let Some(scale) = self.vocabulary.scale_for_group(index) else {
                debug!(value = %value, group = index, "no magnitude word for group");
                return Err(GenerateError::UnsupportedMagnitude {
                    value,
                    largest: self.vocabulary.largest_word(),
                });
            };
            phrases.push(format!("{words} {}", scale.word));
        }

        phrases.reverse();
        Ok(phrases.join(", "))
    }
}
