//! Vocabulary lookup shared by the phrase generator and the phrase parser.
//!
//! A [`Vocabulary`] combines the fixed English number words with a list of
//! group stops. The default English vocabulary is built once per process and
//! never mutated; custom vocabularies are validated on construction.

mod error;

use std::collections::HashMap;
use std::sync::LazyLock;

use cardinal_vocab::{FILLERS, HUNDRED, Magnitude, MagnitudeKind, SCALES, number_words, resolve_word};

pub use error::VocabularyError;

use crate::token::Token;

static ENGLISH: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary::from_scales(SCALES.to_vec()));

/// Word table consulted by both directions of the grammar.
///
/// # Example
///
/// ```
/// use cardinal::{Token, Vocabulary};
///
/// let vocabulary = Vocabulary::english();
/// assert_eq!(vocabulary.lookup("nineteen"), Some(Token::Value(19)));
/// assert_eq!(vocabulary.lookup("hundred"), Some(Token::BlockMultiplier(100)));
/// assert_eq!(vocabulary.largest_word(), "decillion");
/// ```
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Group stops in rank order; entry `i` scales group `i + 1`.
    scales: Vec<Magnitude>,
    /// Every known word in table order, for listings and suggestions.
    entries: Vec<(&'static str, Token)>,
    /// Lowercase word to token.
    index: HashMap<&'static str, Token>,
}

impl Vocabulary {
    /// The process-wide English vocabulary (thousand through decillion).
    pub fn english() -> &'static Vocabulary {
        &ENGLISH
    }

    /// English vocabulary whose largest group stop is `word`.
    ///
    /// ```
    /// use cardinal::Vocabulary;
    ///
    /// let vocabulary = Vocabulary::with_scale_limit("trillion").unwrap();
    /// assert_eq!(vocabulary.max_value(), 999_999_999_999_999);
    /// ```
    pub fn with_scale_limit(word: &str) -> Result<Self, VocabularyError> {
        let lowered = word.to_lowercase();
        let last = SCALES
            .iter()
            .position(|scale| scale.word == lowered)
            .ok_or_else(|| VocabularyError::UnknownScale {
                word: word.to_string(),
            })?;
        Ok(Self::from_scales(SCALES[..=last].to_vec()))
    }

    /// Vocabulary with a custom list of group stops.
    ///
    /// Stops must be consecutive powers of 1000 starting at 1000. Their words
    /// must be lowercase ASCII letters and must not collide with any other
    /// vocabulary word.
    pub fn with_scales(scales: Vec<Magnitude>) -> Result<Self, VocabularyError> {
        let mut seen: Vec<&str> = number_words().chain(FILLERS.iter().copied()).collect();
        seen.push(HUNDRED.word);

        for (rank, scale) in scales.iter().enumerate() {
            if scale.word.is_empty() || !scale.word.chars().all(|c| c.is_ascii_lowercase()) {
                return Err(VocabularyError::InvalidWord {
                    word: scale.word.to_string(),
                });
            }
            if scale.kind != MagnitudeKind::GroupStop {
                return Err(VocabularyError::NotGroupStop {
                    word: scale.word.to_string(),
                });
            }
            let expected = u32::try_from(rank + 1)
                .ok()
                .and_then(|power| 1000u128.checked_pow(power));
            if expected != Some(scale.value) {
                return Err(VocabularyError::NonConsecutiveScale {
                    word: scale.word.to_string(),
                    rank: rank + 1,
                });
            }
            if seen.contains(&scale.word) {
                return Err(VocabularyError::DuplicateWord {
                    word: scale.word.to_string(),
                });
            }
            seen.push(scale.word);
        }

        Ok(Self::from_scales(scales))
    }

    fn from_scales(scales: Vec<Magnitude>) -> Self {
        let classify =
            |word: &'static str| resolve_word(word).map(|class| (word, Token::from(class)));

        let mut entries: Vec<(&'static str, Token)> = number_words()
            .chain([HUNDRED.word])
            .filter_map(classify)
            .collect();
        entries.extend(scales.iter().map(|scale| (scale.word, Token::from(*scale))));
        entries.extend(FILLERS.iter().copied().filter_map(classify));

        let index = entries.iter().copied().collect();
        Self {
            scales,
            entries,
            index,
        }
    }

    /// Look up an already-lowercased word.
    pub fn lookup(&self, word: &str) -> Option<Token> {
        self.index.get(word).copied()
    }

    /// Group stops in rank order.
    pub fn scales(&self) -> &[Magnitude] {
        &self.scales
    }

    /// The group stop for 3-digit group `group` (1 = thousands).
    ///
    /// Group 0 has no magnitude word and always returns `None`.
    pub fn scale_for_group(&self, group: usize) -> Option<&Magnitude> {
        group
            .checked_sub(1)
            .and_then(|rank| self.scales.get(rank))
    }

    /// The largest magnitude word this vocabulary can render.
    pub fn largest_word(&self) -> &'static str {
        self.scales.last().map_or(HUNDRED.word, |scale| scale.word)
    }

    /// The largest value the generator can render with this vocabulary.
    pub fn max_value(&self) -> u128 {
        u32::try_from(self.scales.len() + 1)
            .ok()
            .and_then(|groups| 1000u128.checked_pow(groups))
            .map_or(u128::MAX, |limit| limit - 1)
    }

    /// Every known word with its token, in table order.
    pub fn entries(&self) -> &[(&'static str, Token)] {
        &self.entries
    }

    /// Every known word, in table order.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(word, _)| *word)
    }
}
