//! English cardinal phrase to integer.
//!
//! The parser scans words left to right and feeds each classified token into
//! a two-register accumulator: `total` holds closed groups, `group` holds the
//! still-open group. A block multiplier scales `group`; a group stop folds
//! `group * stop` into `total` and resets `group`. Whatever is left in `group`
//! at the end is added unscaled.
//!
//! English never nests magnitude words ("thousand thousand"), so a single
//! level of grouping is enough and no parse tree is built.

mod error;
mod scanner;

use bon::Builder;
use tracing::{debug, trace};

pub use error::{ParseError, compute_suggestions};
use scanner::{Word, scan_words};

use crate::token::Token;
use crate::vocabulary::Vocabulary;

/// What the parser does with words outside the vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Unknown words are noise and are skipped.
    #[default]
    Permissive,
    /// Unknown words fail the parse with [`ParseError::Lexical`].
    Strict,
}

/// Parses English cardinal phrases back into integers.
///
/// Words are separated by whitespace and commas, matched case-insensitively,
/// and may carry leading or trailing punctuation. Hyphenated compounds such as
/// "forty-five" are read part by part.
///
/// # Example
///
/// ```
/// use cardinal::{ParseMode, PhraseParser};
///
/// let parser = PhraseParser::default();
/// assert_eq!(parser.parse("nine hundred billion, seventy million").unwrap(), 900_070_000_000);
///
/// let strict = PhraseParser::builder().mode(ParseMode::Strict).build();
/// assert!(strict.parse("fourty two").is_err());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PhraseParser<'v> {
    /// Vocabulary used to classify words.
    #[builder(default = Vocabulary::english())]
    vocabulary: &'v Vocabulary,

    /// Unknown-word policy.
    #[builder(default)]
    mode: ParseMode,
}

impl Default for PhraseParser<'static> {
    fn default() -> Self {
        PhraseParser::builder().build()
    }
}

impl PhraseParser<'_> {
    /// The unknown-word policy in effect.
    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse a phrase. Empty or separator-only text parses as 0.
    pub fn parse(&self, text: &str) -> Result<u128, ParseError> {
        let mut accumulator = Accumulator::default();
        let mut last = Word { text: "", offset: 0 };

        for word in scan_words(text).into_iter().filter_map(Word::trimmed) {
            for part in word.parts() {
                let token = self.classify(part)?;
                trace!(word = part.text, ?token, "classified word");
                accumulator
                    .push(token)
                    .ok_or_else(|| overflow(part))?;
                last = part;
            }
        }

        accumulator.finish().ok_or_else(|| overflow(last))
    }

    /// Classify a single word (or compound part) as a token.
    fn classify(&self, word: Word<'_>) -> Result<Token, ParseError> {
        let lowered = word.text.to_lowercase();
        if let Some(token) = self.vocabulary.lookup(&lowered) {
            return Ok(token);
        }

        match self.mode {
            ParseMode::Permissive => {
                debug!(word = word.text, offset = word.offset, "discarding unknown word");
                Ok(Token::Discard)
            }
            ParseMode::Strict => Err(ParseError::Lexical {
                word: word.text.to_string(),
                offset: word.offset,
                suggestions: compute_suggestions(&lowered, self.vocabulary.words()),
            }),
        }
    }
}

fn overflow(word: Word<'_>) -> ParseError {
    ParseError::Overflow {
        word: word.text.to_string(),
        offset: word.offset,
    }
}

/// Running totals for a single parse.
#[derive(Debug, Default)]
struct Accumulator {
    /// Value of all closed groups.
    total: u128,
    /// Value of the open group.
    group: u128,
}

impl Accumulator {
    /// Apply one token. Returns `None` on overflow.
    fn push(&mut self, token: Token) -> Option<()> {
        match token {
            Token::Value(value) => {
                self.group = self.group.checked_add(u128::from(value))?;
            }
            // "hundred hundred" scales twice; accepted as-is.
            Token::BlockMultiplier(factor) => {
                self.group = self.group.checked_mul(factor)?;
            }
            Token::GroupStop(factor) => {
                let closed = self.group.checked_mul(factor)?;
                self.total = self.total.checked_add(closed)?;
                self.group = 0;
            }
            Token::Discard => {}
        }
        Some(())
    }

    /// Fold the open group into the total.
    fn finish(self) -> Option<u128> {
        self.total.checked_add(self.group)
    }
}
