//! Monetary amounts in words.
//!
//! Splits an amount into whole and fractional parts, renders each part with
//! the phrase generator and attaches the currency names:
//! `"three hundred and forty-five thousand, three naira, nine kobo only"`.
//! Amounts written as English phrases are normalized through the phrase
//! parser first.

mod amount;
mod error;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use amount::{Amount, is_plain_digits};
pub use error::MoneyError;

use crate::generator::PhraseGenerator;
use crate::parser::{ParseMode, PhraseParser};
use crate::vocabulary::Vocabulary;

/// The words for one converted amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyWords {
    /// The whole part in words, without currency.
    pub whole: String,
    /// The fractional part in words, present only for decimal amounts.
    pub decimal: Option<String>,
    /// The complete sentence with currencies and the trailing "only".
    pub full: String,
}

impl MoneyWords {
    /// The result for an amount of zero: every field empty.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Converts monetary amounts to words.
///
/// # Example
///
/// ```
/// use cardinal::money::MoneyConverter;
///
/// let converter = MoneyConverter::builder()
///     .whole_currency("naira")
///     .decimal_currency("kobo")
///     .build();
///
/// let words = converter.convert("345003.09").unwrap();
/// assert_eq!(words.whole, "three hundred and forty-five thousand, three");
/// assert_eq!(words.decimal.as_deref(), Some("nine"));
/// assert_eq!(
///     words.full,
///     "three hundred and forty-five thousand, three naira, nine kobo only"
/// );
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct MoneyConverter<'v> {
    /// Currency name for the whole part (e.g. "naira", "dollars").
    whole_currency: String,

    /// Currency name for the fractional part (e.g. "kobo", "cents").
    #[builder(default)]
    decimal_currency: String,

    /// Vocabulary used for both rendering and phrase amounts.
    #[builder(default = Vocabulary::english())]
    vocabulary: &'v Vocabulary,

    /// Unknown-word policy for phrase amounts.
    #[builder(default)]
    mode: ParseMode,
}

impl MoneyConverter<'_> {
    /// Currency name for the whole part.
    pub fn whole_currency(&self) -> &str {
        self.whole_currency.trim()
    }

    /// Currency name for the fractional part.
    pub fn decimal_currency(&self) -> &str {
        self.decimal_currency.trim()
    }

    /// Convert an amount given as digits ("345003.09") or as an English
    /// phrase ("three hundred and forty-five").
    pub fn convert(&self, amount: &str) -> Result<MoneyWords, MoneyError> {
        let amount = self.amount(amount)?;
        self.convert_amount(amount)
    }

    /// Convert an already-split amount.
    pub fn convert_amount(&self, amount: Amount) -> Result<MoneyWords, MoneyError> {
        let generator = PhraseGenerator::new(self.vocabulary);
        let whole = generator.generate_unsigned(amount.whole())?;

        if !amount.is_decimal() {
            if whole.is_empty() {
                return Ok(MoneyWords::zero());
            }
            let full = format!("{} only", labelled(&whole, self.whole_currency()));
            return Ok(MoneyWords {
                whole,
                decimal: None,
                full,
            });
        }

        let decimal = generator.generate_unsigned(u128::from(amount.cents()))?;
        let mut parts = Vec::with_capacity(2);
        if !whole.is_empty() {
            parts.push(labelled(&whole, self.whole_currency()));
        }
        parts.push(labelled(&decimal, self.decimal_currency()));
        let full = format!("{} only", parts.join(", "));

        Ok(MoneyWords {
            whole,
            decimal: Some(decimal),
            full,
        })
    }

    /// Split the input into an [`Amount`], reading phrases through the parser.
    fn amount(&self, input: &str) -> Result<Amount, MoneyError> {
        let input = input.trim();
        if input.chars().any(|c| c.is_ascii_digit()) {
            return input.parse();
        }

        debug!(amount = input, "reading amount as a phrase");
        let parser = PhraseParser::builder()
            .vocabulary(self.vocabulary)
            .mode(self.mode)
            .build();
        Ok(Amount::from_whole(parser.parse(input)?))
    }
}

fn labelled(words: &str, currency: &str) -> String {
    if currency.is_empty() {
        words.to_string()
    } else {
        format!("{words} {currency}")
    }
}
