//! Shared English cardinal-number vocabulary.
//!
//! This crate is the single source of truth for word/value mappings, used by
//! both the phrase generator (value to words) and the phrase parser (words to
//! value) in `cardinal`, so the two directions cannot drift apart.

use serde::Serialize;

/// Unit words, indexed by digit.
pub const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Teen words, indexed by `n - 10`.
pub const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words from twenty to ninety, indexed by `tens digit - 2`.
pub const TENS: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Words that carry no numeric value and are skipped by the parser.
pub const FILLERS: &[&str] = &["and"];

/// How a magnitude word acts on the running totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeKind {
    /// Scales the current group without closing it ("hundred").
    BlockMultiplier,
    /// Closes the current group, applying its scale ("thousand", "million").
    GroupStop,
}

/// A magnitude word and the multiplier it denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Magnitude {
    pub word: &'static str,
    pub value: u128,
    pub kind: MagnitudeKind,
}

impl Magnitude {
    /// A group stop word whose value is `1000^power`.
    ///
    /// Panics at compile time (in const contexts) if the power overflows `u128`.
    pub const fn group_stop(word: &'static str, power: u32) -> Self {
        Self {
            word,
            value: 1000u128.pow(power),
            kind: MagnitudeKind::GroupStop,
        }
    }
}

/// The only block multiplier in English cardinals.
pub const HUNDRED: Magnitude = Magnitude {
    word: "hundred",
    value: 100,
    kind: MagnitudeKind::BlockMultiplier,
};

/// Short-scale group stops in rank order. Entry `i` scales group `i + 1`.
pub const SCALES: [Magnitude; 11] = [
    Magnitude::group_stop("thousand", 1),
    Magnitude::group_stop("million", 2),
    Magnitude::group_stop("billion", 3),
    Magnitude::group_stop("trillion", 4),
    Magnitude::group_stop("quadrillion", 5),
    Magnitude::group_stop("quintillion", 6),
    Magnitude::group_stop("sextillion", 7),
    Magnitude::group_stop("septillion", 8),
    Magnitude::group_stop("octillion", 9),
    Magnitude::group_stop("nonillion", 10),
    Magnitude::group_stop("decillion", 11),
];

/// Canonical classification of a single vocabulary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// A unit, teen or tens word with its value (0 to 90).
    Number(u8),
    /// A magnitude word.
    Magnitude(Magnitude),
    /// A connective such as "and".
    Filler,
}

/// Resolve a lowercase word against the full English vocabulary.
///
/// Resolution order:
/// 1. Fillers
/// 2. Units, teens and tens
/// 3. "hundred" and the short-scale group stops
pub fn resolve_word(word: &str) -> Option<WordClass> {
    if FILLERS.contains(&word) {
        return Some(WordClass::Filler);
    }
    if let Some(value) = number_value(word) {
        return Some(WordClass::Number(value));
    }
    if word == HUNDRED.word {
        return Some(WordClass::Magnitude(HUNDRED));
    }
    SCALES
        .iter()
        .find(|scale| scale.word == word)
        .map(|scale| WordClass::Magnitude(*scale))
}

/// Value of a unit, teen or tens word.
pub fn number_value(word: &str) -> Option<u8> {
    if let Some(digit) = position(&UNITS, word) {
        return Some(digit);
    }
    if let Some(offset) = position(&TEENS, word) {
        return Some(10 + offset);
    }
    position(&TENS, word).map(|offset| (offset + 2) * 10)
}

/// Every number word (units, teens, tens) in ascending value order.
pub fn number_words() -> impl Iterator<Item = &'static str> {
    UNITS.iter().chain(TEENS.iter()).chain(TENS.iter()).copied()
}

fn position(table: &[&str], word: &str) -> Option<u8> {
    table
        .iter()
        .position(|candidate| *candidate == word)
        .and_then(|index| u8::try_from(index).ok())
}
