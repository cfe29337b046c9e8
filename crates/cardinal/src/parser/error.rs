//! Parse error types.

use strsim::levenshtein;
use thiserror::Error;

/// An error that occurred while parsing a cardinal phrase.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A word matched no vocabulary entry (strict mode only).
    #[error("unknown number word '{word}' at byte {offset}{}", format_suggestions(suggestions))]
    Lexical {
        word: String,
        offset: usize,
        suggestions: Vec<String>,
    },

    /// The phrase denotes a value larger than `u128::MAX`.
    #[error("value overflows at '{word}' (byte {offset})")]
    Overflow { word: String, offset: usize },
}

impl ParseError {
    /// Byte offset and length of the offending word in the parsed text.
    pub fn span(&self) -> (usize, usize) {
        match self {
            ParseError::Lexical { word, offset, .. } | ParseError::Overflow { word, offset } => {
                (*offset, word.len())
            }
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for words <= 3 chars
/// - distance <= 2 for longer words
/// - Limit to 3 suggestions, closest first
pub fn compute_suggestions<'a>(word: &str, available: impl Iterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if word.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(word, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
