//! Error types for building custom vocabularies.

use thiserror::Error;

/// An error that occurred while building a [`Vocabulary`](super::Vocabulary).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    /// The requested scale limit is not an English group stop.
    #[error("unknown scale word '{word}'")]
    UnknownScale { word: String },

    /// A scale word the parser could never read back as a single word.
    #[error("'{word}' must be a non-empty run of lowercase ASCII letters")]
    InvalidWord { word: String },

    /// A scale entry is a block multiplier rather than a group stop.
    #[error("'{word}' is not a group stop")]
    NotGroupStop { word: String },

    /// A scale entry is not `1000^rank`.
    #[error("'{word}' must equal 1000^{rank} to scale group {rank}")]
    NonConsecutiveScale { word: String, rank: usize },

    /// A scale word collides with another vocabulary word.
    #[error("'{word}' is already a vocabulary word")]
    DuplicateWord { word: String },
}
