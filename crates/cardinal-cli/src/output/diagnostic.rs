//! Miette diagnostic wrapper for phrase parse errors.

use cardinal::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the offending word of a phrase.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cardinal::parse))]
pub struct PhraseDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PhraseDiagnostic {
    /// Create a diagnostic from a ParseError and the text that was parsed.
    pub fn from_parse_error(text: &str, err: &ParseError) -> Self {
        let (offset, len) = err.span();

        let (message, help) = match err {
            ParseError::Lexical {
                word, suggestions, ..
            } => {
                let help = (!suggestions.is_empty())
                    .then(|| format!("did you mean '{}'?", suggestions.join("', '")));
                (format!("unknown number word '{word}'"), help)
            }
            ParseError::Overflow { .. } => (
                "value is too large to represent".to_string(),
                Some("the largest supported value is 2^128 - 1".to_string()),
            ),
        };

        // Clamp to the text to avoid a miette panic on out-of-bounds spans
        let offset = offset.min(text.len());
        let len = len.min(text.len() - offset).max(1);

        PhraseDiagnostic {
            src: NamedSource::new("phrase", text.to_string()),
            span: (offset, len).into(),
            message,
            help,
        }
    }
}
