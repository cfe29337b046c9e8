//! CLI command implementations.

mod money;
mod parse;
mod say;
mod vocab;

use std::borrow::Cow;

use cardinal::Vocabulary;
use miette::{IntoDiagnostic, Result};

pub use money::{MoneyArgs, run_money};
pub use parse::{ParseArgs, run_parse};
pub use say::{SayArgs, run_say};
pub use vocab::{VocabArgs, run_vocab};

/// The English vocabulary, optionally cut off at `scale_limit`.
fn load_vocabulary(scale_limit: Option<&str>) -> Result<Cow<'static, Vocabulary>> {
    match scale_limit {
        Some(word) => Vocabulary::with_scale_limit(word)
            .map(Cow::Owned)
            .into_diagnostic(),
        None => Ok(Cow::Borrowed(Vocabulary::english())),
    }
}

/// Print a value as pretty JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
