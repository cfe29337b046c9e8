//! Implementation of the `cardinal vocab` command.

use clap::Args;
use miette::Result;
use serde::Serialize;

use super::{load_vocabulary, print_json};
use crate::output::table::format_vocabulary_table;

/// Arguments for the vocab command.
#[derive(Debug, Args)]
pub struct VocabArgs {
    /// Largest magnitude word to list (e.g. "trillion")
    #[arg(long, env = "CARDINAL_SCALE_LIMIT")]
    pub scale_limit: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one vocabulary entry.
#[derive(Debug, Serialize)]
struct VocabEntry {
    word: &'static str,
    role: &'static str,
    value: Option<String>,
}

/// Run the vocab command.
pub fn run_vocab(args: VocabArgs) -> Result<i32> {
    let vocabulary = load_vocabulary(args.scale_limit.as_deref())?;

    if args.json {
        let entries: Vec<VocabEntry> = vocabulary
            .entries()
            .iter()
            .map(|&(word, token)| VocabEntry {
                word,
                role: token.role(),
                value: token.value().map(|v| v.to_string()),
            })
            .collect();
        print_json(&entries)?;
    } else {
        println!("{}", format_vocabulary_table(&vocabulary));
        println!(
            "Largest renderable value: {} ({})",
            vocabulary.max_value(),
            vocabulary.largest_word()
        );
    }

    Ok(exitcode::OK)
}
