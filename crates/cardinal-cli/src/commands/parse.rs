//! Implementation of the `cardinal parse` command.

use cardinal::{ParseMode, PhraseParser};
use clap::Args;
use miette::{Report, Result};
use serde::Serialize;

use super::{load_vocabulary, print_json};
use crate::output::PhraseDiagnostic;

/// Arguments for the parse command.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Phrase to parse; several arguments are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Fail on words outside the number vocabulary instead of skipping them
    #[arg(long, env = "CARDINAL_STRICT")]
    pub strict: bool,

    /// Largest magnitude word to recognize (e.g. "trillion")
    #[arg(long, env = "CARDINAL_SCALE_LIMIT")]
    pub scale_limit: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for parse results.
#[derive(Debug, Serialize)]
struct ParseResult {
    input: String,
    value: String,
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs) -> Result<i32> {
    let vocabulary = load_vocabulary(args.scale_limit.as_deref())?;
    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Permissive
    };
    let parser = PhraseParser::builder()
        .vocabulary(&vocabulary)
        .mode(mode)
        .build();

    let text = args.words.join(" ");
    match parser.parse(&text) {
        Ok(value) => {
            if args.json {
                // u128 does not fit a JSON number
                print_json(&ParseResult {
                    input: text,
                    value: value.to_string(),
                })?;
            } else {
                println!("{value}");
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "input": text,
                    "error": e.to_string(),
                });
                eprintln!("{output:#}");
            } else {
                let diagnostic = PhraseDiagnostic::from_parse_error(&text, &e);
                eprintln!("{:?}", Report::new(diagnostic));
            }
            Ok(exitcode::DATAERR)
        }
    }
}
