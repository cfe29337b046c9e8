//! Implementation of the `cardinal money` command.

use cardinal::ParseMode;
use cardinal::money::MoneyConverter;
use clap::Args;
use miette::Result;
use owo_colors::{OwoColorize, Stream};

use super::{load_vocabulary, print_json};

/// Arguments for the money command.
#[derive(Debug, Args)]
pub struct MoneyArgs {
    /// Amount in digits ("345003.09") or in words
    #[arg(required = true, num_args = 1..)]
    pub amount: Vec<String>,

    /// Currency name for the whole part (e.g. naira, dollars)
    #[arg(long = "whole", env = "CARDINAL_WHOLE_CURRENCY")]
    pub whole_currency: String,

    /// Currency name for the fractional part (e.g. kobo, cents)
    #[arg(long = "decimal", env = "CARDINAL_DECIMAL_CURRENCY", default_value = "")]
    pub decimal_currency: String,

    /// Fail on unknown words when the amount is given as a phrase
    #[arg(long, env = "CARDINAL_STRICT")]
    pub strict: bool,

    /// Largest magnitude word to use (e.g. "trillion")
    #[arg(long, env = "CARDINAL_SCALE_LIMIT")]
    pub scale_limit: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the money command.
pub fn run_money(args: MoneyArgs) -> Result<i32> {
    let vocabulary = load_vocabulary(args.scale_limit.as_deref())?;
    let mode = if args.strict {
        ParseMode::Strict
    } else {
        ParseMode::Permissive
    };
    let converter = MoneyConverter::builder()
        .whole_currency(args.whole_currency)
        .decimal_currency(args.decimal_currency)
        .vocabulary(&vocabulary)
        .mode(mode)
        .build();

    let amount = args.amount.join(" ");
    match converter.convert(&amount) {
        Ok(words) => {
            if args.json {
                print_json(&words)?;
            } else {
                println!("{}", words.full);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = serde_json::json!({
                    "input": amount,
                    "error": e.to_string(),
                });
                eprintln!("{output:#}");
            } else {
                eprintln!(
                    "{}: {e}",
                    "error".if_supports_color(Stream::Stderr, |t| t.red())
                );
            }
            Ok(exitcode::DATAERR)
        }
    }
}
