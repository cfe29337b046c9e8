//! Implementation of the `cardinal say` command.

use cardinal::PhraseGenerator;
use clap::Args;
use miette::Result;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::{load_vocabulary, print_json};

/// Arguments for the say command.
#[derive(Debug, Args)]
pub struct SayArgs {
    /// Integers to render (leading zeros are ignored)
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Largest magnitude word to render with (e.g. "trillion")
    #[arg(long, env = "CARDINAL_SCALE_LIMIT")]
    pub scale_limit: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one rendered number.
#[derive(Debug, Serialize)]
struct SayResult {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    words: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the say command.
pub fn run_say(args: SayArgs) -> Result<i32> {
    let vocabulary = load_vocabulary(args.scale_limit.as_deref())?;
    let generator = PhraseGenerator::new(&vocabulary);

    let results: Vec<SayResult> = args
        .numbers
        .iter()
        .map(|input| {
            let (words, error) = match render(&generator, input) {
                Ok(words) => (Some(words), None),
                Err(error) => (None, Some(error)),
            };
            SayResult {
                input: input.clone(),
                words,
                error,
            }
        })
        .collect();
    let failed = results.iter().any(|r| r.error.is_some());

    if args.json {
        print_json(&results)?;
    } else {
        let labelled = results.len() > 1;
        for result in &results {
            match (&result.words, &result.error) {
                (Some(words), _) if labelled => println!(
                    "{}: {words}",
                    result.input.if_supports_color(Stream::Stdout, |t| t.bold())
                ),
                (Some(words), _) => println!("{words}"),
                (None, Some(error)) => eprintln!(
                    "{}: {error}",
                    "error".if_supports_color(Stream::Stderr, |t| t.red())
                ),
                (None, None) => {}
            }
        }
    }

    Ok(if failed { exitcode::DATAERR } else { exitcode::OK })
}

/// Render one command-line integer, letting the generator reject negatives.
fn render(generator: &PhraseGenerator<'_>, input: &str) -> Result<String, String> {
    let input = input.trim();
    if let Ok(value) = input.parse::<u128>() {
        return generator.generate_unsigned(value).map_err(|e| e.to_string());
    }
    match input.parse::<i128>() {
        Ok(value) => generator.generate(value).map_err(|e| e.to_string()),
        Err(_) => Err(format!("'{input}' is not an integer")),
    }
}
