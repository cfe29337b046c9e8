//! Cardinal CLI entry point.
//!
//! Provides command-line tools for English cardinal-number phrases:
//! - `cardinal say` - Render numbers as words
//! - `cardinal parse` - Read a phrase back as a number
//! - `cardinal money` - Render an amount with its currency names
//! - `cardinal vocab` - List the vocabulary

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    MoneyArgs, ParseArgs, SayArgs, VocabArgs, run_money, run_parse, run_say, run_vocab,
};
use tracing_subscriber::EnvFilter;

/// English cardinal-number phrase tools.
#[derive(Debug, Parser)]
#[command(name = "cardinal")]
#[command(about = "English cardinal-number phrase tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render numbers as English words
    Say(SayArgs),
    /// Parse an English phrase into a number
    Parse(ParseArgs),
    /// Render a monetary amount with currency names
    Money(MoneyArgs),
    /// List the number vocabulary
    Vocab(VocabArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_logging(verbose: bool) {
    let default = if verbose { "cardinal=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Say(args) => run_say(args),
        Commands::Parse(args) => run_parse(args),
        Commands::Money(args) => run_money(args),
        Commands::Vocab(args) => run_vocab(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
