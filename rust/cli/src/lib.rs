//! # rangelab CLI Library
//!
//! Command-line front end for the rangelab equity engine. It exposes the
//! engine's evaluation and equity queries for scripted use and quick
//! study-session checks.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand against
//! injected output streams, so tests can capture everything.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["rangelab", "eval", "Th", "Jh", "Qh", "Kh", "Ah"];
//! let code = rangelab_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Evaluate the best five-card hand from 5-7 cards
//! - `equity`: Estimate equity against a known hand or a range
//! - `nuts`: Find the strongest hole cards for a board
//! - `deal`: Deal a seeded inspection hand

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod error;
pub mod exit_code;

use cli::{Commands, RangelabCli};
use commands::{
    handle_deal_command, handle_equity_command, handle_eval_command, handle_nuts_command,
    EquityOptions,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let parsed = match RangelabCli::try_parse_from(&args) {
        Ok(p) => p,
        Err(e) => {
            let rendered = e.render().to_string();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    let _ = write!(out, "{rendered}");
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{rendered}");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match parsed.command {
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, out),
        Commands::Equity {
            hero,
            villain,
            range,
            board,
            trials,
            per_combo,
            seed,
            log,
            json,
        } => {
            let opts = EquityOptions {
                hero,
                villain,
                range,
                board,
                trials,
                per_combo,
                seed,
                log,
                json,
            };
            handle_equity_command(&opts, out)
        }
        Commands::Nuts { board, json } => handle_nuts_command(&board, json, out),
        Commands::Deal { seed } => handle_deal_command(seed, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            exit_code::ERROR
        }
    }
}
