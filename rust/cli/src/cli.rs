//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "rangelab",
    version,
    about = "Hand evaluation and equity engine for poker training"
)]
pub struct RangelabCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate the best five-card hand from 5-7 cards
    Eval {
        /// Cards in two-character notation, e.g. Ah Kd Qs Jc Th
        cards: Vec<String>,
        /// Emit the result as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Estimate equity against a known hand or a range
    Equity {
        /// Hero hole cards, e.g. "AhAd"
        #[arg(long)]
        hero: String,
        /// Villain hole cards, e.g. "KsKc"
        #[arg(long, conflicts_with = "range")]
        villain: Option<String>,
        /// Villain range notations, e.g. "QQ,JJ,AKs"
        #[arg(long)]
        range: Option<String>,
        /// Board cards, e.g. "2s7s9h"
        #[arg(long, default_value = "")]
        board: String,
        /// Trial count (per retained combo with --per-combo, total otherwise)
        #[arg(long, default_value_t = 10_000)]
        trials: u32,
        /// Run the fixed trial count against every retained combo
        #[arg(long)]
        per_combo: bool,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Write the query record to a JSONL log file
        #[arg(long)]
        log: Option<PathBuf>,
        /// Emit the result as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Find the strongest hole cards for a board
    Nuts {
        /// Board cards, three to five, e.g. "ThJhQh"
        #[arg(long)]
        board: String,
        /// Emit the result as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Deal a seeded inspection hand: two hole hands and a full board
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
}
