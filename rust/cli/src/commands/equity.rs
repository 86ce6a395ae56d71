//! Equity estimation command.
//!
//! Runs a seeded Monte Carlo simulation against a known villain hand or a
//! range of starting-hand notations, and optionally records the query as a
//! JSONL line for later study.

use std::io::Write;
use std::path::PathBuf;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::commands::{ensure_distinct, parse_cards};
use crate::error::CliError;
use rangelab_engine::cards::Card;
use rangelab_engine::equity::{equity_vs_range, heads_up_equity, EquityResult, RangeStrategy};
use rangelab_engine::logger::{QueryLogger, QueryRecord};
use rangelab_engine::notation::parse_range;

/// Parsed `equity` subcommand arguments.
#[derive(Debug)]
pub struct EquityOptions {
    pub hero: String,
    pub villain: Option<String>,
    pub range: Option<String>,
    pub board: String,
    pub trials: u32,
    pub per_combo: bool,
    pub seed: Option<u64>,
    pub log: Option<PathBuf>,
    pub json: bool,
}

struct QueryOutcome {
    totals: EquityResult,
    range_size: Option<usize>,
    kind: &'static str,
    villain: Option<Vec<Card>>,
    range: Option<Vec<String>>,
}

/// Runs an equity query.
///
/// Exactly one of `--villain` or `--range` must be supplied. The seed
/// defaults to a random one and is always printed, so any run can be
/// reproduced exactly.
pub fn handle_equity_command(opts: &EquityOptions, out: &mut dyn Write) -> Result<(), CliError> {
    let hero = parse_hole_cards(&opts.hero, "hero")?;
    let board = parse_cards(&opts.board)?;
    if board.len() > 5 {
        return Err(CliError::InvalidInput(
            "board cannot exceed five cards".to_string(),
        ));
    }

    let seed = opts.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    let outcome = match (&opts.villain, &opts.range) {
        (Some(villain_spec), None) => {
            let villain = parse_hole_cards(villain_spec, "villain")?;
            let mut all = hero.to_vec();
            all.extend_from_slice(&villain);
            all.extend_from_slice(&board);
            ensure_distinct(&all)?;
            let totals = heads_up_equity(hero, villain, &board, opts.trials, &mut rng);
            QueryOutcome {
                totals,
                range_size: None,
                kind: "headsup",
                villain: Some(villain.to_vec()),
                range: None,
            }
        }
        (None, Some(range_spec)) => {
            let mut all = hero.to_vec();
            all.extend_from_slice(&board);
            ensure_distinct(&all)?;
            let range = parse_range(range_spec)?;
            let strategy = if opts.per_combo {
                RangeStrategy::PerCombo {
                    trials_per_combo: opts.trials,
                }
            } else {
                RangeStrategy::Sampled {
                    total_trials: opts.trials,
                }
            };
            let result = equity_vs_range(hero, &range, &board, strategy, &mut rng);
            QueryOutcome {
                totals: result.totals,
                range_size: Some(result.range_size),
                kind: "range",
                villain: None,
                range: Some(range.iter().map(ToString::to_string).collect()),
            }
        }
        _ => {
            return Err(CliError::InvalidInput(
                "provide exactly one of --villain or --range".to_string(),
            ))
        }
    };

    if opts.json {
        let value = serde_json::json!({
            "kind": outcome.kind,
            "equity": outcome.totals.equity(),
            "wins": outcome.totals.wins,
            "ties": outcome.totals.ties,
            "losses": outcome.totals.losses,
            "trials": outcome.totals.trials,
            "range_size": outcome.range_size,
            "seed": seed,
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "Equity: {:.1}%", outcome.totals.equity())?;
        writeln!(
            out,
            "Record: {} wins / {} ties / {} losses ({} trials)",
            outcome.totals.wins, outcome.totals.ties, outcome.totals.losses, outcome.totals.trials
        )?;
        if let Some(size) = outcome.range_size {
            writeln!(out, "Range combos: {}", size)?;
        }
        writeln!(out, "Seed: {}", seed)?;
    }

    if let Some(path) = &opts.log {
        let mut logger = QueryLogger::create(path)?;
        let record = QueryRecord {
            query_id: logger.next_id(),
            kind: outcome.kind.to_string(),
            seed: Some(seed),
            hero: hero.to_vec(),
            villain: outcome.villain,
            range: outcome.range,
            board,
            result: outcome.totals,
            equity: outcome.totals.equity(),
            range_size: outcome.range_size,
            ts: None,
            meta: None,
        };
        logger.write(&record)?;
    }

    Ok(())
}

fn parse_hole_cards(spec: &str, who: &str) -> Result<[Card; 2], CliError> {
    let cards = parse_cards(spec)?;
    match cards.as_slice() {
        &[a, b] => Ok([a, b]),
        _ => Err(CliError::InvalidInput(format!(
            "{who} must be exactly two cards, got {}",
            cards.len()
        ))),
    }
}
