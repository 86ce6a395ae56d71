//! Command handler modules for the rangelab CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod deal;
mod equity;
mod eval;
mod nuts;

pub use deal::handle_deal_command;
pub use equity::{handle_equity_command, EquityOptions};
pub use eval::handle_eval_command;
pub use nuts::handle_nuts_command;

use crate::error::CliError;
use rangelab_engine::cards::Card;

/// Parses a card list: whitespace- or comma-separated tokens, each either
/// a single card ("Ah") or a run of concatenated cards ("AhKd").
pub(crate) fn parse_cards(input: &str) -> Result<Vec<Card>, CliError> {
    let mut cards = Vec::new();
    for token in input.split(|ch: char| ch == ',' || ch.is_whitespace()) {
        if token.is_empty() {
            continue;
        }
        let chars: Vec<char> = token.chars().collect();
        if chars.len() % 2 != 0 {
            return Err(CliError::InvalidInput(format!("bad card token: {token}")));
        }
        for chunk in chars.chunks(2) {
            let s: String = chunk.iter().collect();
            cards.push(s.parse::<Card>()?);
        }
    }
    Ok(cards)
}

/// Rejects card groups containing the same physical card twice.
pub(crate) fn ensure_distinct(cards: &[Card]) -> Result<(), CliError> {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(CliError::InvalidInput(format!("duplicate card: {card}")));
        }
    }
    Ok(())
}

/// Space-joined display form of a card list.
pub(crate) fn fmt_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
