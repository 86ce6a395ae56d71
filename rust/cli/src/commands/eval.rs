//! Hand evaluation command.
//!
//! Parses 5-7 cards, evaluates the best five-card hand, and prints the
//! category, the constituent cards, the tie-break kickers, and the
//! comparable score.

use std::io::Write;

use crate::commands::{ensure_distinct, fmt_cards, parse_cards};
use crate::error::CliError;
use rangelab_engine::hand::evaluate;

/// Evaluates the cards given on the command line.
///
/// # Arguments
///
/// * `cards` - Card tokens as passed on the command line
/// * `json` - Emit a JSON object instead of the text report
/// * `out` - Output stream for the result
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when the hand evaluates cleanly.
pub fn handle_eval_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let joined = cards.join(" ");
    let cards = parse_cards(&joined)?;
    ensure_distinct(&cards)?;
    let hand = evaluate(&cards)?;

    if json {
        let value = serde_json::json!({
            "category": hand.category.to_string(),
            "cards": hand.cards.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "kickers": hand.kickers.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "score": hand.score,
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "Category: {}", hand.category)?;
        writeln!(out, "Best five: {}", fmt_cards(&hand.cards))?;
        let kickers: Vec<String> = hand.kickers.iter().map(ToString::to_string).collect();
        writeln!(out, "Kickers: {}", kickers.join(" "))?;
        writeln!(out, "Score: {}", hand.score)?;
    }
    Ok(())
}
