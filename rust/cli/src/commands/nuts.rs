//! Nut-hand command.
//!
//! Enumerates every two-card combination of the remaining deck against a
//! board and reports the strongest one.

use std::io::Write;

use crate::commands::{ensure_distinct, fmt_cards, parse_cards};
use crate::error::CliError;
use rangelab_engine::board::find_nuts;

/// Finds the nuts for the given board cards.
///
/// # Returns
///
/// `Result<(), CliError>`: `Ok(())` when the board has three to five
/// distinct cards.
pub fn handle_nuts_command(board: &str, json: bool, out: &mut dyn Write) -> Result<(), CliError> {
    let board = parse_cards(board)?;
    ensure_distinct(&board)?;
    let nuts = find_nuts(&board).ok_or_else(|| {
        CliError::InvalidInput("board must have three to five cards".to_string())
    })?;

    if json {
        let value = serde_json::json!({
            "hole": nuts.hole.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "category": nuts.hand.category.to_string(),
            "best_five": nuts.hand.cards.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "score": nuts.hand.score,
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "Nut hole cards: {}", fmt_cards(&nuts.hole))?;
        writeln!(out, "Category: {}", nuts.hand.category)?;
        writeln!(out, "Best five: {}", fmt_cards(&nuts.hand.cards))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn royal_board_reports_royal_flush() {
        let mut out = Vec::new();
        handle_nuts_command("ThJhQh", false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Category: Royal Flush"));
        assert!(text.contains("Ah"));
        assert!(text.contains("Kh"));
    }

    #[test]
    fn short_boards_are_invalid_input() {
        let mut out = Vec::new();
        let err = handle_nuts_command("ThJh", false, &mut out).unwrap_err();
        assert!(err.to_string().contains("three to five"));
    }
}
