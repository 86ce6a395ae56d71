//! Deal command handler for single-hand inspection.
//!
//! Deals two hole hands and a full board from a seeded deck, evaluates
//! both seats, and names the winner. Useful for spot-checking the deck
//! and evaluator together; the printed seed reproduces the exact deal.

use std::io::Write;

use crate::commands::fmt_cards;
use crate::error::CliError;
use rangelab_engine::deck::Deck;
use rangelab_engine::hand::{evaluate, find_winners};

/// Deals and shows one complete hand.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let seat1 = deck.deal_n(2);
    let seat2 = deck.deal_n(2);
    deck.burn_card();
    let mut board = deck.deal_n(3);
    deck.burn_card();
    board.extend(deck.deal_n(1));
    deck.burn_card();
    board.extend(deck.deal_n(1));

    let mut seat1_cards = seat1.clone();
    seat1_cards.extend_from_slice(&board);
    let mut seat2_cards = seat2.clone();
    seat2_cards.extend_from_slice(&board);
    let best1 = evaluate(&seat1_cards)?;
    let best2 = evaluate(&seat2_cards)?;

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Seat 1: {}  ({})", fmt_cards(&seat1), best1.category)?;
    writeln!(out, "Seat 2: {}  ({})", fmt_cards(&seat2), best2.category)?;
    writeln!(out, "Board: {}", fmt_cards(&board))?;

    let winners = find_winners(&[best1, best2]);
    let result = match winners.as_slice() {
        [0] => "Seat 1 wins",
        [1] => "Seat 2 wins",
        _ => "Split pot",
    };
    writeln!(out, "Result: {}", result)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_deal() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(99), &mut out1).unwrap();
        handle_deal_command(Some(99), &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn deal_prints_the_full_layout() {
        let mut out = Vec::new();
        handle_deal_command(Some(5), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Seat 1:"));
        assert!(text.contains("Seat 2:"));
        assert!(text.contains("Board:"));
        assert!(text.contains("Result:"));
        assert!(text.contains("Seed: 5"));
    }
}
