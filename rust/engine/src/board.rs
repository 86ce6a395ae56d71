use serde::{Deserialize, Serialize};

use crate::cards::{for_each_combination, full_deck, remove_cards, Card};
use crate::hand::{best_of, EvaluatedHand};

/// The strongest possible hole cards for a board, with the hand they make.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NutsResult {
    pub hole: [Card; 2],
    pub hand: EvaluatedHand,
}

/// Finds the nuts: the 2-card combination from the remaining deck that
/// makes the highest-scoring hand with the board.
///
/// Returns `None` for boards with fewer than 3 cards (or more than 5),
/// where the question has no defined answer. Enumeration is O(n^2) in the
/// remaining deck, at most C(47,2) = 1,081 pairs on a flop: fine for
/// interactive use, not for inner loops. When several pairs tie at the
/// top (split-pot boards) the first in deck order is returned.
pub fn find_nuts(board: &[Card]) -> Option<NutsResult> {
    if board.len() < 3 || board.len() > 5 {
        return None;
    }
    let remaining = remove_cards(&full_deck(), board);
    let mut best: Option<NutsResult> = None;
    for_each_combination(&remaining, 2, &mut |hole| {
        let mut cards = Vec::with_capacity(board.len() + 2);
        cards.extend_from_slice(hole);
        cards.extend_from_slice(board);
        let hand = best_of(&cards);
        if best.as_ref().map_or(true, |b| hand.score > b.hand.score) {
            best = Some(NutsResult {
                hole: [hole[0], hole[1]],
                hand,
            });
        }
    });
    best
}
