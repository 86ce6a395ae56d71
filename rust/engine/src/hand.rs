use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{for_each_combination, Card, Rank};
use crate::errors::EngineError;

/// Hand categories ordered weakest to strongest.
///
/// Royal Flush is kept as a distinct value above Straight Flush for
/// interface compatibility with callers that switch on the category name,
/// even though the score formula would already rank a Broadway straight
/// flush above every other one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        write!(f, "{}", name)
    }
}

/// Strictly greater than the highest rank discriminant (14), so the
/// linearized score orders category first, then kickers lexicographically.
const SCORE_BASE: u32 = 15;

/// The best five-card hand found in an evaluation.
///
/// `kickers` holds the tie-break ranks most significant first; its length
/// is fixed per category. `score` is monotonic with true hand strength,
/// so two hands compare by score alone, and equal scores are a genuine
/// split pot. Computed fresh on every call, never cached.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub category: Category,
    pub kickers: Vec<Rank>,
    pub cards: [Card; 5],
    pub score: u32,
}

/// Evaluates 5, 6, or 7 cards to the best five-card hand.
///
/// With 6 or 7 cards every 5-card subset is classified and the maximum
/// score wins; 21 subsets at most, so brute force stays cheap and obvious.
///
/// # Errors
///
/// [`EngineError::InvalidCardCount`] for any other input length.
pub fn evaluate(cards: &[Card]) -> Result<EvaluatedHand, EngineError> {
    match cards.len() {
        5..=7 => Ok(best_of(cards)),
        count => Err(EngineError::InvalidCardCount { count }),
    }
}

/// Best hand over 5-7 cards; length must already be validated.
pub(crate) fn best_of(cards: &[Card]) -> EvaluatedHand {
    let mut best = classify_five([cards[0], cards[1], cards[2], cards[3], cards[4]]);
    if cards.len() > 5 {
        for_each_combination(cards, 5, &mut |subset| {
            let hand = classify_five([subset[0], subset[1], subset[2], subset[3], subset[4]]);
            if hand.score > best.score {
                best = hand;
            }
        });
    }
    best
}

/// Compares two evaluated hands by score.
pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.score.cmp(&b.score)
}

/// Indices of every hand tied at the maximum score (more than one on a
/// split pot).
pub fn find_winners(hands: &[EvaluatedHand]) -> Vec<usize> {
    let best = match hands.iter().map(|h| h.score).max() {
        Some(score) => score,
        None => return Vec::new(),
    };
    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| h.score == best)
        .map(|(i, _)| i)
        .collect()
}

fn classify_five(cards: [Card; 5]) -> EvaluatedHand {
    let mut rank_counts = [0u8; 15];
    for c in &cards {
        rank_counts[c.rank as usize] += 1;
    }
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let distinct = distinct_ranks_desc(&rank_counts);
    let straight = straight_high(&distinct);

    let quads = ranks_with_count(&rank_counts, 4);
    let trips = ranks_with_count(&rank_counts, 3);
    let pairs = ranks_with_count(&rank_counts, 2);
    let singles = ranks_with_count(&rank_counts, 1);

    let (category, kickers): (Category, Vec<Rank>) = match (is_flush, straight) {
        (true, Some(14)) => (Category::RoyalFlush, vec![Rank::Ace]),
        (true, Some(high)) => (Category::StraightFlush, vec![Rank::from_u8(high)]),
        _ => {
            if let Some(&quad) = quads.first() {
                (Category::FourOfAKind, to_ranks(&[quad, singles[0]]))
            } else if let (Some(&trip), Some(&pair)) = (trips.first(), pairs.first()) {
                (Category::FullHouse, to_ranks(&[trip, pair]))
            } else if is_flush {
                (Category::Flush, to_ranks(&distinct))
            } else if let Some(high) = straight {
                (Category::Straight, to_ranks(&[high]))
            } else if let Some(&trip) = trips.first() {
                (Category::ThreeOfAKind, to_ranks(&[trip, singles[0], singles[1]]))
            } else if pairs.len() >= 2 {
                (Category::TwoPair, to_ranks(&[pairs[0], pairs[1], singles[0]]))
            } else if let Some(&pair) = pairs.first() {
                (
                    Category::OnePair,
                    to_ranks(&[pair, singles[0], singles[1], singles[2]]),
                )
            } else {
                (Category::HighCard, to_ranks(&distinct))
            }
        }
    };

    let score = score_of(category, &kickers);
    EvaluatedHand {
        category,
        kickers,
        cards,
        score,
    }
}

/// Ranks present, highest first.
fn distinct_ranks_desc(counts: &[u8; 15]) -> Vec<u8> {
    (2..=14u8).rev().filter(|&r| counts[r as usize] > 0).collect()
}

/// Ranks occurring exactly `want` times, highest first.
fn ranks_with_count(counts: &[u8; 15], want: u8) -> Vec<u8> {
    (2..=14u8)
        .rev()
        .filter(|&r| counts[r as usize] == want)
        .collect()
}

/// High card of the straight formed by five distinct ranks, if any.
/// The wheel A-2-3-4-5 counts with the Ace playing low, so its high card
/// is the Five; the Ace is never treated as 1 anywhere else.
fn straight_high(distinct_desc: &[u8]) -> Option<u8> {
    if distinct_desc.len() != 5 {
        return None;
    }
    if distinct_desc[0] - distinct_desc[4] == 4 {
        return Some(distinct_desc[0]);
    }
    if *distinct_desc == [14, 5, 4, 3, 2] {
        return Some(5);
    }
    None
}

fn to_ranks(vals: &[u8]) -> Vec<Rank> {
    vals.iter().map(|&v| Rank::from_u8(v)).collect()
}

/// category * B^5 + sum(kicker[i] * B^(4-i)), the total-order encoding.
fn score_of(category: Category, kickers: &[Rank]) -> u32 {
    let mut score = category as u32 * SCORE_BASE.pow(5);
    for (i, &k) in kickers.iter().enumerate() {
        score += k as u32 * SCORE_BASE.pow(4 - i as u32);
    }
    score
}
