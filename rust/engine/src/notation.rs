use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cards::{all_suits, Card, Rank};
use crate::errors::EngineError;

/// A starting-hand category in compact notation: "AA", "AKs", "T9o".
///
/// This is a category, not a concrete pair of cards: it expands to 6
/// combinations for a pocket pair, 4 suited, 12 offsuit. Ranks are always
/// normalized high-first, and pairs are never suited.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct StartingHand {
    high: Rank,
    low: Rank,
    suited: bool,
}

impl StartingHand {
    pub fn new(a: Rank, b: Rank, suited: bool) -> Self {
        let (high, low) = if a >= b { (a, b) } else { (b, a) };
        let suited = if high == low { false } else { suited };
        Self { high, low, suited }
    }

    /// Canonical notation of two concrete cards.
    /// Total and deterministic over all 1,326 two-card combinations.
    pub fn from_cards(a: Card, b: Card) -> Self {
        Self::new(a.rank, b.rank, a.suit == b.suit)
    }

    pub fn high(&self) -> Rank {
        self.high
    }

    pub fn low(&self) -> Rank {
        self.low
    }

    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn suited(&self) -> bool {
        self.suited
    }

    /// Number of concrete combinations this category expands to.
    pub fn combo_count(&self) -> usize {
        if self.is_pair() {
            6
        } else if self.suited {
            4
        } else {
            12
        }
    }

    /// Every concrete 2-card combination matching this category, in a
    /// deterministic suit-loop order.
    pub fn combos(&self) -> Vec<[Card; 2]> {
        let suits = all_suits();
        let mut out = Vec::with_capacity(self.combo_count());
        if self.is_pair() {
            for i in 0..suits.len() {
                for j in i + 1..suits.len() {
                    out.push([
                        Card::new(self.high, suits[i]),
                        Card::new(self.low, suits[j]),
                    ]);
                }
            }
        } else if self.suited {
            for &s in &suits {
                out.push([Card::new(self.high, s), Card::new(self.low, s)]);
            }
        } else {
            for &sh in &suits {
                for &sl in &suits {
                    if sh != sl {
                        out.push([Card::new(self.high, sh), Card::new(self.low, sl)]);
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for StartingHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high.to_char(), self.low.to_char())?;
        if !self.is_pair() {
            write!(f, "{}", if self.suited { 's' } else { 'o' })?;
        }
        Ok(())
    }
}

impl FromStr for StartingHand {
    type Err = EngineError;

    /// Parses `rank rank [s|o]`, case-insensitively.
    ///
    /// Rejects pairs with a suffix, non-pairs without one, ranks written
    /// low-first, and anything that is not a valid rank character.
    fn from_str(s: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidNotation {
            input: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(invalid());
        }
        let high = Rank::from_char(chars[0]).ok_or_else(invalid)?;
        let low = Rank::from_char(chars[1]).ok_or_else(invalid)?;
        if high < low {
            return Err(invalid());
        }
        if high == low {
            if chars.len() == 3 {
                return Err(invalid());
            }
            return Ok(Self {
                high,
                low,
                suited: false,
            });
        }
        let suited = match chars.get(2).map(|c| c.to_ascii_lowercase()) {
            Some('s') => true,
            Some('o') => false,
            _ => return Err(invalid()),
        };
        Ok(Self { high, low, suited })
    }
}

/// Parses a comma- or whitespace-separated list of notations.
/// Empty items are skipped; an empty input yields an empty range.
pub fn parse_range(input: &str) -> Result<Vec<StartingHand>, EngineError> {
    input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(str::parse)
        .collect()
}
