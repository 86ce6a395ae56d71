use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{for_each_combination, full_deck, remove_cards, Card};
use crate::hand::best_of;
use crate::notation::StartingHand;

/// Win/tie/loss counts over a number of simulated runouts.
///
/// Counters are plain sums, so results from independently seeded runs
/// (worker threads, per-combo sub-runs) combine with [`absorb`].
///
/// [`absorb`]: EquityResult::absorb
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    pub trials: u64,
}

impl EquityResult {
    /// Equity percentage: (wins + ties/2) / trials * 100.
    /// Zero trials yield 0.0 rather than a division error.
    pub fn equity(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / self.trials as f64 * 100.0
    }

    /// Sums another result into this one.
    pub fn absorb(&mut self, other: &EquityResult) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        self.trials += other.trials;
    }

    fn record(&mut self, outcome: Ordering) {
        self.trials += 1;
        match outcome {
            Ordering::Greater => self.wins += 1,
            Ordering::Equal => self.ties += 1,
            Ordering::Less => self.losses += 1,
        }
    }
}

/// An [`EquityResult`] plus the combo count actually simulated after
/// dead-card filtering, which may be smaller than the nominal size of the
/// supplied range.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RangeEquityResult {
    pub totals: EquityResult,
    pub range_size: usize,
}

/// How a range query spends its trials.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RangeStrategy {
    /// A fixed trial count against every retained combo, aggregated.
    /// Higher accuracy; cost scales with range size.
    PerCombo { trials_per_combo: u32 },
    /// Each trial picks one retained combo uniformly at random, then runs
    /// a single heads-up trial. Approximates a uniform mixture over the
    /// range; combos are weighted equally, not by any frequency model.
    Sampled { total_trials: u32 },
}

/// Monte Carlo equity of `hero` against a known `villain` hand.
///
/// The completion pool is a fresh deck minus hero, villain, and board;
/// each trial Fisher-Yates-shuffles the pool, takes the first
/// `5 - board.len()` cards as the runout, and compares both seven-card
/// hands. The result is a statistical estimate; callers choose `trials`
/// to bound variance, or use [`heads_up_equity_exhaustive`] for exact
/// answers on small pools.
pub fn heads_up_equity<R: Rng + ?Sized>(
    hero: [Card; 2],
    villain: [Card; 2],
    board: &[Card],
    trials: u32,
    rng: &mut R,
) -> EquityResult {
    debug_assert!(groups_disjoint(&hero, &villain, board));
    let mut pool = completion_pool(&hero, &villain, board);
    let need = 5usize.saturating_sub(board.len());
    let mut result = EquityResult::default();
    for _ in 0..trials {
        let (runout, _) = pool.partial_shuffle(rng, need);
        let outcome = trial_outcome(hero, villain, board, runout);
        result.record(outcome);
    }
    result
}

/// Exact equity by enumerating every runout of the completion pool
/// instead of sampling. Exponential in the number of missing board
/// cards, so intended for turn/river boards and fixed tests.
pub fn heads_up_equity_exhaustive(
    hero: [Card; 2],
    villain: [Card; 2],
    board: &[Card],
) -> EquityResult {
    debug_assert!(groups_disjoint(&hero, &villain, board));
    let pool = completion_pool(&hero, &villain, board);
    let need = 5usize.saturating_sub(board.len());
    let mut result = EquityResult::default();
    for_each_combination(&pool, need, &mut |runout| {
        let outcome = trial_outcome(hero, villain, board, runout);
        result.record(outcome);
    });
    result
}

/// Monte Carlo equity of `hero` against a range of starting-hand
/// notations.
///
/// Every notation expands to concrete combos, and any combo sharing a
/// card with hero or board is discarded before a single trial runs; the
/// retained count is reported as `range_size`. An empty post-filter range
/// returns a zero-trial result (equity 0.0) rather than dividing by zero.
pub fn equity_vs_range<R: Rng + ?Sized>(
    hero: [Card; 2],
    range: &[StartingHand],
    board: &[Card],
    strategy: RangeStrategy,
    rng: &mut R,
) -> RangeEquityResult {
    let mut dead: Vec<Card> = Vec::with_capacity(7);
    dead.extend_from_slice(&hero);
    dead.extend_from_slice(board);
    let combos: Vec<[Card; 2]> = range
        .iter()
        .flat_map(|hand| hand.combos())
        .filter(|combo| !combo.iter().any(|c| dead.contains(c)))
        .collect();
    let range_size = combos.len();
    let mut totals = EquityResult::default();
    if range_size == 0 {
        return RangeEquityResult { totals, range_size };
    }
    match strategy {
        RangeStrategy::PerCombo { trials_per_combo } => {
            for &combo in &combos {
                totals.absorb(&heads_up_equity(hero, combo, board, trials_per_combo, rng));
            }
        }
        RangeStrategy::Sampled { total_trials } => {
            for _ in 0..total_trials {
                let combo = combos[rng.random_range(0..range_size)];
                totals.absorb(&heads_up_equity(hero, combo, board, 1, rng));
            }
        }
    }
    RangeEquityResult { totals, range_size }
}

fn completion_pool(hero: &[Card; 2], villain: &[Card; 2], board: &[Card]) -> Vec<Card> {
    let mut dead: Vec<Card> = Vec::with_capacity(9);
    dead.extend_from_slice(hero);
    dead.extend_from_slice(villain);
    dead.extend_from_slice(board);
    remove_cards(&full_deck(), &dead)
}

fn trial_outcome(hero: [Card; 2], villain: [Card; 2], board: &[Card], runout: &[Card]) -> Ordering {
    let hero_best = best_of(&seven_cards(hero, board, runout));
    let villain_best = best_of(&seven_cards(villain, board, runout));
    hero_best.score.cmp(&villain_best.score)
}

fn seven_cards(hole: [Card; 2], board: &[Card], runout: &[Card]) -> Vec<Card> {
    let mut cards = Vec::with_capacity(7);
    cards.extend_from_slice(&hole);
    cards.extend_from_slice(board);
    cards.extend_from_slice(runout);
    cards
}

fn groups_disjoint(hero: &[Card; 2], villain: &[Card; 2], board: &[Card]) -> bool {
    let mut seen: Vec<Card> = Vec::with_capacity(9);
    for &c in hero.iter().chain(villain.iter()).chain(board.iter()) {
        if seen.contains(&c) {
            return false;
        }
        seen.push(c);
    }
    true
}
