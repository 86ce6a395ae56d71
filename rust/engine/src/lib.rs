//! # rangelab-engine: Hand Evaluation & Equity Core
//!
//! The evaluation and equity-estimation engine behind the rangelab poker
//! trainer. Given 5-7 cards it finds the best five-card hand and a single
//! comparable score; given hole cards and an opponent hand or range it
//! estimates win probability by Monte Carlo simulation with reproducible,
//! injectable randomness.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), deck construction,
//!   dead-card removal
//! - [`deck`] - Deterministic deck shuffling with a seeded ChaCha20 RNG
//! - [`notation`] - Starting-hand notation ("AKs") parsing and expansion
//! - [`hand`] - Hand evaluation, scoring, and strength comparison
//! - [`board`] - Nut-hand search over a board
//! - [`equity`] - Heads-up and range equity estimation
//! - [`logger`] - Query logging and JSONL serialization
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use rangelab_engine::cards::{Card, Rank, Suit};
//! use rangelab_engine::hand::{evaluate, Category};
//!
//! // Evaluate a 7-card hand
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Clubs),
//!     Card::new(Rank::Three, Suit::Diamonds),
//! ];
//!
//! let best = evaluate(&cards).unwrap();
//! assert_eq!(best.category, Category::RoyalFlush);
//! ```
//!
//! ## Equity Estimation
//!
//! Simulations take a caller-supplied generator, so results are
//! reproducible and independent workers can own independently seeded
//! generators, combining counts afterwards:
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use rangelab_engine::cards::{Card, Rank, Suit};
//! use rangelab_engine::equity::heads_up_equity;
//!
//! let aces = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ];
//! let kings = [
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let result = heads_up_equity(aces, kings, &[], 2_000, &mut rng);
//! assert!(result.equity() > 70.0);
//! ```
//!
//! ## Hand Notation
//!
//! Opponent ranges arrive as notation strings and expand to concrete
//! combos:
//!
//! ```rust
//! use rangelab_engine::notation::StartingHand;
//!
//! let hand: StartingHand = "AKs".parse().unwrap();
//! assert_eq!(hand.combos().len(), 4);
//! assert_eq!(hand.to_string(), "AKs");
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod equity;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod notation;
