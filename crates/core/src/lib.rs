// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! PokerMojo hand pairs generation.
//!
//! A [PairGenerator] deals two 5-cards hands and tells which one wins, the
//! pair is never a tie:
//!
//! ```
//! # use pokermojo_core::*;
//! let mut generator = PairGenerator::seeded(42);
//!
//! let pair = generator.generate(Mode::Standard);
//! let winner = pair.hand(pair.winner());
//! let loser = pair.hand(pair.winner().other());
//! assert!(winner.rank() > loser.rank());
//! ```
//!
//! In [Mode::Standard] the hands are dealt from a shuffled deck and always have
//! different categories. In [Mode::Hard] half of the pairs come from the
//! [SCENARIOS] library of tricky comparisons, like a flush decided by the
//! fourth card, with random suits.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod pair;
pub use pair::{Config, HandPair, Mode, PairGenerator, Side, Source};
mod random;
pub mod scenario;
pub use scenario::{SCENARIOS, Scenario};
pub mod suits;

// Reexport evaluator types.
pub use pokermojo_eval::{
    Card, Comparison, Deck, EvaluatedHand, HandRank, Rank, Suit, TiebreakKey, compare, evaluate,
    try_evaluate,
};
