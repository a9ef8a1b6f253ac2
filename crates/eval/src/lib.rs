// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! PokerMojo hand evaluator.
//!
//! Evaluates 5 cards poker hands into one of ten categories, from high card to
//! royal flush, with a tiebreak key that orders hands within a category.
//!
//! To use the evaluator create a hand, [evaluate] it to get its category and
//! [compare] it with another hand:
//!
//! ```
//! # use pokermojo_eval::*;
//! let cards = |s: &str| -> [Card; 5] {
//!     let cards = s.split(' ').map(|c| c.parse().unwrap()).collect::<Vec<Card>>();
//!     cards.try_into().unwrap()
//! };
//!
//! let h1 = evaluate(cards("9H 9D 9C 5H 5S"));
//! let h2 = evaluate(cards("AS KS QS JS TS"));
//! assert_eq!(h1.rank(), HandRank::FullHouse);
//! assert_eq!(h1.tiebreak().as_slice(), &[9, 5]);
//! assert_eq!(h2.rank(), HandRank::RoyalFlush);
//! assert_eq!(compare(&h2, &h1), Comparison::FirstWins);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod compare;
pub mod eval;
pub use compare::{Comparison, compare};
pub use eval::{EvaluatedHand, HandRank, TiebreakKey, evaluate, try_evaluate};

// Reexport cards types.
pub use pokermojo_cards::{Card, Deck, Rank, Suit};
