// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! PokerMojo cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pokermojo_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to deal two disjoint 5-cards hands from a seeded deck:
//!
//! ```
//! # use pokermojo_cards::Deck;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(7));
//! let h1 = deck.deal_hand();
//! let h2 = deck.deal_hand();
//! assert!(h1.iter().all(|c| !h2.contains(c)));
//! assert_eq!(deck.count(), 42);
//! ```
//!
//! or to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use pokermojo_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each_hand(|hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
