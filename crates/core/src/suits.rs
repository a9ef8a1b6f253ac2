// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Suits randomization for template hands.
use ahash::AHashMap;
use rand::prelude::*;

use pokermojo_cards::{Card, Rank, Suit};

/// Returns the hand cards with random suits.
///
/// If `flush` is set all the cards get the same random suit, otherwise each
/// card gets a suit not yet used by a card of the same rank, so the hand has
/// no duplicate cards, and if all the cards end up with the same suit one of
/// them is changed to a different suit so that the hand is not a flush.
///
/// The cards ranks and order don't change.
pub fn randomize_suits<R: Rng + ?Sized>(rng: &mut R, cards: &[Card; 5], flush: bool) -> [Card; 5] {
    if flush {
        let suit = random_suit(rng, &Suit::ALL);
        return cards.map(|c| c.with_suit(suit));
    }

    let mut hand = *cards;
    let mut rank_suits = AHashMap::<Rank, Vec<Suit>>::with_capacity(hand.len());

    for card in hand.iter_mut() {
        let used = rank_suits.entry(card.rank()).or_default();

        let mut available = Suit::suits()
            .filter(|s| !used.contains(s))
            .collect::<Vec<_>>();
        if available.is_empty() {
            available = Suit::ALL.to_vec();
        }

        let suit = random_suit(rng, &available);
        used.push(suit);
        *card = card.with_suit(suit);
    }

    // All cards with the same suit have distinct ranks, so any of them can be
    // moved to another suit without creating a duplicate card.
    let flush_suit = hand[0].suit();
    if hand.iter().all(|c| c.suit() == flush_suit) {
        let others = Suit::suits()
            .filter(|s| *s != flush_suit)
            .collect::<Vec<_>>();
        let idx = rng.random_range(0..hand.len());
        hand[idx] = hand[idx].with_suit(random_suit(rng, &others));
    }

    hand
}

fn random_suit<R: Rng + ?Sized>(rng: &mut R, suits: &[Suit]) -> Suit {
    suits[rng.random_range(0..suits.len())]
}
