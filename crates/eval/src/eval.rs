// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies a 5 cards hand into one of ten [HandRank]
//! categories and computes a [TiebreakKey] that orders hands within the same
//! category. Ace plays high except in the A-2-3-4-5 straight (the wheel) where
//! it plays low and the straight is five high.
use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use pokermojo_cards::Card;

/// The ranks of the A-2-3-4-5 straight sorted by value.
const WHEEL: [u8; 5] = [14, 5, 4, 3, 2];

/// The category of a poker hand, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category matches.
    HighCard = 1,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive rank.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// The ace high straight flush.
    RoyalFlush,
}

impl HandRank {
    /// Returns all the hand ranks from the weakest to the strongest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// The category strength from 1 for high card to 10 for a royal flush.
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// The number of values in the tiebreak key for this category.
    pub const fn key_len(&self) -> usize {
        match self {
            HandRank::RoyalFlush | HandRank::StraightFlush | HandRank::Straight => 1,
            HandRank::FourOfAKind | HandRank::FullHouse => 2,
            HandRank::ThreeOfAKind | HandRank::TwoPair => 3,
            HandRank::OnePair => 4,
            HandRank::Flush | HandRank::HighCard => 5,
        }
    }

    /// Checks if a hand with this rank has all cards of the same suit.
    pub const fn is_flush(&self) -> bool {
        matches!(
            self,
            HandRank::Flush | HandRank::StraightFlush | HandRank::RoyalFlush
        )
    }

    /// The category display name.
    pub const fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ranks values that break ties between hands of the same category.
///
/// The key has at most five values, its length is fixed by the hand category
/// (see [HandRank::key_len]) so that keys of hands with the same category
/// always have the same shape. Keys compare lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct TiebreakKey {
    values: [u8; TiebreakKey::MAX_LEN],
    len: u8,
}

impl TiebreakKey {
    /// The maximum number of values in a key.
    pub const MAX_LEN: usize = 5;

    fn new(values: &[u8]) -> Self {
        debug_assert!(values.len() <= Self::MAX_LEN);

        // Unused values must stay zero for the derived equality.
        let mut key = [0; Self::MAX_LEN];
        key[..values.len()].copy_from_slice(values);
        Self {
            values: key,
            len: values.len() as u8,
        }
    }

    /// The key values, most significant first.
    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    /// The number of values in this key.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Checks if the key has no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Ord for TiebreakKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for TiebreakKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<Vec<u8>> for TiebreakKey {
    type Error = anyhow::Error;

    fn try_from(values: Vec<u8>) -> Result<Self> {
        if values.len() > Self::MAX_LEN {
            bail!("Tiebreak key too long: {values:?}");
        }

        if let Some(v) = values.iter().find(|v| !(2..=14).contains(*v)) {
            bail!("Invalid rank value {v} in tiebreak key");
        }

        Ok(Self::new(&values))
    }
}

impl From<TiebreakKey> for Vec<u8> {
    fn from(key: TiebreakKey) -> Self {
        key.as_slice().to_vec()
    }
}

impl fmt::Display for TiebreakKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}

/// A 5 cards hand with its category and tiebreak key.
///
/// A deserialized hand is evaluated again from its cards, a category or key
/// that doesn't match the cards is an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "HandRecord")]
pub struct EvaluatedHand {
    cards: [Card; 5],
    rank: HandRank,
    tiebreak: TiebreakKey,
}

impl EvaluatedHand {
    /// The hand cards in the order they were evaluated.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The key that breaks ties with hands of the same category.
    pub fn tiebreak(&self) -> &TiebreakKey {
        &self.tiebreak
    }

    /// The hand category display name.
    pub fn name(&self) -> &'static str {
        self.rank.name()
    }

    fn card_list(&self) -> String {
        self.cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The serialized form of an [EvaluatedHand].
#[derive(Deserialize)]
struct HandRecord {
    cards: Vec<Card>,
    #[serde(default)]
    rank: Option<HandRank>,
    #[serde(default)]
    tiebreak: Option<TiebreakKey>,
}

impl TryFrom<HandRecord> for EvaluatedHand {
    type Error = anyhow::Error;

    fn try_from(record: HandRecord) -> Result<Self> {
        let hand = try_evaluate(&record.cards)?;

        if let Some(rank) = record.rank {
            ensure!(
                rank == hand.rank,
                "Hand {} is a {}, not a {rank}",
                hand.card_list(),
                hand.rank
            );
        }

        if let Some(tiebreak) = record.tiebreak {
            ensure!(
                tiebreak == hand.tiebreak,
                "Hand {} has tiebreak key {}, not {tiebreak}",
                hand.card_list(),
                hand.tiebreak
            );
        }

        Ok(hand)
    }
}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }

        write!(f, "{} {}", self.rank, self.tiebreak)
    }
}

/// Evaluates a 5 cards hand.
///
/// The cards must be distinct, duplicate cards are a caller error and give a
/// meaningless result.
pub fn evaluate(cards: [Card; 5]) -> EvaluatedHand {
    debug_assert!(
        cards
            .iter()
            .enumerate()
            .all(|(i, c)| !cards[i + 1..].contains(c)),
        "duplicate cards in {cards:?}"
    );

    let mut values = cards.map(|c| c.rank().value());
    values.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_wheel = values == WHEEL;
    let is_straight = is_wheel || values.windows(2).all(|w| w[0] == w[1] + 1);
    let straight_high = if is_wheel { 5 } else { values[0] };

    // Group ranks as (count, rank), values are sorted so ranks are descending.
    let mut groups = [(0u8, 0u8); 5];
    let mut num_groups = 0;
    for v in values {
        if num_groups > 0 && groups[num_groups - 1].1 == v {
            groups[num_groups - 1].0 += 1;
        } else {
            groups[num_groups] = (1, v);
            num_groups += 1;
        }
    }

    // Larger groups first, the stable sort keeps higher ranks first among
    // groups with the same count.
    let groups = &mut groups[..num_groups];
    groups.sort_by(|a, b| b.0.cmp(&a.0));

    let (rank, tiebreak) = match *groups {
        _ if is_flush && is_straight && values[0] == 14 && values[1] == 13 => {
            (HandRank::RoyalFlush, TiebreakKey::new(&[14]))
        }
        _ if is_flush && is_straight => {
            (HandRank::StraightFlush, TiebreakKey::new(&[straight_high]))
        }
        [(4, quads), (1, kicker)] => (HandRank::FourOfAKind, TiebreakKey::new(&[quads, kicker])),
        [(3, trips), (2, pair)] => (HandRank::FullHouse, TiebreakKey::new(&[trips, pair])),
        _ if is_flush => (HandRank::Flush, TiebreakKey::new(&values)),
        _ if is_straight => (HandRank::Straight, TiebreakKey::new(&[straight_high])),
        [(3, trips), (1, k1), (1, k2)] => {
            (HandRank::ThreeOfAKind, TiebreakKey::new(&[trips, k1, k2]))
        }
        [(2, high), (2, low), (1, kicker)] => {
            (HandRank::TwoPair, TiebreakKey::new(&[high, low, kicker]))
        }
        [(2, pair), (1, k1), (1, k2), (1, k3)] => {
            (HandRank::OnePair, TiebreakKey::new(&[pair, k1, k2, k3]))
        }
        _ => (HandRank::HighCard, TiebreakKey::new(&values)),
    };

    debug_assert_eq!(tiebreak.len(), rank.key_len());

    EvaluatedHand {
        cards,
        rank,
        tiebreak,
    }
}

/// Evaluates a hand checking it has exactly 5 distinct cards.
pub fn try_evaluate(cards: &[Card]) -> Result<EvaluatedHand> {
    let Ok(hand) = <[Card; 5]>::try_from(cards) else {
        bail!("A hand must have 5 cards, got {}", cards.len());
    };

    for (i, card) in hand.iter().enumerate() {
        if hand[i + 1..].contains(card) {
            bail!("Duplicate card {card} in hand");
        }
    }

    Ok(evaluate(hand))
}
