// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Curated library of tricky hand pairs.
//!
//! Each [Scenario] is a pair of hands built to teach one comparison edge case,
//! like a flush decided by the fourth card or a six high straight against the
//! wheel. The suits in the templates are placeholders, [Scenario::deal] gives
//! the hands fresh suits, the same ranks and the same categories.
//!
//! The library doesn't store which hand wins, the winner is always computed by
//! evaluating the dealt hands.
use rand::prelude::*;

use pokermojo_cards::{Card, Rank, Suit};
use pokermojo_eval::evaluate;

use crate::suits::randomize_suits;

use Rank::*;
use Suit::*;

/// A hand pair template.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    lesson: &'static str,
    hand_a: [Card; 5],
    hand_b: [Card; 5],
}

impl Scenario {
    pub(crate) const fn new(lesson: &'static str, hand_a: [Card; 5], hand_b: [Card; 5]) -> Self {
        Self {
            lesson,
            hand_a,
            hand_b,
        }
    }

    /// What this scenario is about.
    pub fn lesson(&self) -> &'static str {
        self.lesson
    }

    /// The template hands with their placeholder suits.
    pub fn hands(&self) -> (&[Card; 5], &[Card; 5]) {
        (&self.hand_a, &self.hand_b)
    }

    /// Deals this scenario hands with random suits.
    ///
    /// Each hand keeps its ranks and stays a flush only if the template hand
    /// is a flush. The hands are randomly swapped and their cards shuffled so
    /// that neither the position nor the cards order gives a hint about the
    /// winner.
    pub fn deal<R: Rng + ?Sized>(&self, rng: &mut R) -> ([Card; 5], [Card; 5]) {
        let flush_a = evaluate(self.hand_a).rank().is_flush();
        let flush_b = evaluate(self.hand_b).rank().is_flush();

        let mut hand_a = randomize_suits(rng, &self.hand_a, flush_a);
        let mut hand_b = randomize_suits(rng, &self.hand_b, flush_b);

        if rng.random_bool(0.5) {
            std::mem::swap(&mut hand_a, &mut hand_b);
        }

        hand_a.shuffle(rng);
        hand_b.shuffle(rng);

        (hand_a, hand_b)
    }
}

const fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// The scenarios library.
#[rustfmt::skip]
pub static SCENARIOS: [Scenario; 44] = [
    Scenario::new(
        "Flush vs flush, top card decides",
        [c(King, Spades), c(Jack, Spades), c(Eight, Spades), c(Five, Spades), c(Trey, Spades)],
        [c(Queen, Hearts), c(Jack, Hearts), c(Nine, Hearts), c(Six, Hearts), c(Deuce, Hearts)],
    ),
    Scenario::new(
        "Ace high flushes, third card decides",
        [c(Ace, Diamonds), c(Ten, Diamonds), c(Eight, Diamonds), c(Four, Diamonds), c(Deuce, Diamonds)],
        [c(Ace, Clubs), c(Ten, Clubs), c(Seven, Clubs), c(Five, Clubs), c(Trey, Clubs)],
    ),
    Scenario::new(
        "Full house vs full house, trips decide",
        [c(Jack, Spades), c(Jack, Hearts), c(Jack, Diamonds), c(Four, Clubs), c(Four, Spades)],
        [c(Nine, Spades), c(Nine, Hearts), c(Nine, Diamonds), c(Ace, Clubs), c(Ace, Spades)],
    ),
    Scenario::new(
        "Full house vs four of a kind",
        [c(Seven, Spades), c(Seven, Hearts), c(Seven, Diamonds), c(King, Clubs), c(King, Hearts)],
        [c(Eight, Clubs), c(Eight, Spades), c(Eight, Hearts), c(Eight, Diamonds), c(Queen, Clubs)],
    ),
    Scenario::new(
        "Nine high straight vs eight high straight",
        [c(Nine, Spades), c(Eight, Hearts), c(Seven, Diamonds), c(Six, Clubs), c(Five, Spades)],
        [c(Eight, Spades), c(Seven, Hearts), c(Six, Diamonds), c(Five, Clubs), c(Four, Spades)],
    ),
    Scenario::new(
        "Six high straight vs the wheel",
        [c(Six, Spades), c(Five, Hearts), c(Four, Diamonds), c(Trey, Clubs), c(Deuce, Spades)],
        [c(Five, Clubs), c(Four, Spades), c(Trey, Hearts), c(Deuce, Diamonds), c(Ace, Clubs)],
    ),
    Scenario::new(
        "Same pair, first kicker decides",
        [c(Queen, Spades), c(Queen, Hearts), c(Jack, Diamonds), c(Eight, Clubs), c(Trey, Spades)],
        [c(Queen, Diamonds), c(Queen, Clubs), c(Ten, Spades), c(Nine, Hearts), c(Four, Diamonds)],
    ),
    Scenario::new(
        "Higher pair beats better kickers",
        [c(Ten, Spades), c(Ten, Hearts), c(Ace, Diamonds), c(King, Clubs), c(Five, Spades)],
        [c(Jack, Spades), c(Jack, Hearts), c(Seven, Diamonds), c(Four, Clubs), c(Deuce, Spades)],
    ),
    Scenario::new(
        "Same top pair, second pair decides",
        [c(King, Spades), c(King, Hearts), c(Eight, Diamonds), c(Eight, Clubs), c(Trey, Spades)],
        [c(King, Diamonds), c(King, Clubs), c(Six, Spades), c(Six, Hearts), c(Ace, Diamonds)],
    ),
    Scenario::new(
        "Two pair, top pair decides",
        [c(Queen, Spades), c(Queen, Hearts), c(Five, Diamonds), c(Five, Clubs), c(Nine, Spades)],
        [c(Jack, Diamonds), c(Jack, Clubs), c(Ten, Spades), c(Ten, Hearts), c(Ace, Diamonds)],
    ),
    Scenario::new(
        "Three of a kind, trips rank decides",
        [c(Eight, Spades), c(Eight, Hearts), c(Eight, Diamonds), c(King, Clubs), c(Four, Spades)],
        [c(Six, Diamonds), c(Six, Clubs), c(Six, Spades), c(Ace, Hearts), c(Queen, Diamonds)],
    ),
    Scenario::new(
        "High card, fourth card decides",
        [c(Ace, Spades), c(Jack, Hearts), c(Nine, Diamonds), c(Six, Clubs), c(Trey, Spades)],
        [c(Ace, Diamonds), c(Jack, Clubs), c(Nine, Spades), c(Five, Hearts), c(Four, Diamonds)],
    ),
    Scenario::new(
        "Straight flush vs ace high flush",
        [c(Eight, Hearts), c(Seven, Hearts), c(Six, Hearts), c(Five, Hearts), c(Four, Hearts)],
        [c(Ace, Spades), c(King, Spades), c(Queen, Spades), c(Jack, Spades), c(Trey, Spades)],
    ),
    Scenario::new(
        "Straight flush vs straight flush",
        [c(Nine, Diamonds), c(Eight, Diamonds), c(Seven, Diamonds), c(Six, Diamonds), c(Five, Diamonds)],
        [c(Seven, Clubs), c(Six, Clubs), c(Five, Clubs), c(Four, Clubs), c(Trey, Clubs)],
    ),
    Scenario::new(
        "Low four of a kind vs aces full",
        [c(Five, Spades), c(Five, Hearts), c(Five, Diamonds), c(Five, Clubs), c(Deuce, Spades)],
        [c(Ace, Spades), c(Ace, Hearts), c(Ace, Diamonds), c(King, Clubs), c(King, Spades)],
    ),
    Scenario::new(
        "Four of a kind vs four of a kind",
        [c(Nine, Spades), c(Nine, Hearts), c(Nine, Diamonds), c(Nine, Clubs), c(Trey, Spades)],
        [c(Seven, Spades), c(Seven, Hearts), c(Seven, Diamonds), c(Seven, Clubs), c(Ace, Spades)],
    ),
    Scenario::new(
        "Straight vs three aces",
        [c(Six, Spades), c(Five, Hearts), c(Four, Diamonds), c(Trey, Clubs), c(Deuce, Spades)],
        [c(Ace, Diamonds), c(Ace, Clubs), c(Ace, Spades), c(King, Hearts), c(Queen, Diamonds)],
    ),
    Scenario::new(
        "Nine high flush vs broadway straight",
        [c(Nine, Hearts), c(Seven, Hearts), c(Five, Hearts), c(Trey, Hearts), c(Deuce, Hearts)],
        [c(Ace, Spades), c(King, Hearts), c(Queen, Diamonds), c(Jack, Clubs), c(Ten, Spades)],
    ),
    Scenario::new(
        "Ace queen flushes, third card decides",
        [c(Ace, Spades), c(Queen, Spades), c(Ten, Spades), c(Six, Spades), c(Deuce, Spades)],
        [c(Ace, Hearts), c(Queen, Hearts), c(Nine, Hearts), c(Seven, Hearts), c(Four, Hearts)],
    ),
    Scenario::new(
        "Flush vs flush, fourth card decides",
        [c(King, Diamonds), c(Jack, Diamonds), c(Nine, Diamonds), c(Seven, Diamonds), c(Trey, Diamonds)],
        [c(King, Clubs), c(Jack, Clubs), c(Nine, Clubs), c(Five, Clubs), c(Four, Clubs)],
    ),
    Scenario::new(
        "Broadway vs king high straight",
        [c(Ace, Spades), c(King, Hearts), c(Queen, Diamonds), c(Jack, Clubs), c(Ten, Spades)],
        [c(King, Diamonds), c(Queen, Clubs), c(Jack, Spades), c(Ten, Hearts), c(Nine, Diamonds)],
    ),
    Scenario::new(
        "Queen high vs jack high straight",
        [c(Queen, Spades), c(Jack, Hearts), c(Ten, Diamonds), c(Nine, Clubs), c(Eight, Spades)],
        [c(Jack, Diamonds), c(Ten, Clubs), c(Nine, Spades), c(Eight, Hearts), c(Seven, Diamonds)],
    ),
    Scenario::new(
        "Seven high straight vs the wheel",
        [c(Seven, Spades), c(Six, Hearts), c(Five, Diamonds), c(Four, Clubs), c(Trey, Spades)],
        [c(Five, Clubs), c(Four, Spades), c(Trey, Hearts), c(Deuce, Diamonds), c(Ace, Clubs)],
    ),
    Scenario::new(
        "Same two pair, kicker decides",
        [c(Ace, Spades), c(Ace, Hearts), c(Nine, Diamonds), c(Nine, Clubs), c(King, Spades)],
        [c(Ace, Diamonds), c(Ace, Clubs), c(Nine, Spades), c(Nine, Hearts), c(Queen, Diamonds)],
    ),
    Scenario::new(
        "Aces up vs kings and queens",
        [c(Ace, Spades), c(Ace, Hearts), c(Four, Diamonds), c(Four, Clubs), c(Seven, Spades)],
        [c(King, Diamonds), c(King, Clubs), c(Queen, Spades), c(Queen, Hearts), c(Jack, Diamonds)],
    ),
    Scenario::new(
        "Low two pair, top pair decides",
        [c(Six, Spades), c(Six, Hearts), c(Four, Diamonds), c(Four, Clubs), c(Ace, Spades)],
        [c(Five, Diamonds), c(Five, Clubs), c(Trey, Spades), c(Trey, Hearts), c(King, Diamonds)],
    ),
    Scenario::new(
        "Pair of aces, second kicker decides",
        [c(Ace, Spades), c(Ace, Hearts), c(King, Diamonds), c(Ten, Clubs), c(Four, Spades)],
        [c(Ace, Diamonds), c(Ace, Clubs), c(King, Spades), c(Nine, Hearts), c(Five, Diamonds)],
    ),
    Scenario::new(
        "Low pairs, third kicker decides",
        [c(Trey, Spades), c(Trey, Hearts), c(Ace, Diamonds), c(King, Clubs), c(Queen, Spades)],
        [c(Trey, Diamonds), c(Trey, Clubs), c(Ace, Spades), c(King, Hearts), c(Jack, Diamonds)],
    ),
    Scenario::new(
        "Consecutive pairs with the same kickers",
        [c(Eight, Spades), c(Eight, Hearts), c(Ace, Diamonds), c(King, Clubs), c(Queen, Spades)],
        [c(Seven, Diamonds), c(Seven, Clubs), c(Ace, Spades), c(King, Hearts), c(Queen, Diamonds)],
    ),
    Scenario::new(
        "Three tens vs three nines with better kickers",
        [c(Ten, Spades), c(Ten, Hearts), c(Ten, Diamonds), c(Five, Clubs), c(Deuce, Spades)],
        [c(Nine, Diamonds), c(Nine, Clubs), c(Nine, Spades), c(Ace, Hearts), c(King, Diamonds)],
    ),
    Scenario::new(
        "Three aces vs three kings",
        [c(Ace, Spades), c(Ace, Hearts), c(Ace, Diamonds), c(Four, Clubs), c(Deuce, Spades)],
        [c(King, Diamonds), c(King, Clubs), c(King, Spades), c(Queen, Hearts), c(Jack, Diamonds)],
    ),
    Scenario::new(
        "Ace high, second card decides",
        [c(Ace, Spades), c(King, Hearts), c(Eight, Diamonds), c(Five, Clubs), c(Trey, Spades)],
        [c(Ace, Diamonds), c(Queen, Clubs), c(Jack, Spades), c(Ten, Hearts), c(Four, Diamonds)],
    ),
    Scenario::new(
        "King high, third card decides",
        [c(King, Spades), c(Queen, Hearts), c(Ten, Diamonds), c(Six, Clubs), c(Deuce, Spades)],
        [c(King, Diamonds), c(Queen, Clubs), c(Nine, Spades), c(Seven, Hearts), c(Trey, Diamonds)],
    ),
    Scenario::new(
        "High card, fifth card decides",
        [c(Ace, Spades), c(Jack, Hearts), c(Nine, Diamonds), c(Seven, Clubs), c(Four, Spades)],
        [c(Ace, Diamonds), c(Jack, Clubs), c(Nine, Spades), c(Seven, Hearts), c(Trey, Diamonds)],
    ),
    Scenario::new(
        "Kings full vs queens full of aces",
        [c(King, Spades), c(King, Hearts), c(King, Diamonds), c(Six, Clubs), c(Six, Spades)],
        [c(Queen, Diamonds), c(Queen, Clubs), c(Queen, Spades), c(Ace, Hearts), c(Ace, Diamonds)],
    ),
    Scenario::new(
        "Threes full vs deuces full of kings",
        [c(Trey, Spades), c(Trey, Hearts), c(Trey, Diamonds), c(Ace, Clubs), c(Ace, Spades)],
        [c(Deuce, Diamonds), c(Deuce, Clubs), c(Deuce, Spades), c(King, Hearts), c(King, Diamonds)],
    ),
    Scenario::new(
        "Steel wheel vs broadway straight",
        [c(Five, Hearts), c(Four, Hearts), c(Trey, Hearts), c(Deuce, Hearts), c(Ace, Hearts)],
        [c(Ace, Spades), c(King, Hearts), c(Queen, Diamonds), c(Jack, Clubs), c(Ten, Spades)],
    ),
    Scenario::new(
        "Four fours vs four treys with an ace",
        [c(Four, Spades), c(Four, Hearts), c(Four, Diamonds), c(Four, Clubs), c(Ace, Spades)],
        [c(Trey, Diamonds), c(Trey, Clubs), c(Trey, Spades), c(Trey, Hearts), c(King, Diamonds)],
    ),
    Scenario::new(
        "Full house vs ace high flush",
        [c(Six, Spades), c(Six, Hearts), c(Six, Diamonds), c(Deuce, Clubs), c(Deuce, Spades)],
        [c(Ace, Clubs), c(King, Clubs), c(Queen, Clubs), c(Jack, Clubs), c(Nine, Clubs)],
    ),
    Scenario::new(
        "Low two pair vs pair of aces",
        [c(Five, Spades), c(Five, Hearts), c(Trey, Diamonds), c(Trey, Clubs), c(Deuce, Spades)],
        [c(Ace, Diamonds), c(Ace, Clubs), c(King, Spades), c(Queen, Hearts), c(Jack, Diamonds)],
    ),
    Scenario::new(
        "Pair of deuces vs ace high",
        [c(Deuce, Spades), c(Deuce, Hearts), c(Seven, Diamonds), c(Five, Clubs), c(Trey, Spades)],
        [c(Ace, Diamonds), c(King, Clubs), c(Queen, Spades), c(Jack, Hearts), c(Nine, Diamonds)],
    ),
    Scenario::new(
        "Three fours vs aces and kings",
        [c(Four, Spades), c(Four, Hearts), c(Four, Diamonds), c(Trey, Clubs), c(Deuce, Spades)],
        [c(Ace, Diamonds), c(Ace, Clubs), c(King, Spades), c(King, Hearts), c(Queen, Diamonds)],
    ),
    Scenario::new(
        "Suited straight with one off suit card vs flush",
        [c(Nine, Hearts), c(Eight, Hearts), c(Seven, Hearts), c(Six, Hearts), c(Five, Spades)],
        [c(Ace, Diamonds), c(King, Diamonds), c(Jack, Diamonds), c(Eight, Diamonds), c(Trey, Diamonds)],
    ),
    Scenario::new(
        "Flush with a gap vs straight",
        [c(Jack, Clubs), c(Ten, Clubs), c(Eight, Clubs), c(Seven, Clubs), c(Six, Clubs)],
        [c(Ten, Spades), c(Nine, Hearts), c(Eight, Diamonds), c(Seven, Clubs), c(Six, Spades)],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use pokermojo_eval::{Comparison, HandRank, compare};

    #[test]
    fn templates_are_valid_hands() {
        for (idx, scenario) in SCENARIOS.iter().enumerate() {
            let (a, b) = scenario.hands();
            for hand in [a, b] {
                let cards = hand.iter().collect::<HashSet<_>>();
                assert_eq!(cards.len(), 5, "scenario {idx} has duplicate cards");
            }
            assert!(!scenario.lesson().is_empty());
        }
    }

    #[test]
    fn templates_never_tie() {
        for (idx, scenario) in SCENARIOS.iter().enumerate() {
            let (a, b) = scenario.hands();
            let result = compare(&evaluate(*a), &evaluate(*b));
            assert_ne!(result, Comparison::Tie, "scenario {idx} is a tie");
        }
    }

    #[test]
    fn deal_keeps_ranks_and_categories() {
        let mut rng = StdRng::seed_from_u64(1);

        for (idx, scenario) in SCENARIOS.iter().enumerate() {
            let (a, b) = scenario.hands();
            let (ta, tb) = (evaluate(*a), evaluate(*b));
            let expected = compare(&ta, &tb);

            for _ in 0..200 {
                let (da, db) = scenario.deal(&mut rng);
                let (ea, eb) = (evaluate(da), evaluate(db));

                // Hands may have been swapped.
                let swapped = ea.rank() != ta.rank() || ea.tiebreak() != ta.tiebreak();
                let (ea, eb) = if swapped { (eb, ea) } else { (ea, eb) };
                let result = compare(&ea, &eb);

                assert_eq!(ea.rank(), ta.rank(), "scenario {idx}");
                assert_eq!(eb.rank(), tb.rank(), "scenario {idx}");
                assert_eq!(ea.tiebreak(), ta.tiebreak(), "scenario {idx}");
                assert_eq!(eb.tiebreak(), tb.tiebreak(), "scenario {idx}");
                assert_eq!(result, expected, "scenario {idx}");

                for hand in [&ea, &eb] {
                    let cards = hand.cards().iter().collect::<HashSet<_>>();
                    assert_eq!(cards.len(), 5, "scenario {idx} dealt duplicate cards");
                }
            }
        }
    }

    #[test]
    fn deal_swaps_hands() {
        let mut rng = StdRng::seed_from_u64(2);

        // Four of a kind vs full house.
        let scenario = &SCENARIOS[14];
        let (mut first, mut second) = (0, 0);
        for _ in 0..200 {
            let (a, _) = scenario.deal(&mut rng);
            match evaluate(a).rank() {
                HandRank::FourOfAKind => first += 1,
                HandRank::FullHouse => second += 1,
                rank => panic!("unexpected rank {rank}"),
            }
        }

        assert!(first > 50 && second > 50, "first={first} second={second}");
    }

    #[test]
    fn library_coverage() {
        let mut ranks = HashSet::default();
        for scenario in &SCENARIOS {
            let (a, b) = scenario.hands();
            ranks.insert(evaluate(*a).rank());
            ranks.insert(evaluate(*b).rank());
        }

        // Every category but the royal flush shows up.
        assert_eq!(ranks.len(), 9);
        assert!(!ranks.contains(&HandRank::RoyalFlush));
    }
}
