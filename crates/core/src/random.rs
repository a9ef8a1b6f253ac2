// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random hand pairs.
use log::{debug, warn};
use rand::prelude::*;

use pokermojo_cards::Deck;
use pokermojo_eval::evaluate;

use crate::pair::{HandPair, Source};

/// Deals random hand pairs until the two hands have different categories.
///
/// After `max_attempts` deals the category constraint is dropped and the first
/// pair that is not a tie is accepted.
pub(crate) fn random_pair<R: Rng + ?Sized>(rng: &mut R, max_attempts: usize) -> HandPair {
    let mut attempts = 0usize;

    loop {
        attempts += 1;

        let mut deck = Deck::new_and_shuffled(rng);
        let hand_a = evaluate(deck.deal_hand());
        let hand_b = evaluate(deck.deal_hand());

        let same_rank = hand_a.rank() == hand_b.rank();
        if same_rank && attempts < max_attempts {
            continue;
        }

        if let Some(pair) = HandPair::new(hand_a, hand_b, Source::Random) {
            if same_rank {
                warn!(
                    "Accepted a {} pair after {attempts} attempts",
                    pair.hand_a().rank()
                );
            } else {
                debug!("Random pair dealt in {attempts} attempts");
            }

            return pair;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn different_categories() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..2_000 {
            let pair = random_pair(&mut rng, 1_000);
            assert_ne!(pair.hand_a().rank(), pair.hand_b().rank());
            assert_eq!(pair.source(), Source::Random);

            let cards = pair
                .hand_a()
                .cards()
                .iter()
                .chain(pair.hand_b().cards())
                .collect::<HashSet<_>>();
            assert_eq!(cards.len(), 10);
        }
    }

    #[test]
    fn relaxed_after_max_attempts() {
        let mut rng = StdRng::seed_from_u64(12);

        // With a single attempt same category pairs are accepted but never
        // ties.
        let mut same_rank = 0;
        for _ in 0..2_000 {
            let pair = random_pair(&mut rng, 1);
            if pair.hand_a().rank() == pair.hand_b().rank() {
                same_rank += 1;
            }
        }

        assert!(same_rank > 0);
    }
}
