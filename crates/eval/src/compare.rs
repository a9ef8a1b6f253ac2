// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands comparison.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::eval::EvaluatedHand;

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// The first hand is stronger.
    FirstWins,
    /// The second hand is stronger.
    SecondWins,
    /// The hands have the same strength.
    Tie,
}

impl Comparison {
    /// The result with the hands swapped.
    pub fn reverse(self) -> Self {
        match self {
            Comparison::FirstWins => Comparison::SecondWins,
            Comparison::SecondWins => Comparison::FirstWins,
            Comparison::Tie => Comparison::Tie,
        }
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Greater => Comparison::FirstWins,
            Ordering::Less => Comparison::SecondWins,
            Ordering::Equal => Comparison::Tie,
        }
    }
}

/// Compares two evaluated hands.
///
/// The higher category wins, hands with the same category are compared by
/// their tiebreak keys from the most significant value.
pub fn compare(first: &EvaluatedHand, second: &EvaluatedHand) -> Comparison {
    first
        .rank()
        .cmp(&second.rank())
        .then_with(|| first.tiebreak().cmp(second.tiebreak()))
        .into()
}
