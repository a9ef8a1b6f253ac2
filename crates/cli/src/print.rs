// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output.
use anyhow::Result;
use serde_json::json;
use std::io;

use pokermojo_core::{
    Card, Comparison, EvaluatedHand, HandPair, SCENARIOS, Source, evaluate,
};

/// Prints a generated pair.
pub fn print_pair(w: &mut impl io::Write, round: usize, pair: &HandPair) -> Result<()> {
    match pair.source() {
        Source::Random => writeln!(w, "Pair {round}")?,
        Source::Scenario(idx) => {
            let lesson = SCENARIOS.get(idx).map(|s| s.lesson()).unwrap_or_default();
            writeln!(w, "Pair {round} (scenario {idx}: {lesson})")?;
        }
    }

    print_hand(w, "A", pair.hand_a())?;
    print_hand(w, "B", pair.hand_b())?;
    writeln!(w, "  Winner: {}", pair.winner())?;

    Ok(())
}

/// Prints a generated pair as a JSON line.
pub fn print_pair_json(w: &mut impl io::Write, pair: &HandPair) -> Result<()> {
    serde_json::to_writer(&mut *w, pair)?;
    writeln!(w)?;
    Ok(())
}

/// Prints an evaluated hand with a label.
pub fn print_hand(w: &mut impl io::Write, label: &str, hand: &EvaluatedHand) -> Result<()> {
    writeln!(
        w,
        "  {label}: {}  {} {}",
        format_cards(hand.cards()),
        hand.rank(),
        hand.tiebreak()
    )?;

    Ok(())
}

/// Prints the result of comparing two hands.
pub fn print_comparison(
    w: &mut impl io::Write,
    first: &EvaluatedHand,
    second: &EvaluatedHand,
    result: Comparison,
) -> Result<()> {
    print_hand(w, "First", first)?;
    print_hand(w, "Second", second)?;

    let result = match result {
        Comparison::FirstWins => "First wins",
        Comparison::SecondWins => "Second wins",
        Comparison::Tie => "Tie",
    };
    writeln!(w, "  {result}")?;

    Ok(())
}

/// Prints the scenarios library.
pub fn print_scenarios(w: &mut impl io::Write, as_json: bool) -> Result<()> {
    for (idx, scenario) in SCENARIOS.iter().enumerate() {
        let (a, b) = scenario.hands();
        let (hand_a, hand_b) = (evaluate(*a), evaluate(*b));
        let winner = HandPair::new(hand_a.clone(), hand_b.clone(), Source::Scenario(idx))
            .map(|pair| pair.winner().to_string())
            .unwrap_or_else(|| "tie".to_string());

        if as_json {
            let value = json!({
                "index": idx,
                "lesson": scenario.lesson(),
                "hand_a": hand_a,
                "hand_b": hand_b,
                "winner": winner,
            });
            serde_json::to_writer(&mut *w, &value)?;
            writeln!(w)?;
        } else {
            writeln!(w, "{idx:>2}. {}", scenario.lesson())?;
            print_hand(w, "A", &hand_a)?;
            print_hand(w, "B", &hand_b)?;
            writeln!(w, "  Winner: {winner}")?;
        }
    }

    Ok(())
}

/// Formats cards with their suit symbols.
fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| format!("{}{}", c.rank(), c.suit().symbol()))
        .collect::<Vec<_>>()
        .join(" ")
}
