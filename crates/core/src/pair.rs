// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand pairs generation.
use anyhow::{Result, anyhow, bail, ensure};
use log::{debug, error};
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use pokermojo_eval::{Comparison, EvaluatedHand, compare, evaluate};

use crate::{
    random::random_pair,
    scenario::{SCENARIOS, Scenario},
};

/// The game difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Random hands of different categories.
    #[default]
    Standard,
    /// Random hands mixed with tricky scenarios.
    Hard,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Mode::Standard),
            "hard" => Ok(Mode::Hard),
            _ => Err(anyhow!("Invalid mode '{s}', expected 'standard' or 'hard'")),
        }
    }
}

/// One side of a hand pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The first hand.
    A,
    /// The second hand.
    B,
}

impl Side {
    /// The opposite side.
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Where a hand pair comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// Dealt from a shuffled deck.
    Random,
    /// Dealt from the scenario at this index in [SCENARIOS].
    Scenario(usize),
}

/// Two evaluated hands and the winning side.
///
/// A pair is never a tie, a deserialized pair is compared again and must
/// have the same winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PairRecord")]
pub struct HandPair {
    hand_a: EvaluatedHand,
    hand_b: EvaluatedHand,
    winner: Side,
    source: Source,
}

impl HandPair {
    /// Creates a pair, returns `None` if the hands are a tie.
    pub fn new(hand_a: EvaluatedHand, hand_b: EvaluatedHand, source: Source) -> Option<Self> {
        let winner = match compare(&hand_a, &hand_b) {
            Comparison::FirstWins => Side::A,
            Comparison::SecondWins => Side::B,
            Comparison::Tie => return None,
        };

        Some(Self {
            hand_a,
            hand_b,
            winner,
            source,
        })
    }

    /// The first hand.
    pub fn hand_a(&self) -> &EvaluatedHand {
        &self.hand_a
    }

    /// The second hand.
    pub fn hand_b(&self) -> &EvaluatedHand {
        &self.hand_b
    }

    /// The hand on the given side.
    pub fn hand(&self, side: Side) -> &EvaluatedHand {
        match side {
            Side::A => &self.hand_a,
            Side::B => &self.hand_b,
        }
    }

    /// The side with the stronger hand.
    pub fn winner(&self) -> Side {
        self.winner
    }

    /// Where this pair comes from.
    pub fn source(&self) -> Source {
        self.source
    }
}

/// The serialized form of a [HandPair].
#[derive(Deserialize)]
struct PairRecord {
    hand_a: EvaluatedHand,
    hand_b: EvaluatedHand,
    winner: Side,
    source: Source,
}

impl TryFrom<PairRecord> for HandPair {
    type Error = anyhow::Error;

    fn try_from(record: PairRecord) -> Result<Self> {
        let pair = HandPair::new(record.hand_a, record.hand_b, record.source)
            .ok_or_else(|| anyhow!("Hand pair is a tie"))?;
        ensure!(
            pair.winner == record.winner,
            "Hand pair winner is {}, not {}",
            pair.winner,
            record.winner
        );

        Ok(pair)
    }
}

/// Generator config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Random deals to try for hands of different categories, after that
    /// hands of the same category are accepted if they are not a tie.
    pub max_random_attempts: usize,
    /// The probability that a hard mode pair comes from the scenarios library.
    pub scenario_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_random_attempts: 1_000,
            scenario_probability: 0.5,
        }
    }
}

impl Config {
    /// Checks the config values.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.max_random_attempts > 0,
            "max_random_attempts must be greater than zero"
        );
        ensure!(
            (0.0..=1.0).contains(&self.scenario_probability),
            "scenario_probability must be between 0 and 1, got {}",
            self.scenario_probability
        );

        Ok(())
    }
}

/// Generates hand pairs for a game round.
///
/// All the randomness comes from the generator random source, a generator
/// created [with a seeded rng](PairGenerator::with_rng) deals the same pairs
/// sequence every time.
#[derive(Debug)]
pub struct PairGenerator<R = StdRng> {
    rng: R,
    config: Config,
}

impl PairGenerator<StdRng> {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with a seeded random source.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for PairGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PairGenerator<R> {
    /// Creates a generator with user initialized randomness.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: Config::default(),
        }
    }

    /// Sets the generator config.
    pub fn with_config(mut self, config: Config) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The generator config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generates a hand pair for the given mode, the pair is never a tie.
    ///
    /// Standard mode pairs are random hands of different categories, hard mode
    /// pairs come from the scenarios library or are random hands.
    pub fn generate(&mut self, mode: Mode) -> HandPair {
        match mode {
            Mode::Standard => self.random(),
            Mode::Hard => {
                if !self.rng.random_bool(self.config.scenario_probability) {
                    return self.random();
                }

                self.library_pair(&SCENARIOS)
            }
        }
    }

    /// Generates a pair of random hands with different categories.
    pub fn random(&mut self) -> HandPair {
        random_pair(&mut self.rng, self.config.max_random_attempts)
    }

    /// Generates a pair from the scenario at the given index.
    pub fn scenario(&mut self, idx: usize) -> Result<HandPair> {
        let Some(scenario) = SCENARIOS.get(idx) else {
            bail!(
                "Invalid scenario {idx}, there are {} scenarios",
                SCENARIOS.len()
            );
        };

        self.deal_scenario(idx, scenario)
    }

    /// Deals a random scenario, falls back to random hands if the scenario is
    /// a tie.
    fn library_pair(&mut self, scenarios: &[Scenario]) -> HandPair {
        let idx = self.rng.random_range(0..scenarios.len());
        match self.deal_scenario(idx, &scenarios[idx]) {
            Ok(pair) => pair,
            Err(e) => {
                error!("{e}");
                self.random()
            }
        }
    }

    fn deal_scenario(&mut self, idx: usize, scenario: &Scenario) -> Result<HandPair> {
        debug!("Dealing scenario {idx}: {}", scenario.lesson());

        let (cards_a, cards_b) = scenario.deal(&mut self.rng);
        let hand_a = evaluate(cards_a);
        let hand_b = evaluate(cards_b);

        HandPair::new(hand_a, hand_b, Source::Scenario(idx))
            .ok_or_else(|| anyhow!("Scenario {idx} '{}' is a tie", scenario.lesson()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokermojo_eval::HandRank;

    fn assert_valid(pair: &HandPair) {
        let winner = pair.hand(pair.winner());
        let loser = pair.hand(pair.winner().other());
        assert_eq!(compare(winner, loser), Comparison::FirstWins);
    }

    #[test]
    fn standard_mode() {
        let mut generator = PairGenerator::seeded(21);

        for _ in 0..1_000 {
            let pair = generator.generate(Mode::Standard);
            assert_valid(&pair);
            assert_eq!(pair.source(), Source::Random);
            assert_ne!(pair.hand_a().rank(), pair.hand_b().rank());
        }
    }

    #[test]
    fn hard_mode() {
        let mut generator = PairGenerator::seeded(22);

        let mut scenarios = 0;
        let mut winners = [0; 2];
        for _ in 0..1_000 {
            let pair = generator.generate(Mode::Hard);
            assert_valid(&pair);

            match pair.source() {
                Source::Scenario(idx) => {
                    assert!(idx < SCENARIOS.len());
                    scenarios += 1;
                }
                Source::Random => {
                    assert_ne!(pair.hand_a().rank(), pair.hand_b().rank());
                }
            }

            match pair.winner() {
                Side::A => winners[0] += 1,
                Side::B => winners[1] += 1,
            }
        }

        // About half the pairs come from the scenarios.
        assert!((350..=650).contains(&scenarios), "scenarios={scenarios}");
        assert!(winners[0] > 350 && winners[1] > 350, "winners={winners:?}");
    }

    #[test]
    fn scenario_probability() {
        let config = Config {
            scenario_probability: 1.0,
            ..Config::default()
        };
        let mut generator = PairGenerator::seeded(23).with_config(config).unwrap();
        for _ in 0..100 {
            let pair = generator.generate(Mode::Hard);
            assert!(matches!(pair.source(), Source::Scenario(_)));
        }

        let config = Config {
            scenario_probability: 0.0,
            ..Config::default()
        };
        let mut generator = PairGenerator::seeded(23).with_config(config).unwrap();
        for _ in 0..100 {
            let pair = generator.generate(Mode::Hard);
            assert_eq!(pair.source(), Source::Random);
        }
    }

    #[test]
    fn invalid_config() {
        let config = Config {
            scenario_probability: 1.5,
            ..Config::default()
        };
        assert!(PairGenerator::seeded(1).with_config(config).is_err());

        let config = Config {
            max_random_attempts: 0,
            ..Config::default()
        };
        assert!(PairGenerator::seeded(1).with_config(config).is_err());
    }

    #[test]
    fn all_scenarios() {
        let mut generator = PairGenerator::seeded(24);

        for idx in 0..SCENARIOS.len() {
            for _ in 0..50 {
                let pair = generator.scenario(idx).unwrap();
                assert_valid(&pair);
                assert_eq!(pair.source(), Source::Scenario(idx));
            }
        }

        assert!(generator.scenario(SCENARIOS.len()).is_err());
    }

    #[test]
    fn wheel_scenario() {
        let mut generator = PairGenerator::seeded(25);

        // Six high straight vs the wheel.
        for _ in 0..50 {
            let pair = generator.scenario(5).unwrap();
            let winner = pair.hand(pair.winner());
            let loser = pair.hand(pair.winner().other());
            assert_eq!(winner.rank(), HandRank::Straight);
            assert_eq!(winner.tiebreak().as_slice(), &[6]);
            assert_eq!(loser.rank(), HandRank::Straight);
            assert_eq!(loser.tiebreak().as_slice(), &[5]);
        }
    }

    #[test]
    fn same_seed_same_pairs() {
        let mut g1 = PairGenerator::seeded(26);
        let mut g2 = PairGenerator::seeded(26);

        for mode in [Mode::Standard, Mode::Hard].into_iter().cycle().take(100) {
            assert_eq!(g1.generate(mode), g2.generate(mode));
        }
    }

    #[test]
    fn replay_pair() {
        let pair = PairGenerator::seeded(27).generate(Mode::Hard);
        let json = serde_json::to_string(&pair).unwrap();
        assert!(json.contains("\"winner\""));

        let replay = serde_json::from_str::<HandPair>(&json).unwrap();
        assert_eq!(replay, pair);
        assert_eq!(replay.winner(), pair.winner());
    }

    #[test]
    fn replay_rejects_forged_pairs() {
        let pair = PairGenerator::seeded(28).generate(Mode::Standard);
        let value = serde_json::to_value(&pair).unwrap();

        let mut wrong_winner = value.clone();
        wrong_winner["winner"] = pair.winner().other().to_string().into();
        assert!(serde_json::from_value::<HandPair>(wrong_winner).is_err());

        let mut tied = value.clone();
        tied["hand_b"] = tied["hand_a"].clone();
        assert!(serde_json::from_value::<HandPair>(tied).is_err());

        let mut wrong_rank = value;
        wrong_rank["hand_a"]["rank"] = "RoyalFlush".into();
        wrong_rank["hand_a"]["tiebreak"] = serde_json::json!([14]);
        assert!(serde_json::from_value::<HandPair>(wrong_rank).is_err());
    }

    #[test]
    fn tied_scenario_falls_back_to_random() {
        use pokermojo_eval::{Card, Rank::*, Suit::*};

        let c = Card::new;
        let tied = Scenario::new(
            "Same high cards",
            [c(Ace, Spades), c(King, Hearts), c(Queen, Diamonds), c(Jack, Clubs), c(Nine, Spades)],
            [c(Ace, Hearts), c(King, Spades), c(Queen, Clubs), c(Jack, Diamonds), c(Nine, Hearts)],
        );

        let mut generator = PairGenerator::seeded(29);
        assert!(generator.deal_scenario(0, &tied).is_err());

        for _ in 0..20 {
            let pair = generator.library_pair(&[tied]);
            assert_valid(&pair);
            assert_eq!(pair.source(), Source::Random);
        }
    }

    #[test]
    fn parse_mode() {
        assert_eq!("standard".parse::<Mode>().unwrap(), Mode::Standard);
        assert_eq!("HARD".parse::<Mode>().unwrap(), Mode::Hard);
        assert!("easy".parse::<Mode>().is_err());
        assert_eq!(Mode::Hard.to_string(), "hard");
    }
}
