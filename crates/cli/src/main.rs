// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! PokerMojo CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, Write};

use pokermojo_core::{Card, Config, Mode, PairGenerator, compare, try_evaluate};

mod print;

#[derive(Debug, Parser)]
#[clap(about = "Which 5-card hand wins?")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Deal hand pairs.
    Deal {
        /// The game mode, standard or hard.
        #[clap(long, short, default_value_t = Mode::Standard)]
        mode: Mode,
        /// Number of pairs to deal.
        #[clap(long, short = 'n', default_value_t = 1)]
        count: usize,
        /// Seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
        /// Probability of a scenario pair in hard mode.
        #[clap(long)]
        scenario_probability: Option<f64>,
        /// Random deals before accepting hands of the same category.
        #[clap(long)]
        max_attempts: Option<usize>,
        /// Print pairs as JSON lines.
        #[clap(long)]
        json: bool,
    },
    /// Evaluate a 5-card hand, for example `eval AS KS QS JS TS`.
    Eval {
        /// The hand cards.
        #[clap(num_args = 5, required = true)]
        cards: Vec<Card>,
    },
    /// Compare two 5-card hands.
    Compare {
        /// The first hand.
        #[clap(long, num_args = 5, required = true)]
        first: Vec<Card>,
        /// The second hand.
        #[clap(long, num_args = 5, required = true)]
        second: Vec<Card>,
    },
    /// List the scenarios library.
    Scenarios {
        /// Print scenarios as JSON lines.
        #[clap(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli.command, &mut out)?;
    out.flush()?;

    Ok(())
}

fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Deal {
            mode,
            count,
            seed,
            scenario_probability,
            max_attempts,
            json,
        } => {
            let defaults = Config::default();
            let config = Config {
                max_random_attempts: max_attempts.unwrap_or(defaults.max_random_attempts),
                scenario_probability: scenario_probability
                    .unwrap_or(defaults.scenario_probability),
            };

            let generator = match seed {
                Some(seed) => {
                    info!("Dealing {count} {mode} pairs with seed {seed}");
                    PairGenerator::seeded(seed)
                }
                None => {
                    info!("Dealing {count} {mode} pairs");
                    PairGenerator::new()
                }
            };

            let mut generator = generator.with_config(config)?;
            for round in 1..=count {
                let pair = generator.generate(mode);
                if json {
                    print::print_pair_json(out, &pair)?;
                } else {
                    print::print_pair(out, round, &pair)?;
                }
            }
        }
        Command::Eval { cards } => {
            let hand = try_evaluate(&cards)?;
            print::print_hand(out, "Hand", &hand)?;
        }
        Command::Compare { first, second } => {
            let first = try_evaluate(&first)?;
            let second = try_evaluate(&second)?;
            print::print_comparison(out, &first, &second, compare(&first, &second))?;
        }
        Command::Scenarios { json } => print::print_scenarios(out, json)?,
    }

    Ok(())
}
