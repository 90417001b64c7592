//! Sigevo CLI - runs a signal/preference coevolution simulation and streams
//! periodic population means to standard output.

use anyhow::Result;
use clap::Parser;
use sigevo::analysis::PopulationSummary;
use sigevo::defaults;
use sigevo::evolution::{MatingParams, MutationParams};
use sigevo::simulation::{InitialGenotype, Simulation, SimulationConfig};
use std::io::{self, Write};

/// Sigevo - signal/preference coevolution simulator
#[derive(Parser, Debug)]
#[command(name = "sigevo")]
#[command(author, version, about = "Signal/preference coevolution simulator", long_about = None)]
struct Cli {
    /// Random seed for the simulation run
    seed: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let initial = InitialGenotype::new(
        defaults::INIT_PREF_POS,
        defaults::INIT_PREF_VALUE,
        defaults::INIT_SIGNAL_POS,
        defaults::INIT_SIGNAL_VALUE,
    )?;
    let mating = MatingParams::new(defaults::LOVE_SLOPE)?;
    let mutation = MutationParams::new(
        defaults::POS_MUT_EFFECT,
        defaults::VALUE_MUT_EFFECT,
        defaults::PREF_POS_MUT_PROB,
        defaults::PREF_VALUE_MUT_PROB,
        defaults::SIGNAL_POS_MUT_PROB,
        defaults::SIGNAL_VALUE_MUT_PROB,
    )?;
    let config = SimulationConfig::new(
        defaults::POPULATION_SIZE,
        defaults::UPDATES,
        defaults::REPORT_EVERY,
        Some(cli.seed),
    );

    let report_every = config.report_every;
    let total_updates = config.total_updates;
    let mut sim = Simulation::new(initial, mating, mutation, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", PopulationSummary::HEADER)?;

    for attempt in 0..total_updates {
        sim.step();

        if attempt % report_every == 0 {
            writeln!(out, "{}", PopulationSummary::compute(sim.population()))?;
        }
    }

    Ok(())
}
