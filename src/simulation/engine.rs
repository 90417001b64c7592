//! Simulation engine for the replication cycle.
//!
//! This module provides the update step that drives the population: sample
//! two parents and a replacement slot, test mutual mate acceptance, derive a
//! recombinant offspring, mutate its trait fields, and overwrite the slot.
//! One call is one replication attempt; failed attempts leave the population
//! untouched.

use crate::evolution::{recombine, MatingParams, MutationParams};
use crate::simulation::{ConfigError, InitialGenotype, Population, SimulationConfig};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Result of a single update attempt.
///
/// Discards are normal control flow, not errors; the overall loop simply
/// proceeds to its next independent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The offspring was written into the given slot
    Replaced { slot: usize },
    /// The sampled pair did not accept each other
    MateRejected,
    /// The crossover draw failed to transmit a locus from either parent
    LocusLoss,
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Current population
    population: Population,
    /// Mate-choice parameters
    mating: MatingParams,
    /// Mutation parameters
    mutation: MutationParams,
    /// Simulation configuration
    config: SimulationConfig,
    /// Random number generator
    rng: Xoshiro256PlusPlus,
    /// Update attempts performed so far
    attempts: u64,
}

impl Simulation {
    /// Create a new simulation with a uniform initial population.
    ///
    /// # Errors
    /// Returns an error if the configured population is empty or the
    /// reporting interval is zero.
    pub fn new(
        initial: InitialGenotype,
        mating: MatingParams,
        mutation: MutationParams,
        config: SimulationConfig,
    ) -> Result<Self, ConfigError> {
        if config.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if config.report_every == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }

        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let population = Population::uniform(config.population_size, initial.founder());

        Ok(Self {
            population,
            mating,
            mutation,
            config,
            rng,
            attempts: 0,
        })
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the simulation configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Get the number of update attempts performed so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Perform one replication attempt.
    ///
    /// Samples three uniform indices (two parents and a replacement slot;
    /// distinctness is not required), snapshots the parents before any
    /// write, and replaces the slot only when mate selection succeeds and
    /// both loci transmit. The written offspring carries
    /// `parent1.generation + 1` and has each trait field mutated under its
    /// own independent probability.
    pub fn step(&mut self) -> UpdateOutcome {
        let n = self.population.size();
        let parent1_idx = self.rng.random_range(0..n);
        let parent2_idx = self.rng.random_range(0..n);
        let child_idx = self.rng.random_range(0..n);

        self.attempts += 1;

        // Snapshots taken before the write, so parents keep their pre-update
        // state even when child_idx aliases a parent slot.
        let parent1 = self.population.organisms()[parent1_idx];
        let parent2 = self.population.organisms()[parent2_idx];

        if !self
            .mating
            .mating_succeeds(&parent1, &parent2, &mut self.rng)
        {
            return UpdateOutcome::MateRejected;
        }

        let recombinant = recombine(&parent1, &parent2, &mut self.rng);
        let Some(mut child) = recombinant.into_organism(parent1.generation + 1) else {
            return UpdateOutcome::LocusLoss;
        };

        self.mutation.apply(&mut child, &mut self.rng);
        self.population.replace(child_idx, child);

        UpdateOutcome::Replaced { slot: child_idx }
    }

    /// Run the configured number of update attempts.
    pub fn run(&mut self) {
        for _ in 0..self.config.total_updates {
            self.step();
        }
    }

    /// Run a specific number of update attempts.
    pub fn run_for(&mut self, attempts: u64) {
        for _ in 0..attempts {
            self.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn test_simulation(population_size: usize, seed: u64) -> Simulation {
        let initial = InitialGenotype::new(
            defaults::INIT_PREF_POS,
            defaults::INIT_PREF_VALUE,
            defaults::INIT_SIGNAL_POS,
            defaults::INIT_SIGNAL_VALUE,
        )
        .unwrap();
        let mating = MatingParams::new(defaults::LOVE_SLOPE).unwrap();
        let mutation =
            MutationParams::always(defaults::POS_MUT_EFFECT, defaults::VALUE_MUT_EFFECT).unwrap();
        let config = SimulationConfig::new(population_size, 1000, 100, Some(seed));

        Simulation::new(initial, mating, mutation, config).unwrap()
    }

    #[test]
    fn test_simulation_new() {
        let sim = test_simulation(10, 42);
        assert_eq!(sim.population().size(), 10);
        assert_eq!(sim.attempts(), 0);
    }

    #[test]
    fn test_simulation_rejects_empty_population() {
        let initial = InitialGenotype::new(0.5, 0.5, 0.5, 0.5).unwrap();
        let mating = MatingParams::new(-8.0).unwrap();
        let mutation = MutationParams::always(0.01, 0.1).unwrap();
        let config = SimulationConfig::new(0, 1000, 100, Some(42));

        let result = Simulation::new(initial, mating, mutation, config);
        assert!(matches!(result, Err(ConfigError::EmptyPopulation)));
    }

    #[test]
    fn test_simulation_rejects_zero_report_interval() {
        let initial = InitialGenotype::new(0.5, 0.5, 0.5, 0.5).unwrap();
        let mating = MatingParams::new(-8.0).unwrap();
        let mutation = MutationParams::always(0.01, 0.1).unwrap();
        let config = SimulationConfig::new(10, 1000, 0, Some(42));

        let result = Simulation::new(initial, mating, mutation, config);
        assert!(matches!(result, Err(ConfigError::ZeroReportInterval)));
    }

    #[test]
    fn test_step_counts_attempts() {
        let mut sim = test_simulation(10, 42);
        for expected in 1..=50 {
            sim.step();
            assert_eq!(sim.attempts(), expected);
        }
    }

    #[test]
    fn test_step_preserves_population_size() {
        let mut sim = test_simulation(7, 42);
        for _ in 0..500 {
            sim.step();
            assert_eq!(sim.population().size(), 7);
        }
    }

    #[test]
    fn test_step_single_organism_population() {
        // N = 1: self-pairing and self-overwrite on every attempt. The two
        // parent snapshots are identical, so locus loss can never occur.
        let mut sim = test_simulation(1, 42);
        for _ in 0..200 {
            let outcome = sim.step();
            assert_ne!(outcome, UpdateOutcome::LocusLoss);
            assert_eq!(sim.population().size(), 1);
        }
        // The founder has matching preference and signal values, so the
        // first attempt is a certain replacement; generation only grows.
        assert!(sim.population().organisms()[0].generation > 0);
    }

    #[test]
    fn test_identical_founders_first_attempt_replaces() {
        // Identical founders give mutual acceptance exactly 1 and identical
        // parents cannot lose a locus, so the first attempt always replaces.
        let mut sim = test_simulation(10, 42);
        let outcome = sim.step();
        assert!(matches!(outcome, UpdateOutcome::Replaced { .. }));
    }

    #[test]
    fn test_written_positions_stay_in_unit_range() {
        let mut sim = test_simulation(10, 42);
        sim.run_for(2000);
        for organism in sim.population().organisms() {
            assert!((0.0..1.0).contains(&organism.pref.pos));
            assert!((0.0..1.0).contains(&organism.signal.pos));
        }
    }

    #[test]
    fn test_generation_advances_under_replacement() {
        let mut sim = test_simulation(10, 42);
        sim.run_for(2000);
        let max_generation = sim
            .population()
            .organisms()
            .iter()
            .map(|o| o.generation)
            .max()
            .unwrap_or(0);
        assert!(max_generation > 0);
    }

    #[test]
    fn test_discard_purity_on_mate_rejection() {
        // Founders whose cross-differences are 0.2 can never accept each
        // other under slope -8, so every attempt must leave the population
        // bit-for-bit unchanged.
        let initial = InitialGenotype::new(0.5, 0.0, 0.5, 0.2).unwrap();
        let mating = MatingParams::new(-8.0).unwrap();
        let mutation = MutationParams::always(0.01, 0.1).unwrap();
        let config = SimulationConfig::new(10, 1000, 100, Some(42));
        let mut sim = Simulation::new(initial, mating, mutation, config).unwrap();

        let before = sim.population().clone();
        for _ in 0..1000 {
            let outcome = sim.step();
            assert_eq!(outcome, UpdateOutcome::MateRejected);
        }
        assert_eq!(*sim.population(), before);
    }

    #[test]
    fn test_run_performs_configured_attempts() {
        let mut sim = test_simulation(10, 42);
        sim.run();
        assert_eq!(sim.attempts(), 1000);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut sim1 = test_simulation(10, 7);
        let mut sim2 = test_simulation(10, 7);
        sim1.run_for(500);
        sim2.run_for(500);
        assert_eq!(sim1.population(), sim2.population());
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut sim1 = test_simulation(10, 7);
        let mut sim2 = test_simulation(10, 8);
        sim1.run_for(500);
        sim2.run_for(500);
        assert_ne!(sim1.population(), sim2.population());
    }
}
