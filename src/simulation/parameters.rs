//! Simulation parameters and configuration.
//!
//! This module provides the seed genotype used at initialization and the
//! run-level settings (population size, attempt count, reporting cadence,
//! RNG seed).

use crate::genome::{Locus, Organism};
use serde::{Deserialize, Serialize};

/// The genotype every organism starts from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InitialGenotype {
    /// Initial preference locus position
    pub pref_pos: f64,
    /// Initial preference trait value
    pub pref_value: f64,
    /// Initial signal locus position
    pub signal_pos: f64,
    /// Initial signal trait value
    pub signal_value: f64,
}

impl InitialGenotype {
    /// Create a new initial genotype.
    ///
    /// # Errors
    /// Returns an error if a position lies outside [0,1) or a value is not
    /// finite.
    pub fn new(
        pref_pos: f64,
        pref_value: f64,
        signal_pos: f64,
        signal_value: f64,
    ) -> Result<Self, ConfigError> {
        for (name, pos) in [("pref_pos", pref_pos), ("signal_pos", signal_pos)] {
            if !(0.0..1.0).contains(&pos) {
                return Err(ConfigError::PositionOutOfRange(name, pos));
            }
        }
        for (name, value) in [("pref_value", pref_value), ("signal_value", signal_value)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteValue(name, value));
            }
        }

        Ok(Self {
            pref_pos,
            pref_value,
            signal_pos,
            signal_value,
        })
    }

    /// Build the generation-0 founder organism.
    pub fn founder(&self) -> Organism {
        Organism::new(
            Locus::new(self.pref_pos, self.pref_value),
            Locus::new(self.signal_pos, self.signal_value),
            0,
        )
    }
}

/// High-level simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of organisms in the population
    pub population_size: usize,
    /// Total number of update attempts to perform
    pub total_updates: u64,
    /// Report population means every this many attempts
    pub report_every: u64,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl SimulationConfig {
    /// Create a new simulation configuration.
    pub fn new(
        population_size: usize,
        total_updates: u64,
        report_every: u64,
        seed: Option<u64>,
    ) -> Self {
        Self {
            population_size,
            total_updates,
            report_every,
            seed,
        }
    }
}

/// Errors that can occur when assembling a simulation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A genome position must lie in [0,1)
    PositionOutOfRange(&'static str, f64),
    /// A trait value must be finite
    NonFiniteValue(&'static str, f64),
    /// The population must hold at least one organism
    EmptyPopulation,
    /// The reporting interval must be positive
    ZeroReportInterval,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::PositionOutOfRange(name, pos) => {
                write!(f, "Invalid position for {name}: {pos} (must be in [0,1))")
            }
            ConfigError::NonFiniteValue(name, value) => {
                write!(f, "Invalid value for {name}: {value} (must be finite)")
            }
            ConfigError::EmptyPopulation => {
                write!(f, "Population size must be at least 1")
            }
            ConfigError::ZeroReportInterval => {
                write!(f, "Reporting interval must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
