//! Aggregate population statistics for periodic reporting.
//!
//! The summary is a thin consumer of population state: five arithmetic means
//! over the current organisms, formatted as one space-separated line under a
//! fixed header.

use crate::simulation::Population;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic means of the five organism fields across a population.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    /// Mean ancestry depth
    pub mean_generation: f64,
    /// Mean preference locus position
    pub mean_pref_pos: f64,
    /// Mean preference trait value
    pub mean_pref_value: f64,
    /// Mean signal locus position
    pub mean_signal_pos: f64,
    /// Mean signal trait value
    pub mean_signal_value: f64,
}

impl PopulationSummary {
    /// Column header matching the `Display` output.
    pub const HEADER: &'static str =
        "MeanGeneration MeanPrefPos MeanPrefValue MeanSignalPos MeanSignalValue";

    /// Compute the five means over all current population members.
    ///
    /// An empty population yields all-zero means rather than dividing by
    /// zero.
    pub fn compute(population: &Population) -> Self {
        let n = population.size();
        if n == 0 {
            return Self {
                mean_generation: 0.0,
                mean_pref_pos: 0.0,
                mean_pref_value: 0.0,
                mean_signal_pos: 0.0,
                mean_signal_value: 0.0,
            };
        }

        let mut generation_sum = 0.0;
        let mut pref_pos_sum = 0.0;
        let mut pref_value_sum = 0.0;
        let mut signal_pos_sum = 0.0;
        let mut signal_value_sum = 0.0;

        for organism in population.organisms() {
            generation_sum += f64::from(organism.generation);
            pref_pos_sum += organism.pref.pos;
            pref_value_sum += organism.pref.value;
            signal_pos_sum += organism.signal.pos;
            signal_value_sum += organism.signal.value;
        }

        let n = n as f64;
        Self {
            mean_generation: generation_sum / n,
            mean_pref_pos: pref_pos_sum / n,
            mean_pref_value: pref_value_sum / n,
            mean_signal_pos: signal_pos_sum / n,
            mean_signal_value: signal_value_sum / n,
        }
    }
}

impl fmt::Display for PopulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.mean_generation,
            self.mean_pref_pos,
            self.mean_pref_value,
            self.mean_signal_pos,
            self.mean_signal_value
        )
    }
}
