//! Simulation engine and population management.
//!
//! This module provides the fixed-size population container, the parameter
//! structures for configuring a run, and the update-step engine that drives
//! Moran-style replacement.

pub mod engine;
pub mod parameters;
pub mod population;

pub use engine::{Simulation, UpdateOutcome};
pub use parameters::{ConfigError, InitialGenotype, SimulationConfig};
pub use population::Population;
