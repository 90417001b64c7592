//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use sigevo::prelude::*;
//!
//! let initial = InitialGenotype::new(0.5, 0.5, 0.5, 0.5).unwrap();
//! let population = Population::uniform(10, initial.founder());
//! assert_eq!(population.size(), 10);
//! ```

pub use crate::analysis::PopulationSummary;
pub use crate::evolution::{recombine, MatingParams, MutationParams};
pub use crate::genome::{Locus, Organism};
pub use crate::simulation::{
    InitialGenotype, Population, Simulation, SimulationConfig, UpdateOutcome,
};
