//! Sigevo: an individual-based simulator for the coevolution of a sexual
//! signal trait and a mate-choice preference trait.
//!
//! The library models a fixed-size population of organisms, each carrying two
//! linked loci (preference and signal) on a circular genome coordinate. One
//! update step samples two parents and a replacement slot, tests mutual mate
//! acceptance, derives an offspring genotype via crossover-interval
//! recombination, mutates its trait fields, and overwrites the slot
//! (Moran-style overlapping generations).

pub mod analysis;
pub mod defaults;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

// Re-export commonly used types for convenient external access.
pub use genome::{Locus, Organism};
