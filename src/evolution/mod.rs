//! Evolution module providing mate selection, recombination, and mutation.
//!
//! This module implements the core evolutionary processes:
//! - **Mating**: mutual mate-choice acceptance probabilities
//! - **Recombination**: crossover-interval transmission on the circular
//!   genome coordinate
//! - **Mutation**: independent perturbation of positional and value traits

pub mod mating;
pub mod mutation;
pub mod recombination;

pub use mating::{MatingError, MatingParams};
pub use mutation::{MutationError, MutationParams};
pub use recombination::{recombine, recombine_with, CrossoverInterval, Recombinant};
