//! A heritable locus on the circular genome coordinate.

use serde::{Deserialize, Serialize};

/// One heritable locus: a genome position on the circular [0,1) coordinate
/// together with the trait value stored at that position.
///
/// The position determines whether the locus falls inside a crossover
/// interval during recombination; the value is the phenotypic trait carried
/// along with it. Values are unbounded reals, positions always lie in [0,1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Locus {
    /// Genome position in [0,1) on the circular coordinate
    pub pos: f64,
    /// Trait value associated with this locus (unbounded)
    pub value: f64,
}

impl Locus {
    /// Create a new locus from a position and a trait value.
    pub fn new(pos: f64, value: f64) -> Self {
        Self { pos, value }
    }
}
