//! Recombination on the circular genome coordinate.
//!
//! An offspring genotype is derived from two parents by sampling a crossover
//! interval on the circular [0,1) coordinate and deciding, per locus, which
//! parent's copy transmits. A locus that neither parent transmits is left
//! unassigned on the [`Recombinant`]; such an offspring never enters the
//! population.

use crate::genome::{Locus, Organism};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A crossover interval `[start, end)` on the circular [0,1) coordinate.
///
/// The interval may wrap past zero, in which case `start >= end` and the
/// covered region is `(start, 1) ∪ [0, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossoverInterval {
    start: f64,
    end: f64,
}

impl CrossoverInterval {
    /// Create an interval from explicit endpoints in [0,1].
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Sample an interval: `start` uniform in [0,1), a uniform size in [0,1),
    /// and `end = start + size` wrapped by subtracting 1 when it exceeds 1.
    ///
    /// Consumes exactly two uniform draws.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let start = rng.random::<f64>();
        let size = rng.random::<f64>();

        let mut end = start + size;
        if end > 1.0 {
            end -= 1.0;
        }

        Self { start, end }
    }

    /// Get the interval start.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Get the interval end.
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Open-interval containment test for a position on the circular
    /// coordinate.
    ///
    /// For `start < end` the test is `start < pos < end`. For the wrap case
    /// (`start >= end`, including the degenerate `start == end`) it is
    /// `pos > start || pos < end`; at the degenerate boundary this accepts
    /// every position except `pos == start`.
    #[inline]
    pub fn contains(&self, pos: f64) -> bool {
        if self.start < self.end {
            pos > self.start && pos < self.end
        } else {
            pos > self.start || pos < self.end
        }
    }
}

/// An offspring genotype under construction.
///
/// Each locus is `None` until a transmission rule assigns it. A locus still
/// `None` after recombination failed to transmit from either parent; the
/// caller must discard such a recombinant rather than install it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recombinant {
    /// Preference locus, if transmitted
    pub pref: Option<Locus>,
    /// Signal locus, if transmitted
    pub signal: Option<Locus>,
}

impl Recombinant {
    /// Whether both loci were transmitted.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.pref.is_some() && self.signal.is_some()
    }

    /// Convert into a live organism at the given generation.
    ///
    /// Returns `None` when either locus was lost, so an unresolved locus can
    /// never leak into a population.
    pub fn into_organism(self, generation: u32) -> Option<Organism> {
        match (self.pref, self.signal) {
            (Some(pref), Some(signal)) => Some(Organism::new(pref, signal, generation)),
            _ => None,
        }
    }
}

/// Recombine two parent genotypes over a freshly sampled crossover interval.
///
/// Consumes exactly two uniform draws (the interval sample).
pub fn recombine<R: Rng + ?Sized>(
    parent1: &Organism,
    parent2: &Organism,
    rng: &mut R,
) -> Recombinant {
    let interval = CrossoverInterval::sample(rng);
    recombine_with(parent1, parent2, &interval)
}

/// Recombine two parent genotypes over an explicit crossover interval.
///
/// Per locus: parent1's copy transmits if parent1's position lies inside the
/// interval; parent2's copy then transmits (overwriting) if parent2's
/// position lies outside. Parent2's rule runs last and wins ties. When
/// parent1 is outside and parent2 is inside, neither rule fires and the
/// locus is lost for this draw.
pub fn recombine_with(
    parent1: &Organism,
    parent2: &Organism,
    interval: &CrossoverInterval,
) -> Recombinant {
    let mut pref = None;
    let mut signal = None;

    if interval.contains(parent1.pref.pos) {
        pref = Some(parent1.pref);
    }
    if interval.contains(parent1.signal.pos) {
        signal = Some(parent1.signal);
    }

    if !interval.contains(parent2.pref.pos) {
        pref = Some(parent2.pref);
    }
    if !interval.contains(parent2.signal.pos) {
        signal = Some(parent2.signal);
    }

    Recombinant { pref, signal }
}
