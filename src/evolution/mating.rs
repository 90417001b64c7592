//! Mate selection based on mutual acceptance probabilities.
//!
//! Each organism accepts a potential partner with a probability that falls
//! off linearly as the partner's signal value moves away from the organism's
//! own preference value. A mating happens only when a single joint draw
//! clears the product of both one-directional acceptance probabilities.

use crate::genome::Organism;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters controlling mate choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatingParams {
    /// Slope of the linear acceptance falloff (negative)
    love_slope: f64,
}

impl MatingParams {
    /// Create new mating parameters.
    ///
    /// # Arguments
    /// * `love_slope` - Slope of the acceptance falloff. Must be finite and
    ///   strictly negative; with slope `s`, acceptance reaches zero once the
    ///   preference/signal difference exceeds `1/|s|`.
    ///
    /// # Errors
    /// Returns an error if the slope is not a finite negative number.
    pub fn new(love_slope: f64) -> Result<Self, MatingError> {
        if !love_slope.is_finite() || love_slope >= 0.0 {
            return Err(MatingError::InvalidSlope(love_slope));
        }
        Ok(Self { love_slope })
    }

    /// Get the acceptance slope.
    #[inline]
    pub fn love_slope(&self) -> f64 {
        self.love_slope
    }

    /// Probability that `chooser` accepts `candidate` as a mate.
    ///
    /// Equals 1.0 when the chooser's preference value exactly matches the
    /// candidate's signal value, decreases linearly with the absolute
    /// difference, and clamps to 0.0 beyond the cutoff.
    pub fn love(&self, chooser: &Organism, candidate: &Organism) -> f64 {
        let abs_diff = (chooser.pref.value - candidate.signal.value).abs();
        (self.love_slope * abs_diff + 1.0).max(0.0)
    }

    /// Joint probability that both partners accept each other.
    ///
    /// Acceptance is asymmetric per direction; the joint event requires both.
    pub fn mutual_acceptance(&self, a: &Organism, b: &Organism) -> f64 {
        self.love(a, b) * self.love(b, a)
    }

    /// Decide whether a mating between `a` and `b` succeeds.
    ///
    /// Consumes exactly one uniform draw in [0,1). Pure function of the two
    /// snapshots and the draw; no side effects on either organism.
    pub fn mating_succeeds<R: Rng + ?Sized>(&self, a: &Organism, b: &Organism, rng: &mut R) -> bool {
        rng.random::<f64>() < self.mutual_acceptance(a, b)
    }
}

/// Errors that can occur when constructing mating parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatingError {
    /// Slope must be a finite negative number
    InvalidSlope(f64),
}

impl std::fmt::Display for MatingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatingError::InvalidSlope(slope) => {
                write!(
                    f,
                    "Invalid acceptance slope: {slope} (must be finite and negative)"
                )
            }
        }
    }
}

impl std::error::Error for MatingError {}
