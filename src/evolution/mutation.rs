//! Mutation operators for positional and value traits.
//!
//! Position fields live on the circular [0,1) coordinate and wrap when a
//! perturbation pushes them over an edge; value fields are unbounded reals
//! and drift freely. Each of an organism's four trait fields carries its own
//! independent mutation probability.

use crate::genome::Organism;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Parameters controlling per-field mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationParams {
    /// Magnitude of positional perturbations
    pos_effect: f64,
    /// Magnitude of value perturbations
    value_effect: f64,
    /// Probability of mutating the preference position
    pref_pos_prob: f64,
    /// Probability of mutating the preference value
    pref_value_prob: f64,
    /// Probability of mutating the signal position
    signal_pos_prob: f64,
    /// Probability of mutating the signal value
    signal_value_prob: f64,
}

impl MutationParams {
    /// Create new mutation parameters.
    ///
    /// # Arguments
    /// * `pos_effect` - Positional perturbation magnitude. Must lie in
    ///   [0, 2) so a perturbed position is off by less than 1 and a single
    ///   wrap restores it to [0,1).
    /// * `value_effect` - Value perturbation magnitude, finite and >= 0.
    /// * `*_prob` - Per-field mutation probabilities, finite and >= 0. Each
    ///   is compared against a fresh uniform draw in [0,1), so any value
    ///   >= 1 mutates the field on every application.
    ///
    /// # Errors
    /// Returns an error if an effect magnitude or probability is out of range.
    pub fn new(
        pos_effect: f64,
        value_effect: f64,
        pref_pos_prob: f64,
        pref_value_prob: f64,
        signal_pos_prob: f64,
        signal_value_prob: f64,
    ) -> Result<Self, MutationError> {
        if !(0.0..2.0).contains(&pos_effect) {
            return Err(MutationError::InvalidEffect("pos_effect", pos_effect));
        }
        if !value_effect.is_finite() || value_effect < 0.0 {
            return Err(MutationError::InvalidEffect("value_effect", value_effect));
        }
        for (name, prob) in [
            ("pref_pos_prob", pref_pos_prob),
            ("pref_value_prob", pref_value_prob),
            ("signal_pos_prob", signal_pos_prob),
            ("signal_value_prob", signal_value_prob),
        ] {
            if !prob.is_finite() || prob < 0.0 {
                return Err(MutationError::InvalidProbability(name, prob));
            }
        }

        Ok(Self {
            pos_effect,
            value_effect,
            pref_pos_prob,
            pref_value_prob,
            signal_pos_prob,
            signal_value_prob,
        })
    }

    /// Create parameters that mutate every field on every application.
    pub fn always(pos_effect: f64, value_effect: f64) -> Result<Self, MutationError> {
        Self::new(pos_effect, value_effect, 1.0, 1.0, 1.0, 1.0)
    }

    /// Get the positional effect magnitude.
    #[inline]
    pub fn pos_effect(&self) -> f64 {
        self.pos_effect
    }

    /// Get the value effect magnitude.
    #[inline]
    pub fn value_effect(&self) -> f64 {
        self.value_effect
    }

    /// Perturb a position on the circular coordinate.
    ///
    /// Draws `delta = (U - 0.5) * pos_effect` and wraps the result once into
    /// [0,1): add 1 below 0, subtract 1 at or above 1. One wrap suffices
    /// because `|delta| < 1`.
    pub fn mutate_pos<R: Rng + ?Sized>(&self, pos: f64, rng: &mut R) -> f64 {
        let delta = (rng.random::<f64>() - 0.5) * self.pos_effect;
        let moved = pos + delta;

        if moved < 0.0 {
            moved + 1.0
        } else if moved >= 1.0 {
            moved - 1.0
        } else {
            moved
        }
    }

    /// Perturb an unbounded value trait.
    pub fn mutate_value<R: Rng + ?Sized>(&self, value: f64, rng: &mut R) -> f64 {
        value + (rng.random::<f64>() - 0.5) * self.value_effect
    }

    /// Apply per-field mutation to an organism in place.
    ///
    /// Each field is gated by its own probability draw, independently of the
    /// others, in a fixed order: preference position, preference value,
    /// signal position, signal value.
    pub fn apply<R: Rng + ?Sized>(&self, organism: &mut Organism, rng: &mut R) {
        if rng.random::<f64>() < self.pref_pos_prob {
            organism.pref.pos = self.mutate_pos(organism.pref.pos, rng);
        }
        if rng.random::<f64>() < self.pref_value_prob {
            organism.pref.value = self.mutate_value(organism.pref.value, rng);
        }
        if rng.random::<f64>() < self.signal_pos_prob {
            organism.signal.pos = self.mutate_pos(organism.signal.pos, rng);
        }
        if rng.random::<f64>() < self.signal_value_prob {
            organism.signal.value = self.mutate_value(organism.signal.value, rng);
        }
    }
}

/// Errors that can occur when constructing mutation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MutationError {
    /// Effect magnitude out of range
    InvalidEffect(&'static str, f64),
    /// Probability is negative or not finite
    InvalidProbability(&'static str, f64),
}

impl std::fmt::Display for MutationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationError::InvalidEffect(name, value) => {
                write!(f, "Invalid mutation effect for {name}: {value}")
            }
            MutationError::InvalidProbability(name, value) => {
                write!(
                    f,
                    "Invalid mutation probability for {name}: {value} (must be finite and >= 0)"
                )
            }
        }
    }
}

impl std::error::Error for MutationError {}
