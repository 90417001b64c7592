//! Population management and operations.
//!
//! A population is a fixed-length, ordered collection of organisms. Slots
//! are only ever overwritten; organisms are never added or removed after
//! initialization, so the size observed at creation holds for the lifetime
//! of a run.

use crate::genome::Organism;

/// A fixed-size population of organisms, indexed 0..N-1.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    /// The organisms in this population
    organisms: Vec<Organism>,
}

impl Population {
    /// Create a population from an explicit list of organisms.
    pub fn new(organisms: Vec<Organism>) -> Self {
        Self { organisms }
    }

    /// Create a population of `size` identical copies of a founder organism.
    ///
    /// No randomness is involved; every slot starts from the same genotype.
    pub fn uniform(size: usize, founder: Organism) -> Self {
        Self {
            organisms: vec![founder; size],
        }
    }

    /// Get the number of organisms in the population.
    #[inline]
    pub fn size(&self) -> usize {
        self.organisms.len()
    }

    /// Check if the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.organisms.is_empty()
    }

    /// Get all organisms as a slice.
    pub fn organisms(&self) -> &[Organism] {
        &self.organisms
    }

    /// Get a specific organism by index.
    pub fn get(&self, index: usize) -> Option<&Organism> {
        self.organisms.get(index)
    }

    /// Get a mutable reference to a specific organism.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Organism> {
        self.organisms.get_mut(index)
    }

    /// Overwrite one slot with a new organism (the Moran birth/death event).
    ///
    /// Returns the previous occupant, or `None` when the index is out of
    /// range (in which case nothing changes).
    pub fn replace(&mut self, index: usize, organism: Organism) -> Option<Organism> {
        let slot = self.organisms.get_mut(index)?;
        let previous = *slot;
        *slot = organism;
        Some(previous)
    }
}
