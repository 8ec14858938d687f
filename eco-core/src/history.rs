use crate::{
    state::State,
    types::{Population, Species},
};

/// Append-only log of every state the simulation has passed through.
///
/// Three parallel sequences, one per species, with aligned indices: entry
/// `i` of each sequence is the population after `i` ticks, entry 0 being
/// the initial state recorded before any step. A history belongs to one
/// run; starting a new run means constructing a fresh one.
#[derive(Debug, Default)]
pub struct History {
    plants: Vec<Population>,
    herbivores: Vec<Population>,
    carnivores: Vec<Population>,
}

impl History {
    /// Creates an empty history; call [`History::record_initial`] before
    /// the first step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the initial state as entry 0 of every sequence.
    ///
    /// Must be called exactly once per run, before the first step.
    pub fn record_initial(&mut self, state: &State) {
        debug_assert!(self.plants.is_empty(), "initial state recorded twice");
        self.push(state);
    }

    /// Appends the committed post-step state of one tick.
    pub fn record_step(&mut self, state: &State) {
        debug_assert!(!self.plants.is_empty(), "record_initial must come first");
        self.push(state);
    }

    fn push(&mut self, state: &State) {
        self.plants.push(state.plants);
        self.herbivores.push(state.herbivores);
        self.carnivores.push(state.carnivores);
    }

    /// Read-only view of the full recorded sequence for one species.
    #[inline]
    pub fn series(&self, species: Species) -> &[Population] {
        match species {
            Species::Plants => &self.plants,
            Species::Herbivores => &self.herbivores,
            Species::Carnivores => &self.carnivores,
        }
    }

    /// Number of recorded entries (ticks simulated plus one, once seeded).
    #[inline]
    pub fn len(&self) -> usize {
        self.plants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}
