use crate::types::{Population, Species};

/// The three coupled population counters advanced by the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State {
    pub plants: Population,
    pub herbivores: Population,
    pub carnivores: Population,
}

impl State {
    pub fn new(plants: Population, herbivores: Population, carnivores: Population) -> Self {
        Self {
            plants,
            herbivores,
            carnivores,
        }
    }

    /// Returns the current count for one species.
    #[inline]
    pub fn population(&self, species: Species) -> Population {
        match species {
            Species::Plants => self.plants,
            Species::Herbivores => self.herbivores,
            Species::Carnivores => self.carnivores,
        }
    }
}

impl Default for State {
    /// The starting populations: 200 plants, 40 herbivores, 8 carnivores.
    fn default() -> Self {
        Self {
            plants: 200,
            herbivores: 40,
            carnivores: 8,
        }
    }
}
