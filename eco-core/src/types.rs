/// One of the three tracked populations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    Plants,
    Herbivores,
    Carnivores,
}

impl Species {
    /// All species, in the fixed trophic order used everywhere else.
    pub const ALL: [Species; 3] = [Species::Plants, Species::Herbivores, Species::Carnivores];

    /// Stable index for per-species array storage.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Species::Plants => 0,
            Species::Herbivores => 1,
            Species::Carnivores => 2,
        }
    }

    /// Display name for UI labels and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Species::Plants => "Plants",
            Species::Herbivores => "Herbivores",
            Species::Carnivores => "Carnivores",
        }
    }
}

/// A population count for a single species.
///
/// Populations are whole individuals and never negative; the model clamps
/// any computed negative value to zero before committing it.
pub type Population = u32;
