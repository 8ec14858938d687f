use crate::types::{Population, Species};
use glam::Vec2;
use rand::Rng;

/// How a population is turned into a number of on-screen markers.
///
/// Markers are a cosmetic stand-in for population size and carry no model
/// semantics: one marker represents `per_marker` individuals, and the
/// count is clamped so even an extinct species keeps a single marker while
/// a booming one cannot flood the screen.
#[derive(Clone, Copy, Debug)]
pub struct MarkerSpec {
    /// Individuals represented by a single marker.
    pub per_marker: Population,
    pub min_markers: usize,
    pub max_markers: usize,
    /// World-space draw radius.
    pub size: f32,
}

impl MarkerSpec {
    pub fn for_species(species: Species) -> Self {
        match species {
            Species::Plants => Self {
                per_marker: 10,
                min_markers: 1,
                max_markers: 100,
                size: 0.3,
            },
            Species::Herbivores => Self {
                per_marker: 1,
                min_markers: 1,
                max_markers: 50,
                size: 0.5,
            },
            Species::Carnivores => Self {
                per_marker: 1,
                min_markers: 1,
                max_markers: 20,
                size: 0.7,
            },
        }
    }

    /// Number of markers representing `population`, clamped to the
    /// configured bounds.
    pub fn count_for(&self, population: Population) -> usize {
        ((population / self.per_marker) as usize).clamp(self.min_markers, self.max_markers)
    }
}

/// A bag of marker positions for one species.
#[derive(Debug, Default)]
pub struct MarkerSet {
    pub points: Vec<Vec2>,
}

impl MarkerSet {
    pub fn from_positions(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Builds a fresh set of `count` uniform positions inside the rect
    /// spanned by `half_extents` around the origin.
    ///
    /// Markers are never moved incrementally; each tick discards the old
    /// set and scatters a new one.
    pub fn scatter_in_rect(count: usize, half_extents: Vec2, rng: &mut impl Rng) -> Self {
        let points = (0..count)
            .map(|_| {
                let x = rng.random_range(-half_extents.x..=half_extents.x);
                let y = rng.random_range(-half_extents.y..=half_extents.y);
                Vec2::new(x, y)
            })
            .collect();

        Self::from_positions(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Species;
    use glam::Vec2;

    #[test]
    fn plant_markers_scale_one_per_ten_and_clamp() {
        let plants = MarkerSpec::for_species(Species::Plants);

        assert_eq!(plants.count_for(200), 20);
        // Even an extinct species keeps one marker on screen.
        assert_eq!(plants.count_for(0), 1);
        assert_eq!(plants.count_for(5_000), 100);
    }

    #[test]
    fn animal_markers_are_one_to_one_up_to_their_caps() {
        let herbivores = MarkerSpec::for_species(Species::Herbivores);
        assert_eq!(herbivores.count_for(36), 36);
        assert_eq!(herbivores.count_for(500), 50);

        let carnivores = MarkerSpec::for_species(Species::Carnivores);
        assert_eq!(carnivores.count_for(7), 7);
        assert_eq!(carnivores.count_for(90), 20);
    }

    #[test]
    fn scatter_fills_the_requested_count_inside_the_rect() {
        let mut rng = rand::rng();
        let half = Vec2::new(5.0, 5.0);

        let set = MarkerSet::scatter_in_rect(64, half, &mut rng);

        assert_eq!(set.points.len(), 64);
        for p in &set.points {
            assert!(p.x >= -half.x && p.x <= half.x);
            assert!(p.y >= -half.y && p.y <= half.y);
        }
    }

    #[test]
    fn scatter_with_zero_count_is_empty() {
        let mut rng = rand::rng();
        let set = MarkerSet::scatter_in_rect(0, Vec2::new(5.0, 5.0), &mut rng);
        assert!(set.points.is_empty());
    }
}
