//! The population update model: three coupled recurrences advanced one
//! discrete tick at a time.
//!
//! Each tick:
//! 1. Plants grow in proportion to the standing plant population and are
//!    grazed in proportion to the herbivore population.
//! 2. Herbivores convert a fraction of their grazing into new herbivores,
//!    die of natural mortality, and are hunted in proportion to the
//!    carnivore population.
//! 3. Carnivores convert a fraction of their hunting into new carnivores
//!    and die of natural mortality.
//!
//! All three formulas read the same pre-step snapshot; none of them sees
//! another species' freshly computed value. The model is mean-field and
//! deterministic: no spatial structure, no randomness.

use crate::{config::Config, state::State, types::Population};

/// Advances the simulation by exactly one tick.
///
/// The three recurrences are evaluated simultaneously over the pre-step
/// snapshot in real-valued arithmetic, rounded to the nearest whole
/// individual (ties away from zero), and clamped so that no population
/// goes negative.
///
/// The operation is pure and total: identical inputs always produce
/// identical outputs, nothing is mutated, and there is no error path.
/// Committing the returned state and recording it in a
/// [`crate::history::History`] is the caller's job.
///
/// ### Parameters
/// - `state` - Populations at the start of the tick.
/// - `cfg` - Rate and efficiency parameters; read-only.
///
/// ### Returns
/// The populations after one tick.
pub fn step(state: &State, cfg: &Config) -> State {
    let plants = state.plants as f32;
    let herbivores = state.herbivores as f32;
    let carnivores = state.carnivores as f32;

    // Growth proportional to standing plants, grazing losses proportional
    // to the herbivores that graze them.
    let next_plants = plants + cfg.growth_rate * plants - cfg.herbivore_consumption * herbivores;

    // Gains from converted grazing, losses to natural mortality and to
    // predation by the carnivores alive at the start of the tick.
    let next_herbivores = herbivores
        + cfg.herbivore_conversion * cfg.herbivore_consumption * herbivores
        - cfg.herbivore_mortality * herbivores
        - cfg.carnivore_consumption * carnivores;

    // Gains from converted predation, losses to natural mortality.
    let next_carnivores = carnivores
        + cfg.carnivore_conversion * cfg.carnivore_consumption * carnivores
        - cfg.carnivore_mortality * carnivores;

    State {
        plants: commit(next_plants),
        herbivores: commit(next_herbivores),
        carnivores: commit(next_carnivores),
    }
}

/// Rounds a raw population value to the nearest whole individual (ties away
/// from zero) and clamps it to zero.
///
/// Rounding is applied per species with no cross-species error correction,
/// so fractional individuals are simply created or lost at each tick.
#[inline]
fn commit(raw: f32) -> Population {
    raw.round().max(0.0) as Population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, state::State};

    #[test]
    fn default_scenario_first_step() {
        let state = State::default();
        let cfg = Config::default();

        let next = step(&state, &cfg);

        // 200 + 0.3*200 - 0.05*40 = 258
        assert_eq!(next.plants, 258);
        // 40 + 0.02*0.05*40 - 0.1*40 - 0.02*8 = 35.88 -> 36
        assert_eq!(next.herbivores, 36);
        // 8 + 0.01*0.02*8 - 0.1*8 = 7.2016 -> 7
        assert_eq!(next.carnivores, 7);
    }

    #[test]
    fn step_is_deterministic() {
        let state = State::new(123, 45, 6);
        let cfg = Config::default();

        assert_eq!(step(&state, &cfg), step(&state, &cfg));
    }

    #[test]
    fn negative_results_clamp_to_zero() {
        // Heavy grazing pressure drives plants well below zero in one tick.
        let cfg = Config {
            growth_rate: 0.0,
            herbivore_consumption: 1.0,
            ..Config::default()
        };
        let next = step(&State::new(10, 100, 0), &cfg);

        assert_eq!(next.plants, 0);
        // The clamp on plants must not disturb the herbivore update:
        // 100 + 0.02*1.0*100 - 0.1*100 - 0 = 92.
        assert_eq!(next.herbivores, 92);
        assert_eq!(next.carnivores, 0);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 79 herbivores at 50% mortality leave a raw 39.5, which rounds up.
        let cfg = Config {
            growth_rate: 0.0,
            herbivore_consumption: 0.0,
            herbivore_conversion: 0.0,
            herbivore_mortality: 0.5,
            carnivore_consumption: 0.0,
            ..Config::default()
        };
        let next = step(&State::new(0, 79, 0), &cfg);

        assert_eq!(next.herbivores, 40);
    }

    #[test]
    fn plants_ignore_herbivores_when_consumption_is_zero() {
        // With the grazing rate zeroed out there is no remaining path from
        // the herbivore count to the plant update.
        let cfg = Config {
            herbivore_consumption: 0.0,
            ..Config::default()
        };

        let a = step(&State::new(200, 0, 8), &cfg);
        let b = step(&State::new(200, 10_000, 8), &cfg);

        assert_eq!(a.plants, b.plants);
    }

    #[test]
    fn carnivores_never_read_other_species() {
        let cfg = Config::default();

        let a = step(&State::new(0, 0, 50), &cfg);
        let b = step(&State::new(999, 999, 50), &cfg);

        assert_eq!(a.carnivores, b.carnivores);
    }

    #[test]
    fn herbivores_pay_predation_on_the_pre_step_carnivore_count() {
        // Full carnivore mortality wipes the predators this tick; herbivore
        // losses must still reflect the carnivores alive when the tick began.
        let cfg = Config {
            carnivore_mortality: 1.0,
            carnivore_conversion: 0.0,
            ..Config::default()
        };
        let next = step(&State::new(0, 100, 50), &cfg);

        assert_eq!(next.carnivores, 0);
        // 100 + 0.02*0.05*100 - 0.1*100 - 0.02*50 = 89.1 -> 89
        assert_eq!(next.herbivores, 89);
    }

    #[test]
    fn clamped_species_can_recover_when_the_net_term_flips() {
        // Grazing drives plants to zero.
        let graze = Config {
            growth_rate: 0.0,
            herbivore_consumption: 0.5,
            ..Config::default()
        };
        let starved = step(&State::new(10, 100, 0), &graze);
        assert_eq!(starved.plants, 0);

        // A sign-flipped grazing term now feeds plants instead; the clamp
        // must not have cut the recurrence off from the other species.
        let reseed = Config {
            herbivore_consumption: -0.1,
            ..graze
        };
        let regrown = step(&starved, &reseed);
        assert!(regrown.plants > 0);
    }
}
