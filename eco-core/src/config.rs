/// Rate and efficiency parameters for one simulation run.
///
/// Held constant while a run advances; typical values lie in `[0, 1]`.
/// The model does not validate them, so extreme or negative rates simply
/// produce the trajectories they imply.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub growth_rate: f32,
    pub herbivore_consumption: f32,
    pub herbivore_conversion: f32,
    pub herbivore_mortality: f32,
    pub carnivore_consumption: f32,
    pub carnivore_conversion: f32,
    pub carnivore_mortality: f32,
    /// Seconds between simulation steps when auto-running.
    pub tick_interval: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            growth_rate: 0.3,
            herbivore_consumption: 0.05,
            herbivore_conversion: 0.02,
            herbivore_mortality: 0.1,
            carnivore_consumption: 0.02,
            carnivore_conversion: 0.01,
            carnivore_mortality: 0.1,
            tick_interval: 1.0,
        }
    }
}
