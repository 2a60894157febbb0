//! Physical and spawn parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - population size and the shared hit radius,
//! - spawn margin and initial speed/spin ranges,
//! - collision spin perturbation and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub particle_count: u32, // bodies spawned once at start
    pub radius: f64, // shared collision radius, px
    pub spawn_margin: f64, // inset from each viewport edge at spawn, px
    pub max_speed: f64, // initial |v| per axis, px/frame
    pub max_spin: f64, // initial |spin|, degrees/frame
    pub spin_kick: f64, // max |spin| added to each body per impact
    pub seed: Option<u64>, // deterministic seed, None = entropy
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            particle_count: 8,
            radius: 40.0,
            spawn_margin: 100.0,
            max_speed: 1.6,
            max_spin: 1.0,
            spin_kick: 2.5,
            seed: None,
        }
    }
}
