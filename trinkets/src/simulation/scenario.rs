//! Build a fully-initialized trinket scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - the frame driver (`Engine`) with its spawned population
//! - viewer settings (`ViewerSettings`) for the render collaborator
//!
//! The scenario is inserted into Bevy as a `Resource` and ticked by the
//! viewer or the headless runner

use bevy::prelude::Resource;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::Viewport;

/// Runtime settings for whoever draws the trinkets.
#[derive(Debug, Clone)]
pub struct ViewerSettings {
    pub width: f64,
    pub height: f64,
    pub visual_size: f64, // drawn diameter, px
    pub title: String,
}

impl ViewerSettings {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub viewer: ViewerSettings,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Parameters (runtime) from SimulationConfig + SpawnConfig
        let parameters = Parameters {
            particle_count: cfg.simulation.particle_count,
            radius: cfg.simulation.radius,
            spawn_margin: cfg.spawn.margin,
            max_speed: cfg.spawn.max_speed,
            max_spin: cfg.spawn.max_spin,
            spin_kick: cfg.simulation.spin_kick,
            seed: cfg.simulation.seed,
        };

        let viewer = ViewerSettings {
            width: cfg.viewer.width,
            height: cfg.viewer.height,
            visual_size: cfg.viewer.visual_size,
            title: cfg.viewer.title,
        };

        // Spawn against the configured window size, the viewport at startup
        let engine = Engine::new(parameters, viewer.viewport());

        Self { engine, viewer }
    }
}
