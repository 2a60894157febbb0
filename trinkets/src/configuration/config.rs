//! Configuration types for loading trinket scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`SimulationConfig`] – population size, hit radius, collision spin, seed
//! - [`SpawnConfig`]      – spawn margin and initial speed/spin ranges
//! - [`ViewerConfig`]     – initial window size and visual scale
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so a partial file is valid.
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   particle_count: 8       # spawned once, never added or removed
//!   radius: 40.0            # shared collision radius in px
//!   spin_kick: 2.5          # max |spin| added per body on impact
//!   seed: 42                # omit for a different layout every run
//!
//! spawn:
//!   margin: 100.0           # inset from each edge at spawn
//!   max_speed: 1.6          # px/frame per axis
//!   max_spin: 1.0           # degrees/frame
//!
//! viewer:
//!   width: 1280.0
//!   height: 720.0
//!   visual_size: 100.0      # drawn diameter, larger than the hit radius
//!   title: "trinkets"
//! ```

use anyhow::{ensure, Result};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    pub particle_count: u32, // number of trinkets, 6-10 reads best
    pub radius: f64, // collision radius, px
    pub spin_kick: f64, // spin perturbation bound on impact, degrees/frame
    pub seed: Option<u64>, // deterministic seed to make runs reproducible
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: 8,
            radius: 40.0,
            spin_kick: 2.5,
            seed: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SpawnConfig {
    pub margin: f64, // keep spawns this far from the walls
    pub max_speed: f64, // initial velocity bound per axis
    pub max_spin: f64, // initial spin bound
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            margin: 100.0,
            max_speed: 1.6,
            max_spin: 1.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: f64, // initial viewport width, px
    pub height: f64, // initial viewport height, px
    pub visual_size: f64, // rendered diameter, px
    pub title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            visual_size: 100.0,
            title: "trinkets".to_string(),
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig,
    pub spawn: SpawnConfig,
    pub viewer: ViewerConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the simulation cannot use.
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        ensure!(sim.radius.is_finite() && sim.radius > 0.0, "simulation.radius must be positive, got {}", sim.radius);
        non_negative("simulation.spin_kick", sim.spin_kick)?;
        non_negative("spawn.margin", self.spawn.margin)?;
        non_negative("spawn.max_speed", self.spawn.max_speed)?;
        non_negative("spawn.max_spin", self.spawn.max_spin)?;
        non_negative("viewer.width", self.viewer.width)?;
        non_negative("viewer.height", self.viewer.height)?;
        non_negative("viewer.visual_size", self.viewer.visual_size)?;
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    ensure!(value.is_finite() && value >= 0.0, "{name} must be finite and >= 0, got {value}");
    Ok(())
}
