pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, ParticleStore, ParticleId, Pose, Viewport, Trinket, NVec2};
pub use simulation::params::Parameters;
pub use simulation::spawner::spawn_particles;
pub use simulation::integrator::{integrate, step_particle};
pub use simulation::collisions::{resolve_collisions, CollisionStats, PairOutcome};
pub use simulation::drag::{DragController, DragSession, PointerContext, PointerEvent};
pub use simulation::engine::{Engine, FrameReport, PoseSink};
pub use simulation::scenario::{Scenario, ViewerSettings};

pub use configuration::config::{ScenarioConfig, SimulationConfig, SpawnConfig, ViewerConfig};

pub use visualization::bindings::RenderBindings;
pub use visualization::pointer::{PointerRouter, PointerSource};
pub use visualization::{trinkets_vis2d::run_2d, trinkets_headless::run_headless};

pub use benchmark::benchmark::bench_tick;
