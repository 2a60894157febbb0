pub mod states;
pub mod params;
pub mod spawner;
pub mod integrator;
pub mod collisions;
pub mod drag;
pub mod engine;
pub mod scenario;
