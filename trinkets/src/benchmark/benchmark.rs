use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{ParticleId, Pose, Viewport};

/// Mean wall time of one `tick` as the population grows.
/// The all-pairs resolver should show roughly quadratic growth.
pub fn bench_tick() {
    // Different population sizes to test
    let ns = [8, 16, 32, 64];
    let frames = 10_000;
    let viewport = Viewport::new(1920.0, 1080.0);

    for n in ns {
        let parameters = Parameters {
            particle_count: n,
            seed: Some(42),
            ..Parameters::default()
        };
        let mut engine = Engine::new(parameters, viewport);
        let mut poses: Vec<(ParticleId, Pose)> = Vec::with_capacity(n as usize);
        let mut impacts = 0;

        let start = Instant::now();
        for _ in 0..frames {
            poses.clear();
            if let Some(report) = engine.tick(viewport, &mut poses) {
                impacts += report.collisions.impacts;
            }
        }
        let elapsed = start.elapsed();

        let per_tick_us = elapsed.as_secs_f64() * 1e6 / frames as f64;
        println!(
            "n = {:>3} | {:>6} frames | {:>8.3} us/tick | {:>6} impacts",
            n, frames, per_tick_us, impacts
        );
    }
}
