//! Initial population of trinkets
//!
//! Positions come from the viewport inset by `spawn_margin` so nothing starts
//! pinned to a wall. Velocity, rotation, spin and trinket are uniform draws.

use rand::seq::SliceRandom;
use rand::Rng;

use super::params::Parameters;
use super::states::{NVec2, Particle, Trinket, Viewport};

/// Build `params.particle_count` particles with ids `0..N`.
/// Meant to run once per simulation; calling it again gives a fresh,
/// unrelated population.
pub fn spawn_particles<R: Rng + ?Sized>(params: &Parameters, viewport: Viewport, rng: &mut R) -> Vec<Particle> {
    let (x_lo, x_hi) = spawn_range(viewport.width, params.spawn_margin);
    let (y_lo, y_hi) = spawn_range(viewport.height, params.spawn_margin);
    let max_speed = params.max_speed.abs();
    let max_spin = params.max_spin.abs();

    let mut particles = Vec::with_capacity(params.particle_count as usize);
    for i in 0..params.particle_count {
        let x = NVec2::new(uniform(rng, x_lo, x_hi), uniform(rng, y_lo, y_hi));
        let v = NVec2::new(
            rng.gen_range(-max_speed..=max_speed),
            rng.gen_range(-max_speed..=max_speed),
        );
        let trinket = *Trinket::POOL.choose(rng).unwrap_or(&Trinket::Star);

        let mut p = Particle::new(i, x, v, trinket);
        p.rotation = rng.gen_range(0.0..360.0);
        p.spin = rng.gen_range(-max_spin..=max_spin);
        particles.push(p);
    }
    particles
}

/// Inset `[margin, dim - margin)`, or the whole axis when the viewport is
/// too small for the margin.
fn spawn_range(dim: f64, margin: f64) -> (f64, f64) {
    let dim = dim.max(0.0);
    let margin = margin.max(0.0);
    if dim > 2.0 * margin {
        (margin, dim - margin)
    } else {
        (0.0, dim)
    }
}

// gen_range panics on an empty range
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
