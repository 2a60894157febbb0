//! Fixed-step free-flight integrator with wall reflection
//!
//! One call advances every non-dragged body by exactly one frame. The frame
//! delta is implicit (velocities are px/frame), so no `dt` is threaded through.

use super::states::{Particle, ParticleStore, Viewport};

/// Advance all non-dragged particles by one frame.
/// Dragged particles are positioned by the drag controller instead.
pub fn integrate(store: &mut ParticleStore, viewport: Viewport, radius: f64) {
    for p in store.iter_mut().filter(|p| !p.is_dragging) {
        step_particle(p, viewport, radius);
    }
}

/// x_n+1 = x_n + v_n, rotation_n+1 = rotation_n + spin, then reflect.
pub fn step_particle(p: &mut Particle, viewport: Viewport, radius: f64) {
    p.x += p.v;
    p.rotation += p.spin;

    // Axis-independent full sign flip, no energy lost at the walls
    let (lo, hi) = axis_bounds(viewport.width, radius);
    reflect_axis(&mut p.x.x, &mut p.v.x, lo, hi);

    let (lo, hi) = axis_bounds(viewport.height, radius);
    reflect_axis(&mut p.x.y, &mut p.v.y, lo, hi);
}

/// Allowed centre range `[radius, dim - radius]` along one axis.
/// When the axis is narrower than a diameter the range collapses to its midpoint.
pub fn axis_bounds(dim: f64, radius: f64) -> (f64, f64) {
    let dim = dim.max(0.0);
    if dim >= 2.0 * radius {
        (radius, dim - radius)
    } else {
        let mid = 0.5 * dim;
        (mid, mid)
    }
}

fn reflect_axis(pos: &mut f64, vel: &mut f64, lo: f64, hi: f64) {
    if *pos < lo {
        *pos = lo;
        *vel = -*vel;
    } else if *pos > hi {
        *pos = hi;
        *vel = -*vel;
    }
}
