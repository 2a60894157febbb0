//! Pairwise circle-circle collision for equal-size, equal-mass trinkets
//!
//! Runs once per frame after the integrator. Every unordered pair (i, j) with
//! i < j in id order is checked directly, O(n^2). Populations are single digits
//! to low tens, so there is no broad phase.

use rand::Rng;

use super::states::{NVec2, Particle, ParticleStore};

/// Counters for one resolver pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStats {
    pub overlaps: usize, // pairs pushed apart
    pub impacts: usize, // pairs that also exchanged velocity
}

/// What happened to a single pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    Apart, // no overlap
    Coincident, // centres identical, normal undefined, skipped
    Separating, // overlap corrected, already moving apart so no impulse
    Impact, // overlap corrected and impulse applied
}

/// Resolve overlaps among all non-dragged particles.
pub fn resolve_collisions<R: Rng + ?Sized>(
    store: &mut ParticleStore,
    radius: f64,
    spin_kick: f64,
    rng: &mut R,
) -> CollisionStats {
    let mut stats = CollisionStats::default();
    let n = store.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (pi, pj) = store.pair_mut(i, j);
            if pi.is_dragging || pj.is_dragging {
                continue;
            }

            match resolve_pair(pi, pj, radius, spin_kick, rng) {
                PairOutcome::Apart | PairOutcome::Coincident => {}
                PairOutcome::Separating => stats.overlaps += 1,
                PairOutcome::Impact => {
                    stats.overlaps += 1;
                    stats.impacts += 1;
                }
            }
        }
    }

    stats
}

/// Separate one overlapping pair to exactly `2 * radius` and, unless they are
/// already moving apart, exchange the velocity component along the normal.
pub fn resolve_pair<R: Rng + ?Sized>(
    pi: &mut Particle,
    pj: &mut Particle,
    radius: f64,
    spin_kick: f64,
    rng: &mut R,
) -> PairOutcome {
    let d = pj.x - pi.x;
    let distance = d.norm();
    let min_distance = 2.0 * radius;

    if distance >= min_distance {
        return PairOutcome::Apart;
    }
    if distance <= 0.0 {
        return PairOutcome::Coincident;
    }

    // Collision normal from i towards j
    let n: NVec2 = d / distance;

    // Each body moves half the overlap away from the other
    let push = n * (0.5 * (min_distance - distance));
    pi.x -= push;
    pj.x += push;

    // Velocity of j relative to i along the normal, > 0 means separating
    let p = (pj.v - pi.v).dot(&n);
    if p > 0.0 {
        return PairOutcome::Separating;
    }

    // Equal-mass elastic exchange along n, tangential part untouched
    pi.v += p * n;
    pj.v -= p * n;

    let kick = spin_kick.abs();
    if kick > 0.0 {
        pi.spin += rng.gen_range(-kick..=kick);
        pj.spin += rng.gen_range(-kick..=kick);
    }

    PairOutcome::Impact
}
