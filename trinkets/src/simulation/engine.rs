//! Frame driver
//!
//! `Engine` owns the particle store, the drag controller and the RNG. An
//! external scheduler (the Bevy `Update` schedule, the headless runner, or a
//! test) calls [`Engine::tick`] once per display refresh. Teardown is simply
//! "stop ticking"; after [`Engine::teardown`] further ticks do nothing.

use bevy::log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::collisions::{resolve_collisions, CollisionStats};
use super::drag::{DragController, PointerEvent};
use super::integrator::integrate;
use super::params::Parameters;
use super::spawner::spawn_particles;
use super::states::{NVec2, Particle, ParticleId, ParticleStore, Pose, Viewport};

/// Receives the final pose of every particle at the end of a tick.
pub trait PoseSink {
    fn publish(&mut self, id: ParticleId, pose: Pose);
}

impl PoseSink for Vec<(ParticleId, Pose)> {
    fn publish(&mut self, id: ParticleId, pose: Pose) {
        self.push((id, pose));
    }
}

/// Summary of one completed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub collisions: CollisionStats,
}

#[derive(Debug, Clone)]
pub struct Engine {
    parameters: Parameters,
    store: ParticleStore,
    drag: DragController,
    rng: StdRng,
    frame: u64,
    running: bool,
}

impl Engine {
    /// Spawn the population for `viewport` and get ready to tick.
    pub fn new(parameters: Parameters, viewport: Viewport) -> Self {
        let mut rng = match parameters.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = spawn_particles(&parameters, viewport, &mut rng);
        info!(
            "spawned {} trinkets in {:.0}x{:.0} viewport",
            particles.len(),
            viewport.width,
            viewport.height
        );
        Self::from_parts(parameters, particles, rng)
    }

    /// Start from a hand-built population instead of spawning.
    pub fn with_particles(parameters: Parameters, particles: Vec<Particle>) -> Self {
        let rng = StdRng::seed_from_u64(parameters.seed.unwrap_or_default());
        Self::from_parts(parameters, particles, rng)
    }

    fn from_parts(parameters: Parameters, particles: Vec<Particle>, rng: StdRng) -> Self {
        Self {
            parameters,
            store: ParticleStore::new(particles),
            drag: DragController::new(),
            rng,
            frame: 0,
            running: true,
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Ticks completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Hit test in viewport pixels, for the input collaborator.
    pub fn pick(&self, point: NVec2, reach: f64) -> Option<ParticleId> {
        self.store.pick(point, reach)
    }

    /// Record pointer input. Safe to call any number of times between ticks;
    /// coordinates are only consumed at the start of the next tick.
    /// Ignored once torn down.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        if !self.running {
            return false;
        }
        self.drag.handle(&mut self.store, event)
    }

    /// One frame: drag, integrate, collide, publish.
    /// Returns `None` once torn down.
    ///
    /// Walls are enforced by the integrator, before collisions. Separation can
    /// leave a published pose up to `radius` past a wall until the next tick.
    pub fn tick(&mut self, viewport: Viewport, sink: &mut dyn PoseSink) -> Option<FrameReport> {
        if !self.running {
            return None;
        }

        let radius = self.parameters.radius;
        self.drag.apply(&mut self.store);
        integrate(&mut self.store, viewport, radius);
        let collisions = resolve_collisions(&mut self.store, radius, self.parameters.spin_kick, &mut self.rng);

        for p in self.store.iter() {
            sink.publish(p.id, p.pose());
        }

        self.frame += 1;
        if collisions.impacts > 0 {
            debug!("frame {}: {} impacts, {} overlaps", self.frame, collisions.impacts, collisions.overlaps);
        }

        Some(FrameReport {
            frame: self.frame,
            collisions,
        })
    }

    /// Stop the driver. Any held particle is released first.
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.drag.end(&mut self.store);
        self.running = false;
        info!("simulation torn down after {} frames", self.frame);
    }
}
