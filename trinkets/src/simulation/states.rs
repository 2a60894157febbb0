//! Core state types for the trinket simulation.
//!
//! Defines the per-body record and the store that owns them:
//! - `Particle` / `ParticleStore` using `NVec2` (viewport pixels, origin top-left)
//! - `Pose` is what the renderer gets each frame
//! - `Viewport` is the current bounding area read from the window
//!
//! The store holds simulation data only. Render handles live with the renderer
//! (see `visualization::bindings`).

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Stable identity of a particle, `0..N` in spawn order.
pub type ParticleId = u32;

/// Visual identity of a trinket. Picked at spawn and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trinket {
    Rocket,
    Star,
    Gem,
    Planet,
    Ghost,
    Cherry,
    Dice,
    Bolt,
}

impl Trinket {
    /// The fixed pool the spawner draws from.
    pub const POOL: [Trinket; 8] = [
        Trinket::Rocket,
        Trinket::Star,
        Trinket::Gem,
        Trinket::Planet,
        Trinket::Ghost,
        Trinket::Cherry,
        Trinket::Dice,
        Trinket::Bolt,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            Trinket::Rocket => "🚀",
            Trinket::Star => "⭐",
            Trinket::Gem => "💎",
            Trinket::Planet => "🪐",
            Trinket::Ghost => "👻",
            Trinket::Cherry => "🍒",
            Trinket::Dice => "🎲",
            Trinket::Bolt => "⚡",
        }
    }

    /// sRGB tint used by the 2D viewer in place of the glyph.
    pub fn color(&self) -> [f32; 3] {
        match self {
            Trinket::Rocket => [0.91, 0.30, 0.24],
            Trinket::Star => [0.98, 0.80, 0.18],
            Trinket::Gem => [0.20, 0.70, 0.95],
            Trinket::Planet => [0.85, 0.60, 0.35],
            Trinket::Ghost => [0.92, 0.92, 0.96],
            Trinket::Cherry => [0.80, 0.10, 0.30],
            Trinket::Dice => [0.60, 0.40, 0.85],
            Trinket::Bolt => [0.95, 0.65, 0.10],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    pub x: NVec2, // position, px
    pub v: NVec2, // velocity, px/frame
    pub rotation: f64, // degrees, unbounded
    pub spin: f64, // angular velocity, degrees/frame
    pub trinket: Trinket,
    pub is_dragging: bool,
}

impl Particle {
    pub fn new(id: ParticleId, x: NVec2, v: NVec2, trinket: Trinket) -> Self {
        Self {
            id,
            x,
            v,
            rotation: 0.0,
            spin: 0.0,
            trinket,
            is_dragging: false,
        }
    }

    pub fn pose(&self) -> Pose {
        Pose {
            x: self.x.x,
            y: self.x.y,
            rotation: self.rotation,
        }
    }
}

/// Per-frame placement handed to the renderer. Centre of the body, not the
/// corner of its visual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub rotation: f64, // degrees, clockwise on screen
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Negative or NaN sizes collapse to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn size(&self) -> NVec2 {
        NVec2::new(self.width, self.height)
    }
}

/// Owns every particle, kept sorted by id.
///
/// No invariants are enforced here; the integrator, resolver and drag
/// controller each keep their own.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new(mut particles: Vec<Particle>) -> Self {
        particles.sort_by_key(|p| p.id);
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterate in stable id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.index_of(id).map(|i| &self.particles[i])
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.index_of(id).map(move |i| &mut self.particles[i])
    }

    /// Mutable access to two distinct particles by position in id order.
    /// Panics unless `i < j < len`.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Particle, &mut Particle) {
        assert!(i < j, "pair_mut expects i < j, got {i} and {j}");
        let (left, right) = self.particles.split_at_mut(j);
        (&mut left[i], &mut right[0])
    }

    /// The particle currently held by the pointer, if any.
    pub fn dragged(&self) -> Option<&Particle> {
        self.particles.iter().find(|p| p.is_dragging)
    }

    /// Top-most particle whose centre lies within `reach` of `point`.
    /// Higher ids are drawn later, so they win ties.
    pub fn pick(&self, point: NVec2, reach: f64) -> Option<ParticleId> {
        self.particles
            .iter()
            .rev()
            .find(|p| (p.x - point).norm() <= reach)
            .map(|p| p.id)
    }

    fn index_of(&self, id: ParticleId) -> Option<usize> {
        self.particles.binary_search_by_key(&id, |p| p.id).ok()
    }
}
