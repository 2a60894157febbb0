//! Particle id -> render handle relation, owned by the renderer.
//!
//! The simulation never holds a handle. Each frame the renderer looks the
//! published ids up here; ids without a binding are skipped.

use std::collections::HashMap;

use crate::simulation::states::{ParticleId, Pose};

#[derive(Debug, Clone)]
pub struct RenderBindings<H> {
    handles: HashMap<ParticleId, H>,
}

impl<H> Default for RenderBindings<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> RenderBindings<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `handle` to `id`, returning the handle it replaces.
    pub fn bind(&mut self, id: ParticleId, handle: H) -> Option<H> {
        self.handles.insert(id, handle)
    }

    pub fn unbind(&mut self, id: ParticleId) -> Option<H> {
        self.handles.remove(&id)
    }

    pub fn get(&self, id: ParticleId) -> Option<&H> {
        self.handles.get(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Pair each published pose with its handle, dropping unbound ids.
    pub fn resolve<'a>(&'a self, poses: &'a [(ParticleId, Pose)]) -> impl Iterator<Item = (&'a H, Pose)> + 'a {
        poses
            .iter()
            .filter_map(move |(id, pose)| self.handles.get(id).map(|h| (h, *pose)))
    }
}
