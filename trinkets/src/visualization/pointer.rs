//! Which physical pointer owns the drag.
//!
//! The mouse and each touch id are separate sources. Only the source whose
//! press started the session may move or end it; every other source is
//! ignored until that one lifts.

use crate::simulation::drag::PointerEvent;
use crate::simulation::states::{NVec2, ParticleId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    Mouse,
    Touch(u64), // bevy touch id
}

#[derive(Debug, Clone, Default)]
pub struct PointerRouter {
    owner: Option<PointerSource>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self) -> Option<PointerSource> {
        self.owner
    }

    /// A press over `target` (None when it hit empty space). Claims the drag
    /// for `source` if nothing holds it.
    pub fn press(&mut self, source: PointerSource, target: Option<ParticleId>, at: NVec2) -> Option<PointerEvent> {
        if self.owner.is_some() {
            return None;
        }
        let target = target?;
        self.owner = Some(source);
        Some(PointerEvent::Down { target, x: at.x, y: at.y })
    }

    pub fn motion(&self, source: PointerSource, at: NVec2) -> Option<PointerEvent> {
        (self.owner == Some(source)).then_some(PointerEvent::Move { x: at.x, y: at.y })
    }

    pub fn release(&mut self, source: PointerSource) -> Option<PointerEvent> {
        self.finish(source, PointerEvent::Up)
    }

    pub fn cancel(&mut self, source: PointerSource) -> Option<PointerEvent> {
        self.finish(source, PointerEvent::Cancel)
    }

    /// Drop the owner, e.g. when the engine refused the press.
    pub fn reset(&mut self) {
        self.owner = None;
    }

    fn finish(&mut self, source: PointerSource, event: PointerEvent) -> Option<PointerEvent> {
        if self.owner != Some(source) {
            return None;
        }
        self.owner = None;
        Some(event)
    }
}
