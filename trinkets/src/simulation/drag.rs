//! Pointer drag sessions
//!
//! `Idle -> Dragging -> Idle`, one session at a time. Input callbacks only
//! record pointer coordinates; the particle is moved once per frame by
//! [`apply_drag`], which derives the throw velocity from the pointer delta.

use bevy::log::{debug, warn};

use super::states::{NVec2, ParticleId, ParticleStore};

/// Input as delivered by the pointer/touch collaborator, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { target: ParticleId, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Cancel,
}

/// Pointer position this frame and last frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerContext {
    pub current: NVec2,
    pub previous: NVec2,
}

impl PointerContext {
    /// Both samples at `at`, so the first frame has zero displacement.
    pub fn at(at: NVec2) -> Self {
        Self {
            current: at,
            previous: at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub particle: ParticleId,
    pub pointer: PointerContext,
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Route one input event. Returns true if drag state changed.
    pub fn handle(&mut self, store: &mut ParticleStore, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { target, x, y } => self.start(store, target, NVec2::new(x, y)),
            PointerEvent::Move { x, y } => {
                self.move_to(NVec2::new(x, y));
                false
            }
            PointerEvent::Up | PointerEvent::Cancel => self.end(store).is_some(),
        }
    }

    /// Begin dragging `id`. Ignored while another session is active or if
    /// `id` is unknown.
    pub fn start(&mut self, store: &mut ParticleStore, id: ParticleId, at: NVec2) -> bool {
        if let Some(active) = &self.session {
            debug!("ignoring drag of {id}, {} already held", active.particle);
            return false;
        }
        let Some(p) = store.get_mut(id) else {
            warn!("pointer down on unknown particle {id}");
            return false;
        };

        p.is_dragging = true;
        self.session = Some(DragSession {
            particle: id,
            pointer: PointerContext::at(at),
        });
        debug!("drag start: particle {id} at ({:.1}, {:.1})", at.x, at.y);
        true
    }

    /// Latest pointer position wins. Nothing to do when idle.
    pub fn move_to(&mut self, at: NVec2) {
        if let Some(session) = &mut self.session {
            session.pointer.current = at;
        }
    }

    /// Release the held particle, keeping its last frame velocity as the throw.
    /// A release with nothing held is a no-op.
    pub fn end(&mut self, store: &mut ParticleStore) -> Option<ParticleId> {
        let session = self.session.take()?;
        if let Some(p) = store.get_mut(session.particle) {
            p.is_dragging = false;
            debug!(
                "drag end: particle {} thrown at ({:.2}, {:.2})",
                session.particle, p.v.x, p.v.y
            );
        }
        Some(session.particle)
    }

    /// Per-frame step for the active session, if any.
    pub fn apply(&mut self, store: &mut ParticleStore) {
        if let Some(session) = &mut self.session {
            apply_drag(store, session);
        }
    }
}

/// Pin the held particle to the pointer and give it the pointer's
/// displacement since last frame as velocity. Spin is held at zero.
pub fn apply_drag(store: &mut ParticleStore, session: &mut DragSession) {
    let pointer = &mut session.pointer;
    if let Some(p) = store.get_mut(session.particle) {
        p.x = pointer.current;
        p.v = pointer.current - pointer.previous;
        p.spin = 0.0;
    }
    pointer.previous = pointer.current;
}
