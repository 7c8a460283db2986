use crate::state::DragOffset;
use glam::Vec2;

/// Tracks one pointer-down-to-pointer-up sequence.
///
/// Move and end samples carry the cumulative displacement since the gesture
/// started, not a delta from the previous sample.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureTracker {
    active: bool,
    offset: DragOffset,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking. Returns `false` and leaves state untouched when a
    /// gesture is already active.
    pub fn start(&mut self) -> bool {
        if self.active {
            log::debug!("[gesture] start ignored: gesture already active");
            return false;
        }
        self.active = true;
        self.offset = Vec2::ZERO;
        true
    }

    /// Record a move sample. Returns the new offset, or `None` when no
    /// gesture is active.
    pub fn update(&mut self, dx: f32, dy: f32) -> Option<DragOffset> {
        if !self.active {
            return None;
        }
        self.offset = sanitize(dx, dy);
        Some(self.offset)
    }

    /// Finalize the gesture and reset tracking. Returns the release offset,
    /// or `None` when no gesture was active.
    pub fn end(&mut self, dx: f32, dy: f32) -> Option<DragOffset> {
        if !self.active {
            return None;
        }
        let released = sanitize(dx, dy);
        self.reset();
        Some(released)
    }

    /// Drop any in-progress gesture without producing a release.
    pub fn reset(&mut self) {
        self.active = false;
        self.offset = Vec2::ZERO;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn offset(&self) -> DragOffset {
        self.offset
    }
}

// Non-finite samples (lost pointer capture on some platforms) collapse to 0.
#[inline]
fn sanitize(dx: f32, dy: f32) -> Vec2 {
    let fix = |v: f32| if v.is_finite() { v } else { 0.0 };
    Vec2::new(fix(dx), fix(dy))
}
