use glam::Vec2;
use std::time::Duration;
use swipe_core::CardView;

/// Pointer that currently owns the card, with the client position where it
/// went down.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerDrag {
    pub active: bool,
    pub pointer_id: i32,
    pub origin: Vec2,
}

impl PointerDrag {
    pub fn begin(pointer_id: i32, client_x: f32, client_y: f32) -> Self {
        Self {
            active: true,
            pointer_id,
            origin: Vec2::new(client_x, client_y),
        }
    }

    /// Cumulative displacement for a pointer sample, or `None` if the sample
    /// belongs to another pointer or no drag is active.
    #[inline]
    pub fn displacement(&self, pointer_id: i32, client_x: f32, client_y: f32) -> Option<Vec2> {
        if !self.active || self.pointer_id != pointer_id {
            return None;
        }
        Some(Vec2::new(client_x, client_y) - self.origin)
    }

    pub fn finish(&mut self) {
        self.active = false;
    }
}

// ---------------- Style helpers ----------------
#[inline]
pub fn card_transform_css(view: &CardView) -> String {
    format!(
        "transform: translate({:.2}px, {:.2}px) rotate({:.3}deg);",
        view.translation.x, view.translation.y, view.feedback.rotation_degrees
    )
}

#[inline]
pub fn opacity_css(opacity: f32) -> String {
    let o = if opacity.is_finite() {
        opacity.clamp(0.0, 1.0)
    } else {
        0.0
    };
    format!("opacity: {:.3};", o)
}

/// Frame delta clamped to `max_sec`; negative or non-finite inputs give zero.
#[inline]
pub fn clamp_frame_dt(dt_sec: f32, max_sec: f32) -> Duration {
    if !dt_sec.is_finite() || dt_sec <= 0.0 {
        return Duration::ZERO;
    }
    Duration::from_secs_f32(dt_sec.min(max_sec))
}
