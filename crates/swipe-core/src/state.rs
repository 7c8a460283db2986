//! Visual-side state types shared with the frontends.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! use on both native and web targets. Frontends read them once per frame to
//! position the top card and fade its LIKE / NOPE labels.

use crate::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MIN_VIEWPORT_EXTENT};
use glam::Vec2;

/// Cumulative pointer displacement since the gesture started, in logical units.
pub type DragOffset = Vec2;

/// Logical size of the surface the deck is presented on.
///
/// Both extents are clamped to at least one logical unit so the feedback
/// ranges derived from the width never collapse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

/// Clamp a viewport extent to at least [`MIN_VIEWPORT_EXTENT`]; non-finite
/// extents collapse to the minimum.
#[inline]
pub(crate) fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_EXTENT)
    } else {
        MIN_VIEWPORT_EXTENT
    }
}

/// Per-frame feedback derived from the live offset.
///
/// Opacities are in the \[0, 1\] range. `rotation_degrees` is in
/// \[-max, max\] where max is the configured tilt.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisualFeedback {
    pub rotation_degrees: f32,
    pub accept_opacity: f32,
    pub reject_opacity: f32,
}

/// Everything a renderer needs to draw the top card for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardView {
    pub translation: Vec2,
    pub feedback: VisualFeedback,
}
