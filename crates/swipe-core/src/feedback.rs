//! Continuous visual feedback for a dragged card.
//!
//! Every function here is a pure map from the horizontal offset and the
//! viewport width to a display value. Widths get the same lower bound as
//! [`Viewport`](crate::state::Viewport). Inputs outside the mapped range
//! saturate to the nearest output bound, so callers never see values past
//! the configured tilt or outside \[0, 1\] for opacities.

use crate::constants::{LABEL_SPAN_FRACTION, MAX_ROTATION_DEG, ROTATION_SPAN_FRACTION};
use crate::state::{sanitize_extent, DragOffset, Viewport, VisualFeedback};

/// Piecewise-linear interpolation through `(input[i], output[i])` with
/// clamped extrapolation.
///
/// `input` must be non-decreasing and the same length as `output`. Empty
/// tables map everything to 0.
pub fn interpolate_clamped(x: f32, input: &[f32], output: &[f32]) -> f32 {
    let n = input.len().min(output.len());
    if n == 0 {
        return 0.0;
    }
    if x <= input[0] {
        return output[0];
    }
    if x >= input[n - 1] {
        return output[n - 1];
    }
    for i in 0..n - 1 {
        let (x0, x1) = (input[i], input[i + 1]);
        if x <= x1 {
            let span = x1 - x0;
            if span <= f32::EPSILON {
                return output[i + 1];
            }
            let t = (x - x0) / span;
            return output[i] + (output[i + 1] - output[i]) * t;
        }
    }
    output[n - 1]
}

/// Card tilt in degrees using the default maximum tilt.
#[inline]
pub fn rotation_degrees(dx: f32, viewport_width: f32) -> f32 {
    rotation_degrees_with(dx, viewport_width, MAX_ROTATION_DEG)
}

/// Card tilt in degrees: -max at -W/2, 0 at rest, +max at +W/2.
pub fn rotation_degrees_with(dx: f32, viewport_width: f32, max_degrees: f32) -> f32 {
    let half = sanitize_extent(viewport_width) * ROTATION_SPAN_FRACTION;
    interpolate_clamped(
        dx,
        &[-half, 0.0, half],
        &[-max_degrees, 0.0, max_degrees],
    )
}

/// Opacity of the LIKE label: 0 at rest or left of it, 1 from W/4 rightwards.
pub fn accept_opacity(dx: f32, viewport_width: f32) -> f32 {
    let quarter = sanitize_extent(viewport_width) * LABEL_SPAN_FRACTION;
    interpolate_clamped(dx, &[0.0, quarter], &[0.0, 1.0])
}

/// Opacity of the NOPE label: 1 from -W/4 leftwards, 0 at rest or right of it.
pub fn reject_opacity(dx: f32, viewport_width: f32) -> f32 {
    let quarter = sanitize_extent(viewport_width) * LABEL_SPAN_FRACTION;
    interpolate_clamped(dx, &[-quarter, 0.0], &[1.0, 0.0])
}

/// Full feedback for an offset. Only `dx` contributes; vertical motion is
/// cosmetic.
pub fn feedback_for(
    offset: DragOffset,
    viewport: Viewport,
    max_rotation_degrees: f32,
) -> VisualFeedback {
    let w = viewport.width();
    VisualFeedback {
        rotation_degrees: rotation_degrees_with(offset.x, w, max_rotation_degrees),
        accept_opacity: accept_opacity(offset.x, w),
        reject_opacity: reject_opacity(offset.x, w),
    }
}
