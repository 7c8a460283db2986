// Host-side tests for the pure feedback mapping.

use glam::Vec2;
use swipe_core::*;

const W: f32 = 400.0;
const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn rotation_hits_anchor_points() {
    assert_eq!(rotation_degrees(0.0, W), 0.0);
    assert!(approx(rotation_degrees(W / 2.0, W), 10.0));
    assert!(approx(rotation_degrees(-W / 2.0, W), -10.0));
}

#[test]
fn rotation_is_clamped_past_half_width() {
    assert!(approx(rotation_degrees(W, W), 10.0));
    assert!(approx(rotation_degrees(-W, W), -10.0));
    assert!(approx(rotation_degrees(1e6, W), 10.0));
}

#[test]
fn rotation_is_linear_between_anchors() {
    assert!(approx(rotation_degrees(W / 4.0, W), 5.0));
    assert!(approx(rotation_degrees(-W / 4.0, W), -5.0));
}

#[test]
fn rotation_is_monotonic() {
    let mut prev = rotation_degrees(-W, W);
    let mut dx = -W;
    while dx <= W {
        let r = rotation_degrees(dx, W);
        assert!(r >= prev, "rotation decreased at dx={dx}");
        prev = r;
        dx += 7.0;
    }
}

#[test]
fn opacities_at_rest_are_zero() {
    assert_eq!(accept_opacity(0.0, W), 0.0);
    assert_eq!(reject_opacity(0.0, W), 0.0);
}

#[test]
fn opacities_saturate_past_quarter_width() {
    for dx in [W / 4.0, W / 2.0, W * 3.0] {
        assert!(approx(accept_opacity(dx, W), 1.0));
        assert!(approx(reject_opacity(dx, W), 0.0));
        assert!(approx(accept_opacity(dx, W) + reject_opacity(dx, W), 1.0));
    }
    for dx in [-W / 4.0, -W / 2.0, -W * 3.0] {
        assert!(approx(reject_opacity(dx, W), 1.0));
        assert!(approx(accept_opacity(dx, W), 0.0));
        assert!(approx(accept_opacity(dx, W) + reject_opacity(dx, W), 1.0));
    }
}

#[test]
fn opacities_ramp_linearly() {
    assert!(approx(accept_opacity(W / 8.0, W), 0.5));
    assert!(approx(reject_opacity(-W / 8.0, W), 0.5));
    // Only one label is ever visible
    assert_eq!(reject_opacity(W / 8.0, W), 0.0);
    assert_eq!(accept_opacity(-W / 8.0, W), 0.0);
}

#[test]
fn opacities_stay_in_unit_range() {
    let mut dx = -2.0 * W;
    while dx <= 2.0 * W {
        let a = accept_opacity(dx, W);
        let r = reject_opacity(dx, W);
        assert!((0.0..=1.0).contains(&a), "accept {a} at dx={dx}");
        assert!((0.0..=1.0).contains(&r), "reject {r} at dx={dx}");
        dx += 13.0;
    }
}

#[test]
fn feedback_depends_only_on_dx() {
    let vp = Viewport::new(W, 800.0);
    let a = feedback_for(Vec2::new(80.0, 0.0), vp, MAX_ROTATION_DEG);
    let b = feedback_for(Vec2::new(80.0, -450.0), vp, MAX_ROTATION_DEG);
    assert_eq!(a, b);
}

#[test]
fn feedback_uses_configured_max_rotation() {
    let vp = Viewport::new(W, 800.0);
    let fb = feedback_for(Vec2::new(W, 0.0), vp, 25.0);
    assert!(approx(fb.rotation_degrees, 25.0));
    assert!(approx(fb.accept_opacity, 1.0));
}

#[test]
fn interpolate_handles_degenerate_tables() {
    assert_eq!(interpolate_clamped(3.0, &[], &[]), 0.0);
    assert_eq!(interpolate_clamped(3.0, &[1.0], &[7.0]), 7.0);
    // Zero-width segment steps straight to the next output
    assert_eq!(interpolate_clamped(0.5, &[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 5.0, 6.0]), 0.5);
}

#[test]
fn viewport_clamps_to_minimum_extent() {
    let vp = Viewport::new(0.0, -5.0);
    assert_eq!(vp.width(), MIN_VIEWPORT_EXTENT);
    assert_eq!(vp.height(), MIN_VIEWPORT_EXTENT);
    let vp = Viewport::new(f32::NAN, f32::INFINITY);
    assert_eq!(vp.width(), MIN_VIEWPORT_EXTENT);
    assert_eq!(vp.height(), MIN_VIEWPORT_EXTENT);
}

#[test]
fn raw_functions_clamp_degenerate_widths() {
    for w in [0.0, -3.0, f32::NAN] {
        assert_eq!(rotation_degrees(0.0, w), 0.0, "w={w}");
        assert_eq!(accept_opacity(0.0, w), 0.0, "w={w}");
        assert_eq!(reject_opacity(0.0, w), 0.0, "w={w}");
    }
    // Same ranges as a sanitized viewport
    assert!(approx(rotation_degrees(0.25, 0.0), 5.0));
    assert!(approx(accept_opacity(0.25, 0.0), 1.0));
}
