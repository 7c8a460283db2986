// Host-side tests for gesture tracking.

use glam::Vec2;
use swipe_core::*;

#[test]
fn start_resets_offset() {
    let mut g = GestureTracker::new();
    assert!(g.start());
    assert!(g.is_active());
    assert_eq!(g.offset(), Vec2::ZERO);
}

#[test]
fn moves_are_absolute_not_incremental() {
    let mut g = GestureTracker::new();
    g.start();
    g.update(10.0, 5.0);
    g.update(30.0, -2.0);
    assert_eq!(g.offset(), Vec2::new(30.0, -2.0));
}

#[test]
fn end_returns_release_offset_and_resets() {
    let mut g = GestureTracker::new();
    g.start();
    g.update(80.0, 0.0);
    assert_eq!(g.end(150.0, 4.0), Some(Vec2::new(150.0, 4.0)));
    assert!(!g.is_active());
    assert_eq!(g.offset(), Vec2::ZERO);
}

#[test]
fn second_start_is_ignored() {
    let mut g = GestureTracker::new();
    g.start();
    g.update(25.0, 0.0);
    assert!(!g.start());
    assert_eq!(g.offset(), Vec2::new(25.0, 0.0));
}

#[test]
fn samples_without_gesture_are_ignored() {
    let mut g = GestureTracker::new();
    assert_eq!(g.update(10.0, 10.0), None);
    assert_eq!(g.end(10.0, 10.0), None);
    assert_eq!(g.offset(), Vec2::ZERO);
}

#[test]
fn non_finite_samples_collapse_to_zero() {
    let mut g = GestureTracker::new();
    g.start();
    assert_eq!(g.update(f32::NAN, 3.0), Some(Vec2::new(0.0, 3.0)));
    assert_eq!(g.end(f32::INFINITY, f32::NEG_INFINITY), Some(Vec2::ZERO));
}
