// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;
use swipe_core::{
    ACCEPT_THRESHOLD, DEFAULT_VIEWPORT_WIDTH, EXIT_DURATION_MS, LABEL_SPAN_FRACTION,
    MAX_ROTATION_DEG, ROTATION_SPAN_FRACTION, SPRING_DAMPING, SPRING_MASS, SPRING_STIFFNESS,
};

#[test]
fn element_ids_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for id in ALL_ELEMENT_IDS {
        assert!(!id.is_empty());
        assert!(!id.contains(' '), "id with whitespace: {id}");
        assert!(seen.insert(*id), "duplicate element id: {id}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_clamp_covers_exit_animation() {
    assert!(MAX_FRAME_DT_SEC > 0.0);
    // A single clamped frame must not skip the whole exit animation
    assert!(MAX_FRAME_DT_SEC * 1000.0 < EXIT_DURATION_MS as f32);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_have_logical_relationships() {
    assert!(ACCEPT_THRESHOLD > 0.0);
    assert!(MAX_ROTATION_DEG > 0.0);

    // Labels saturate before the card reaches full tilt
    assert!(LABEL_SPAN_FRACTION < ROTATION_SPAN_FRACTION);

    // On a typical phone the commit threshold sits past the label ramp
    assert!(ACCEPT_THRESHOLD > DEFAULT_VIEWPORT_WIDTH * LABEL_SPAN_FRACTION);

    // Snap-back spring is underdamped but not oscillatory for long
    let zeta = SPRING_DAMPING / (2.0 * (SPRING_STIFFNESS * SPRING_MASS).sqrt());
    assert!(zeta > 0.5 && zeta < 1.0, "damping ratio {zeta}");
}
