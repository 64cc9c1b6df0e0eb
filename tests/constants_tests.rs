// Host-side tests for tuning constants and their relationships.
// The front-end crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use parallax_core::constants::*;
use parallax_core::SpringParams;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn spring_constants_are_positive_and_damped() {
    assert!(SPRING_STIFFNESS > 0.0);
    assert!(SPRING_DAMPING > 0.0);
    assert!(SPRING_MASS > 0.0);
    // Default tuning is overdamped: the hero settles without overshoot.
    assert!(SpringParams::default().damping_ratio() > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn substep_is_small_enough_for_the_default_spring() {
    // Semi-implicit Euler stays stable while h * c/m < 2 and h * omega < 2.
    let h = SPRING_MAX_SUBSTEP_SEC;
    assert!(h * SPRING_DAMPING / SPRING_MASS < 2.0);
    assert!(h * (SPRING_STIFFNESS / SPRING_MASS).sqrt() < 2.0);
    assert!(SPRING_MAX_FRAME_SEC > SPRING_MAX_SUBSTEP_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_defaults_are_well_formed() {
    assert!(DEFAULT_BASE_SCALE >= 1.0);
    assert!(DEFAULT_DEPTH_MIN_PX <= DEFAULT_DEPTH_MAX_PX);
    assert!(DEFAULT_STRENGTH_EXPONENT > 1.0);
    assert!(DEFAULT_TILT_PITCH_DEG > 0.0 && DEFAULT_TILT_YAW_DEG > 0.0);
    assert!(DEFAULT_PERSPECTIVE_PX > 0.0);
    assert!(DEFAULT_LAYER_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_timings_are_short() {
    assert!(VEIL_FADE_SEC > 0.0 && VEIL_FADE_SEC < 1.0);
    assert!(LAYER_FADE_SEC > 0.0 && LAYER_FADE_SEC < 1.0);
    assert!(LAYER_STAGGER_SEC >= 0.0 && LAYER_STAGGER_SEC < LAYER_FADE_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_paints_above_images_decor_and_veil() {
    assert!(STACK_Z_INDEX < DECOR_Z_INDEX);
    assert!(DECOR_Z_INDEX < VEIL_Z_INDEX);
    assert!(VEIL_Z_INDEX < OVERLAY_Z_INDEX);
    assert!(REDUCED_MOTION_QUERY.contains("prefers-reduced-motion"));
    assert!(HOST_ATTRIBUTE.starts_with("data-"));
}
