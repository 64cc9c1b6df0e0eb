// Host-side tests for the damped-spring smoother.

use glam::Vec2;
use parallax_core::*;

fn run(pair: &mut SpringPair, seconds: f32, hz: f32) {
    let dt = 1.0 / hz;
    let frames = (seconds * hz).round() as u32;
    for _ in 0..frames {
        pair.step(dt);
    }
}

#[test]
fn converges_to_target() {
    let mut pair = SpringPair::new(SpringParams::default());
    pair.set_target(Vec2::new(0.4, -0.3));
    run(&mut pair, 2.0, 60.0);
    let p = pair.position();
    assert!((p.x - 0.4).abs() < 1e-3, "x={}", p.x);
    assert!((p.y + 0.3).abs() < 1e-3, "y={}", p.y);
}

#[test]
fn recenters_after_pointer_leaves() {
    let mut pair = SpringPair::new(SpringParams::default());
    pair.set_target(Vec2::new(0.5, 0.5));
    run(&mut pair, 0.3, 60.0);
    assert!(pair.position().length() > 0.1);

    pair.set_target(Vec2::ZERO);
    run(&mut pair, 2.0, 60.0);
    assert!(pair.position().length() < 1e-3);
    assert!(pair.is_at_rest());
}

#[test]
fn result_does_not_depend_on_frame_rate() {
    let mut slow = SpringPair::new(SpringParams::default());
    let mut fast = SpringPair::new(SpringParams::default());
    slow.set_target(Vec2::new(0.5, 0.0));
    fast.set_target(Vec2::new(0.5, 0.0));
    run(&mut slow, 0.1, 30.0);
    run(&mut fast, 0.1, 240.0);
    let diff = (slow.position().x - fast.position().x).abs();
    assert!(diff < 0.01, "30Hz={} 240Hz={}", slow.position().x, fast.position().x);
}

#[test]
fn long_hitch_stays_finite_and_bounded() {
    let mut pair = SpringPair::new(SpringParams::default());
    pair.set_target(Vec2::new(0.5, -0.5));
    pair.step(5.0);
    let p = pair.position();
    assert!(p.x.is_finite() && p.y.is_finite());
    assert!(p.x.abs() <= 0.5 + 1e-3 && p.y.abs() <= 0.5 + 1e-3);
}

#[test]
fn non_positive_dt_is_ignored() {
    let mut pair = SpringPair::new(SpringParams::default());
    pair.set_target(Vec2::new(0.5, 0.5));
    pair.step(0.0);
    pair.step(-1.0);
    pair.step(f32::NAN);
    assert_eq!(pair.position(), Vec2::ZERO);
}

#[test]
fn underdamped_spring_still_settles() {
    let params = SpringParams {
        stiffness: 300.0,
        damping: 2.0,
        mass: 1.0,
    };
    assert!(params.damping_ratio() < 1.0);
    let mut pair = SpringPair::new(params);
    pair.set_target(Vec2::new(0.5, 0.0));
    let mut peak = 0.0_f32;
    for _ in 0..600 {
        pair.step(1.0 / 60.0);
        peak = peak.max(pair.position().x);
    }
    assert!(peak > 0.5, "expected overshoot, peak={peak}");
    assert!((pair.position().x - 0.5).abs() < 1e-2);
}

#[test]
fn invalid_constants_fall_back_to_defaults() {
    let params = SpringParams {
        stiffness: -1.0,
        damping: 0.0,
        mass: f32::INFINITY,
    }
    .sanitized();
    assert_eq!(params, SpringParams::default());
}
