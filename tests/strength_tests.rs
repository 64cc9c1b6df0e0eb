// Host-side tests for the strength curve and per-layer transforms.

use glam::Vec2;
use parallax_core::*;

fn curve() -> StrengthCurve {
    StrengthCurve::new(DepthRange { min: 24.0, max: 90.0 }, 1.15)
}

#[test]
fn five_layer_strengths_follow_the_curve() {
    let c = curve();
    let expected = [0.0, 37.402, 53.741, 71.409, 90.0];
    for (i, want) in expected.iter().enumerate() {
        let got = c.strength(depth_norm(i + 1, 5));
        assert!((got - want).abs() < 0.01, "layer {}: {got} vs {want}", i + 1);
    }
}

#[test]
fn strength_is_monotonic_and_tops_out_at_max() {
    for exponent in [0.5_f32, 1.0, 1.15, 1.2, 3.0] {
        let c = StrengthCurve::new(DepthRange { min: 10.0, max: 70.0 }, exponent);
        let mut prev = c.strength(0.0);
        for step in 1..=100 {
            let s = c.strength(step as f32 / 100.0);
            assert!(s >= prev, "exponent {exponent} step {step}");
            prev = s;
        }
        assert_eq!(c.strength(1.0), 70.0);
    }
}

#[test]
fn top_layer_lands_exactly_on_max_for_inexact_bounds() {
    let mut misses = Vec::new();
    for lo in 0..=200 {
        for hi in lo..=200 {
            let (min, max) = (lo as f32 * 0.1, hi as f32 * 0.1);
            let c = StrengthCurve::new(DepthRange { min, max }, 1.15);
            if c.strength(1.0) != max {
                misses.push((min, max, c.strength(1.0)));
            }
        }
    }
    assert!(misses.is_empty(), "first miss: {:?}", misses.first());
    let c = StrengthCurve::new(DepthRange { min: 2.1, max: 11.2 }, 1.15);
    assert_eq!(c.strength(1.0), 11.2);
}

#[test]
fn zero_range_gives_flat_strength_above_bottom() {
    let config = HeroConfig {
        depth_range_px: DepthRange { min: 80.0, max: 40.0 },
        ..HeroConfig::default()
    }
    .normalized();
    let c = StrengthCurve::new(config.depth_range_px, config.strength_exponent);
    assert_eq!(c.strength(0.0), 0.0);
    for d in [0.1_f32, 0.5, 1.0] {
        assert_eq!(c.strength(d), 40.0);
    }
}

#[test]
fn bottom_layer_never_moves() {
    let pointers = [
        Vec2::ZERO,
        Vec2::new(0.5, 0.5),
        Vec2::new(-0.5, 0.3),
        Vec2::new(2.0, -3.0),
    ];
    let configs = [
        HeroConfig::default(),
        HeroConfig {
            roll_max_deg: 4.0,
            tilt_max: TiltMax { pitch_deg: 45.0, yaw_deg: 45.0 },
            depth_range_px: DepthRange { min: 100.0, max: 300.0 },
            ..HeroConfig::default()
        },
    ];
    for config in &configs {
        let model = StrengthModel::from_config(config);
        for n in 1..=6 {
            let sources: Vec<String> = (1..=n).map(|i| format!("{i}.png")).collect();
            let layers = build_layers(&sources);
            for p in pointers {
                let t = model.layer_transform(&layers[0], p, true);
                assert!(t.is_identity(), "n={n} p={p:?} t={t:?}");
            }
        }
    }
}

#[test]
fn top_layer_translates_and_tilts_with_pointer() {
    let config = HeroConfig::default();
    let model = StrengthModel::from_config(&config);
    let layers = build_layers(&config.source_ids());
    let top = layers.last().cloned().unwrap();
    let t = model.layer_transform(&top, Vec2::new(0.5, -0.25), true);
    assert!((t.translate_x - 45.0).abs() < 1e-4);
    assert!((t.translate_y + 22.5).abs() < 1e-4);
    assert!((t.pitch_deg - 1.5).abs() < 1e-4); // -(-0.25) * 6
    assert!((t.yaw_deg - 5.0).abs() < 1e-4); // 0.5 * 10
    assert_eq!(t.roll_deg, 0.0);
}

#[test]
fn disabled_motion_collapses_every_transform() {
    let config = HeroConfig::default();
    let model = StrengthModel::from_config(&config);
    let layers = build_layers(&config.source_ids());
    for layer in &layers {
        for p in [Vec2::new(0.5, 0.5), Vec2::new(-0.4, 0.1)] {
            assert!(model.layer_transform(layer, p, false).is_identity());
        }
    }
}

#[test]
fn centered_pointer_gives_zero_translation() {
    let config = HeroConfig::default();
    let model = StrengthModel::from_config(&config);
    for layer in build_layers(&config.source_ids()).iter() {
        let t = model.layer_transform(layer, Vec2::ZERO, true);
        assert_eq!(t.translate_x, 0.0);
        assert_eq!(t.translate_y, 0.0);
    }
}
