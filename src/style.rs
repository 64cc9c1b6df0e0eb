// Pure CSS string builders. Kept free of web-sys so they run in host tests.

use parallax_core::LayerTransform;

/// CSS `transform` for one layer: translate, then tilt, then the edge-masking scale.
pub fn transform_css(t: &LayerTransform, base_scale: f32) -> String {
    format!(
        "translate3d({}px, {}px, 0px) rotateX({}deg) rotateY({}deg) rotateZ({}deg) scale({})",
        fmt3(t.translate_x),
        fmt3(t.translate_y),
        fmt3(t.pitch_deg),
        fmt3(t.yaw_deg),
        fmt3(t.roll_deg),
        fmt3(base_scale)
    )
}

#[inline]
pub fn opacity_css(opacity: f32) -> String {
    fmt3(opacity.clamp(0.0, 1.0))
}

#[inline]
pub fn px_css(px: f32) -> String {
    format!("{}px", fmt3(px))
}

/// Three decimals, without a trailing `-0`. Sub-millipixel jitter from the
/// spring tail then never forces a style write.
pub fn fmt3(v: f32) -> String {
    let v = if v.is_finite() { v } else { 0.0 };
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
