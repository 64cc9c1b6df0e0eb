use crate::config::{DepthRange, HeroConfig, TiltMax};
use crate::layer::Layer;
use glam::Vec2;

/// Maps a layer's normalized depth to its maximum translation in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrengthCurve {
    pub min_px: f32,
    pub max_px: f32,
    pub exponent: f32,
}

impl StrengthCurve {
    pub fn new(range: DepthRange, exponent: f32) -> Self {
        Self {
            min_px: range.min.min(range.max),
            max_px: range.max,
            exponent,
        }
    }

    /// `0` for the static bottom layer, otherwise `min + d^p * (max - min)`.
    ///
    /// Evaluated from the `max` end so that `d = 1` lands on `max` exactly.
    #[inline]
    pub fn strength(&self, depth_norm: f32) -> f32 {
        if depth_norm <= 0.0 {
            return 0.0;
        }
        let d = depth_norm.min(1.0);
        self.max_px - (1.0 - d.powf(self.exponent)) * (self.max_px - self.min_px)
    }
}

/// Per-layer transform, in CSS pixels and degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub pitch_deg: f32,
    pub yaw_deg: f32,
    pub roll_deg: f32,
}

impl LayerTransform {
    pub const IDENTITY: Self = Self {
        translate_x: 0.0,
        translate_y: 0.0,
        pitch_deg: 0.0,
        yaw_deg: 0.0,
        roll_deg: 0.0,
    };

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// Everything needed to turn the smoothed pointer into per-layer transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrengthModel {
    pub curve: StrengthCurve,
    pub tilt: TiltMax,
    pub roll_max_deg: f32,
}

impl StrengthModel {
    pub fn from_config(config: &HeroConfig) -> Self {
        Self {
            curve: StrengthCurve::new(config.depth_range_px, config.strength_exponent),
            tilt: config.tilt_max,
            roll_max_deg: config.roll_max_deg,
        }
    }

    /// Transform of `layer` for the smoothed pointer `smoothed`. Collapses to
    /// the identity when motion is disabled or the layer is the static bottom.
    pub fn layer_transform(&self, layer: &Layer, smoothed: Vec2, motion_enabled: bool) -> LayerTransform {
        if !motion_enabled || layer.is_static() {
            return LayerTransform::IDENTITY;
        }
        let d = layer.depth_norm;
        let s = self.curve.strength(d);
        LayerTransform {
            translate_x: smoothed.x * s,
            translate_y: smoothed.y * s,
            pitch_deg: -smoothed.y * self.tilt.pitch_deg * d,
            yaw_deg: smoothed.x * self.tilt.yaw_deg * d,
            roll_deg: smoothed.x * self.roll_max_deg * d,
        }
    }
}
