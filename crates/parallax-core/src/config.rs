//! Hero configuration.
//!
//! Every field is optional in the JSON form; missing fields take the defaults
//! from `constants.rs`. [`HeroConfig::normalized`] repairs out-of-range values
//! so that a bad config degrades the effect instead of failing the mount.

use crate::constants::*;
use crate::spring::SpringParams;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid hero config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maximum tilt of the top layer, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TiltMax {
    pub pitch_deg: f32,
    pub yaw_deg: f32,
}

impl Default for TiltMax {
    fn default() -> Self {
        Self {
            pitch_deg: DEFAULT_TILT_PITCH_DEG,
            yaw_deg: DEFAULT_TILT_YAW_DEG,
        }
    }
}

/// Translation range in CSS pixels, from the first moving layer to the top one.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DepthRange {
    pub min: f32,
    pub max: f32,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_DEPTH_MIN_PX,
            max: DEFAULT_DEPTH_MAX_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroConfig {
    /// `None` when not supplied; `layer_count()` resolves it.
    pub layer_count: Option<i32>,
    pub force_motion: bool,
    pub base_scale: f32,
    pub tilt_max: TiltMax,
    pub depth_range_px: DepthRange,
    pub strength_exponent: f32,
    pub roll_max_deg: f32,
    pub spring: SpringParams,
    pub asset_base: String,
    pub sources: Option<Vec<String>>,
    pub perspective_px: f32,
    pub veil_fade_secs: f32,
    pub layer_fade_secs: f32,
    pub layer_stagger_secs: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            layer_count: None,
            force_motion: DEFAULT_FORCE_MOTION,
            base_scale: DEFAULT_BASE_SCALE,
            tilt_max: TiltMax::default(),
            depth_range_px: DepthRange::default(),
            strength_exponent: DEFAULT_STRENGTH_EXPONENT,
            roll_max_deg: DEFAULT_ROLL_MAX_DEG,
            spring: SpringParams::default(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            sources: None,
            perspective_px: DEFAULT_PERSPECTIVE_PX,
            veil_fade_secs: VEIL_FADE_SEC,
            layer_fade_secs: LAYER_FADE_SEC,
            layer_stagger_secs: LAYER_STAGGER_SEC,
        }
    }
}

impl HeroConfig {
    /// Parse a JSON object; blank input yields the defaults. The result is
    /// already normalized.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let parsed: Self = serde_json::from_str(text)?;
        Ok(parsed.normalized())
    }

    /// Repair out-of-range values in place of rejecting them.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();

        if let Some(given) = self.ignored_layer_count() {
            log::warn!(
                "[config] layerCount={} ignored, {} explicit sources given",
                given,
                self.sources.as_ref().map_or(0, Vec::len)
            );
        }
        if let Some(sources) = &self.sources {
            self.layer_count = Some(i32::try_from(sources.len()).unwrap_or(i32::MAX));
        }
        self.layer_count = self.layer_count.map(|n| n.max(0));

        self.base_scale = finite_or(self.base_scale, defaults.base_scale).max(1.0);
        self.tilt_max.pitch_deg = finite_or(self.tilt_max.pitch_deg, defaults.tilt_max.pitch_deg);
        self.tilt_max.yaw_deg = finite_or(self.tilt_max.yaw_deg, defaults.tilt_max.yaw_deg);
        self.roll_max_deg = finite_or(self.roll_max_deg, 0.0);

        let range = &mut self.depth_range_px;
        range.min = finite_or(range.min, defaults.depth_range_px.min);
        range.max = finite_or(range.max, defaults.depth_range_px.max);
        if range.min > range.max {
            // zero-range: every moving layer travels the same distance
            range.min = range.max;
        }

        if !(self.strength_exponent.is_finite() && self.strength_exponent > 0.0) {
            self.strength_exponent = defaults.strength_exponent;
        }
        self.spring = self.spring.sanitized();
        if !(self.perspective_px.is_finite() && self.perspective_px > 0.0) {
            self.perspective_px = defaults.perspective_px;
        }
        self.veil_fade_secs = non_negative_or(self.veil_fade_secs, defaults.veil_fade_secs);
        self.layer_fade_secs = non_negative_or(self.layer_fade_secs, defaults.layer_fade_secs);
        self.layer_stagger_secs =
            non_negative_or(self.layer_stagger_secs, defaults.layer_stagger_secs);
        self
    }

    /// Number of layers, after explicit sources and the default are applied.
    pub fn layer_count(&self) -> usize {
        match &self.sources {
            Some(sources) => sources.len(),
            None => usize::try_from(self.layer_count.unwrap_or(DEFAULT_LAYER_COUNT)).unwrap_or(0),
        }
    }

    /// An explicitly supplied `layerCount` that disagrees with `sources` and
    /// will be overridden by it.
    pub fn ignored_layer_count(&self) -> Option<i32> {
        let given = self.layer_count?;
        let sources = self.sources.as_ref()?;
        (usize::try_from(given).ok() != Some(sources.len())).then_some(given)
    }

    /// Ordered image identifiers, bottom layer first.
    pub fn source_ids(&self) -> Vec<String> {
        match &self.sources {
            Some(sources) => sources.clone(),
            None => (1..=self.layer_count())
                .map(|i| format!("{}{}.{}", self.asset_base, i, DEFAULT_ASSET_EXT))
                .collect(),
        }
    }
}

#[inline]
fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        fallback
    }
}

#[inline]
fn non_negative_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() && v >= 0.0 {
        v
    } else {
        fallback
    }
}
