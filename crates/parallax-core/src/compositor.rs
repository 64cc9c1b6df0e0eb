use crate::layer::Layer;
use crate::strength::{LayerTransform, StrengthModel};
use glam::Vec2;
use smallvec::SmallVec;

/// Reveal timing: the veil fades out once, and each layer fades in with a
/// depth-proportional delay, both measured from the instant readiness flipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeClock {
    pub veil_secs: f32,
    pub layer_secs: f32,
    pub stagger_secs: f32,
    ready_at: Option<f64>,
}

impl FadeClock {
    pub fn new(veil_secs: f32, layer_secs: f32, stagger_secs: f32) -> Self {
        Self {
            veil_secs,
            layer_secs,
            stagger_secs,
            ready_at: None,
        }
    }

    /// Start the reveal. Only the first call has an effect.
    pub fn mark_ready(&mut self, now_sec: f64) {
        if self.ready_at.is_none() {
            self.ready_at = Some(now_sec);
        }
    }

    #[inline]
    pub fn ready_at(&self) -> Option<f64> {
        self.ready_at
    }

    pub fn veil_opacity(&self, now_sec: f64) -> f32 {
        match self.ready_at {
            None => 1.0,
            Some(t0) => 1.0 - ramp((now_sec - t0) as f32, self.veil_secs),
        }
    }

    pub fn layer_opacity(&self, depth_norm: f32, now_sec: f64) -> f32 {
        match self.ready_at {
            None => 0.0,
            Some(t0) => {
                let delay = depth_norm * self.stagger_secs;
                ramp((now_sec - t0) as f32 - delay, self.layer_secs)
            }
        }
    }

    /// Every fade has reached its final value.
    pub fn is_complete(&self, now_sec: f64) -> bool {
        match self.ready_at {
            None => false,
            Some(t0) => {
                let longest = self.veil_secs.max(self.stagger_secs + self.layer_secs);
                (now_sec - t0) as f32 >= longest
            }
        }
    }
}

/// Linear 0..1 progress of `elapsed` over `duration`; a zero duration is instant.
#[inline]
fn ramp(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return if elapsed >= 0.0 { 1.0 } else { 0.0 };
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// How one layer should be painted this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPaint {
    pub index: usize,
    pub z_order: i32,
    pub transform: LayerTransform,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    /// Bottom to top, ascending `z_order`.
    pub layers: SmallVec<[LayerPaint; 8]>,
    pub veil_opacity: f32,
    pub motion_enabled: bool,
}

/// Compose one frame from the smoothed pointer and the reveal clock.
pub fn plan_frame(
    layers: &[Layer],
    model: &StrengthModel,
    smoothed: Vec2,
    motion_enabled: bool,
    fade: &FadeClock,
    now_sec: f64,
) -> FramePlan {
    let mut paints: SmallVec<[LayerPaint; 8]> = layers
        .iter()
        .map(|layer| LayerPaint {
            index: layer.index,
            z_order: layer.z_order,
            transform: model.layer_transform(layer, smoothed, motion_enabled),
            opacity: fade.layer_opacity(layer.depth_norm, now_sec),
        })
        .collect();
    paints.sort_by_key(|p| p.z_order);
    FramePlan {
        layers: paints,
        veil_opacity: fade.veil_opacity(now_sec),
        motion_enabled,
    }
}
