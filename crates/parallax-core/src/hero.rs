//! The parallax hero engine, free of any DOM types.
//!
//! The web front-end feeds it pointer events, asset settle notifications and
//! frame timestamps; it answers each frame with a [`FramePlan`]. Per frame the
//! order is fixed: commit at most one pointer sample, integrate the springs
//! once, then evaluate the per-layer transforms.

use crate::compositor::{plan_frame, FadeClock, FramePlan};
use crate::config::HeroConfig;
use crate::layer::{build_layers, Layer, LayerStack};
use crate::motion::MotionPolicy;
use crate::pointer::{PointerCoalescer, SurfaceRect};
use crate::readiness::{LoadOutcome, ReadinessGate};
use crate::spring::SpringPair;
use crate::strength::StrengthModel;
use glam::Vec2;

pub struct ParallaxHero {
    config: HeroConfig,
    layers: LayerStack,
    model: StrengthModel,
    motion: MotionPolicy,
    pointer: PointerCoalescer,
    springs: SpringPair,
    gate: ReadinessGate,
    fade: FadeClock,
    last_frame_sec: Option<f64>,
    mounted: bool,
}

impl ParallaxHero {
    pub fn new(config: HeroConfig, prefers_reduced: bool) -> Self {
        let config = config.normalized();
        let layers = build_layers(&config.source_ids());
        let motion = MotionPolicy::new(config.force_motion, prefers_reduced);
        log::info!(
            "[hero] layers={} motion={} force={} reduced={}",
            layers.len(),
            motion.enabled(),
            motion.force_motion,
            motion.prefers_reduced
        );
        Self {
            model: StrengthModel::from_config(&config),
            springs: SpringPair::new(config.spring),
            gate: ReadinessGate::new(layers.len()),
            fade: FadeClock::new(
                config.veil_fade_secs,
                config.layer_fade_secs,
                config.layer_stagger_secs,
            ),
            pointer: PointerCoalescer::default(),
            last_frame_sec: None,
            mounted: true,
            layers,
            motion,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[inline]
    pub fn motion(&self) -> MotionPolicy {
        self.motion
    }

    #[inline]
    pub fn motion_enabled(&self) -> bool {
        self.mounted && self.motion.enabled()
    }

    #[inline]
    pub fn readiness(&self) -> &ReadinessGate {
        &self.gate
    }

    #[inline]
    pub fn springs(&self) -> &SpringPair {
        &self.springs
    }

    #[inline]
    pub fn fade(&self) -> &FadeClock {
        &self.fade
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64) {
        if self.motion_enabled() {
            self.pointer.push_move(client_x, client_y);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        if self.mounted {
            self.pointer.leave();
        }
    }

    /// Host reduced-motion preference changed. Returns `true` when motion
    /// flipped, so the caller can attach or detach its pointer listeners.
    pub fn set_prefers_reduced(&mut self, prefers_reduced: bool) -> bool {
        if !self.mounted {
            return false;
        }
        let flipped = self.motion.set_prefers_reduced(prefers_reduced);
        if flipped {
            log::info!("[motion] enabled={}", self.motion.enabled());
            if !self.motion.enabled() {
                self.pointer.clear();
                self.springs.set_target(Vec2::ZERO);
            }
        }
        flipped
    }

    /// One image load finished, successfully or not. Returns `true` on the
    /// settle that made the hero ready.
    pub fn on_asset_settled(&mut self, outcome: LoadOutcome) -> bool {
        if !self.mounted {
            return false;
        }
        self.gate.settle(outcome)
    }

    /// Advance to `now_sec` (seconds on any monotonic clock) and plan the frame.
    /// `rect` is the surface rectangle sampled at this frame boundary.
    pub fn frame(&mut self, now_sec: f64, rect: &SurfaceRect) -> Option<FramePlan> {
        if !self.mounted {
            return None;
        }
        let dt = self
            .last_frame_sec
            .map(|prev| (now_sec - prev).max(0.0) as f32)
            .unwrap_or(0.0);
        self.last_frame_sec = Some(now_sec);

        if self.motion.enabled() {
            if let Some(p) = self.pointer.take(rect) {
                self.springs.set_target(p.as_vec2());
            }
        } else {
            self.pointer.clear();
            self.springs.set_target(Vec2::ZERO);
        }
        self.springs.step(dt);

        if self.gate.is_ready() {
            self.fade.mark_ready(now_sec);
        }

        Some(plan_frame(
            &self.layers,
            &self.model,
            self.springs.position(),
            self.motion.enabled(),
            &self.fade,
            now_sec,
        ))
    }

    /// Freeze the instance: later pointer, asset and frame calls are no-ops.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.gate.teardown();
        self.pointer.clear();
        log::info!("[hero] torn down");
    }
}
