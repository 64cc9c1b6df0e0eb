//! Damped-spring smoothing of the pointer target.
//!
//! One [`SpringPair`] is shared by the whole hero; layers derive their
//! transforms from its position instead of carrying physics state of their own.

use crate::constants::*;
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

impl SpringParams {
    /// Replace non-positive or non-finite constants with the defaults. Damping
    /// must stay strictly positive so the spring can never ring forever.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        Self {
            stiffness: pick(self.stiffness, d.stiffness),
            damping: pick(self.damping, d.damping),
            mass: pick(self.mass, d.mass),
        }
    }

    /// `damping / (2 * sqrt(stiffness * mass))`; above 1 the spring never overshoots.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringAxis {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
}

impl SpringAxis {
    /// Advance by `dt_sec` of wall-clock time using semi-implicit Euler.
    ///
    /// Long frames are split into substeps no longer than
    /// `SPRING_MAX_SUBSTEP_SEC` and capped at `SPRING_MAX_FRAME_SEC`, so the
    /// result does not depend on the display refresh rate.
    pub fn step(&mut self, params: &SpringParams, dt_sec: f32) {
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return;
        }
        let total = dt_sec.min(SPRING_MAX_FRAME_SEC);
        let steps = (total / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0);
        let h = total / steps;
        for _ in 0..steps as u32 {
            let force = params.stiffness * (self.target - self.position) - params.damping * self.velocity;
            self.velocity += force / params.mass * h;
            self.position += self.velocity * h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        (self.target - self.position).abs() < SPRING_REST_EPSILON
            && self.velocity.abs() < SPRING_REST_EPSILON
    }
}

/// The x and y integrators, sharing one set of constants.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpringPair {
    pub params: SpringParams,
    pub x: SpringAxis,
    pub y: SpringAxis,
}

impl SpringPair {
    pub fn new(params: SpringParams) -> Self {
        Self {
            params: params.sanitized(),
            x: SpringAxis::default(),
            y: SpringAxis::default(),
        }
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.target = target.x;
        self.y.target = target.y;
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target, self.y.target)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x.position, self.y.position)
    }

    pub fn step(&mut self, dt_sec: f32) {
        self.x.step(&self.params, dt_sec);
        self.y.step(&self.params, dt_sec);
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}
