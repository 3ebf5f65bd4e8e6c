//! Critically-damped spring filters

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Critically-damped second-order filter over a scalar signal.
///
/// The filter carries an implicit velocity and advances it with the exact
/// per-step solution of the critically-damped oscillator, so it stays
/// stable and overshoot-free for arbitrary (including large or uneven)
/// tick durations. `damping` scales the response rate; `1.0` is the
/// critically-damped tuning the effect filters ship with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spring {
    omega: f32,
    velocity: f32,
}

impl Spring {
    /// Create a filter from a stiffness constant and a damping multiplier.
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            omega: damping * stiffness.max(0.0).sqrt(),
            velocity: 0.0,
        }
    }

    /// Advance `value` toward `target` over `dt` seconds, returning the
    /// new smoothed value.
    pub fn update(&mut self, value: f32, target: f32, dt: f32) -> f32 {
        if dt <= 0.0 {
            return value;
        }
        let decay = (-self.omega * dt).exp();
        let offset = value - target;
        let temp = (self.velocity + self.omega * offset) * dt;
        self.velocity = (self.velocity - temp * self.omega) * decay;
        target + (offset + temp) * decay
    }

    /// Current implicit velocity of the filter.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Drop any accumulated velocity.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
    }
}

/// Critically-damped second-order filter over a 2D signal.
///
/// Component-wise version of [`Spring`]; the two axes share one set of
/// spring constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spring2 {
    omega: f32,
    velocity: Vec2,
}

impl Spring2 {
    /// Create a filter from a stiffness constant and a damping multiplier.
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            omega: damping * stiffness.max(0.0).sqrt(),
            velocity: Vec2::ZERO,
        }
    }

    /// Advance `value` toward `target` over `dt` seconds, returning the
    /// new smoothed value.
    pub fn update(&mut self, value: Vec2, target: Vec2, dt: f32) -> Vec2 {
        if dt <= 0.0 {
            return value;
        }
        let decay = (-self.omega * dt).exp();
        let offset = value - target;
        let temp = (self.velocity + offset * self.omega) * dt;
        self.velocity = (self.velocity - temp * self.omega) * decay;
        target + (offset + temp) * decay
    }

    /// Drop any accumulated velocity.
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
    }
}
