// ── Damped spring ──
//
// Smooths a value toward a moving target. Integrated with semi-implicit
// Euler in fixed sub-steps so large frame gaps stay stable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Largest integration step, in seconds.
const MAX_STEP_SECS: f64 = 1.0 / 240.0;

/// Physical parameters of a [`Spring`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may come to rest.
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f64, target: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            target,
            config: SpringConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SpringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// A target within rest distance of a still spring is reached at once.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
        if self.is_at_rest() {
            self.snap();
        }
    }

    /// Jump straight to the target and stop.
    pub fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    /// Advance the simulation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if self.is_at_rest() {
            self.snap();
            return;
        }

        let mass = if self.config.mass > 0.0 {
            self.config.mass
        } else {
            1.0
        };
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            let spring_force = -self.config.stiffness * (self.value - self.target);
            let damping_force = -self.config.damping * self.velocity;
            self.velocity += (spring_force + damping_force) / mass * step;
            self.value += self.velocity * step;
            remaining -= step;
        }

        if self.is_at_rest() {
            self.snap();
        }
    }
}
