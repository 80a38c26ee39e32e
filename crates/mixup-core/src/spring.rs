//! Damped spring used to ease a row toward its snap target.
//!
//! The force law is `a = (-tension * (x - target) - friction * v) / mass`,
//! integrated with semi-implicit Euler in fixed 1 ms sub-steps so the motion
//! does not depend on the frame rate. The state is kept as a displacement from
//! the target, which keeps full float precision near rest even when the row
//! has been dragged far from the origin.

use std::time::Duration;

use crate::constants::{SETTLE_PRECISION, SPRING_FRICTION, SPRING_MASS, SPRING_TENSION};
use crate::error::{positive, ConfigError};

/// Fixed integration step in seconds.
const STEP_SECS: f32 = 0.001;

/// Longest frame delta integrated in one call; longer stalls are clamped.
const MAX_FRAME_SECS: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    /// Displacement below which the spring is at rest. The velocity threshold
    /// is a tenth of this.
    pub precision: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: SPRING_MASS,
            tension: SPRING_TENSION,
            friction: SPRING_FRICTION,
            precision: SETTLE_PRECISION,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.mass) {
            return Err(ConfigError::SpringMass(self.mass));
        }
        if !positive(self.tension) {
            return Err(ConfigError::SpringTension(self.tension));
        }
        if !positive(self.friction) {
            return Err(ConfigError::SpringFriction(self.friction));
        }
        if !positive(self.precision) {
            return Err(ConfigError::SettlePrecision(self.precision));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    displacement: f32,
    velocity: f32,
    target: f32,
    at_rest: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, position: f32) -> Self {
        Self {
            config,
            displacement: 0.0,
            velocity: 0.0,
            target: position,
            at_rest: true,
        }
    }

    pub fn position(&self) -> f32 {
        self.target + self.displacement
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Jump to `position` and stop: used while a drag drives the value directly.
    pub fn hold(&mut self, position: f32) {
        self.displacement = 0.0;
        self.velocity = 0.0;
        self.target = position;
        self.at_rest = true;
    }

    /// Start easing from the current position toward `target`.
    pub fn set_target(&mut self, target: f32) {
        self.displacement = self.position() - target;
        self.target = target;
        self.at_rest = false;
        self.check_rest();
    }

    /// Advance by `dt`. Returns true on the tick the spring comes to rest.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.at_rest {
            return false;
        }
        let mut remaining = dt.as_secs_f32().min(MAX_FRAME_SECS);
        while remaining > 0.0 && !self.at_rest {
            let h = remaining.min(STEP_SECS);
            remaining -= h;
            let spring = -self.config.tension * self.displacement;
            let damper = -self.config.friction * self.velocity;
            let accel = (spring + damper) / self.config.mass;
            self.velocity += accel * h;
            self.displacement += self.velocity * h;
            self.check_rest();
        }
        self.at_rest
    }

    fn check_rest(&mut self) {
        let displaced = self.displacement.abs() >= self.config.precision;
        let moving = self.velocity.abs() >= self.config.precision * 0.1;
        if !displaced && !moving {
            self.displacement = 0.0;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}
