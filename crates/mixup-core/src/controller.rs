//! Per-row drag/snap state machine.
//!
//! A row's offset follows the pointer directly while a gesture is active and
//! eases onto the nearest slot once it is released. Re-grabbing a settling row
//! samples the in-flight offset as the new baseline, so the row never jumps.

use std::time::Duration;

use crate::carousel::{snap_step, snap_target};
use crate::constants::{DRAG_SENSITIVITY, SPACING};
use crate::error::{positive, ConfigError};
use crate::spring::{Spring, SpringConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// World units between snap points.
    pub spacing: f32,
    /// Pixels of pointer travel per world unit.
    pub sensitivity: f32,
    pub spring: SpringConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            spacing: SPACING,
            sensitivity: DRAG_SENSITIVITY,
            spring: SpringConfig::default(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !positive(self.spacing) {
            return Err(ConfigError::Spacing(self.spacing));
        }
        if !positive(self.sensitivity) {
            return Err(ConfigError::Sensitivity(self.sensitivity));
        }
        self.spring.validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// At rest on a snap target.
    Idle,
    /// Pointer captured; `baseline` is the offset sampled when the gesture began.
    Dragging { baseline: f32 },
    /// Released; easing toward the snap target.
    Settling,
}

#[derive(Clone, Debug)]
pub struct SnapController {
    config: ControllerConfig,
    spring: Spring,
    phase: Phase,
}

impl SnapController {
    /// Build a controller at offset 0. Fails on an unusable config.
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            spring: Spring::new(config.spring, 0.0),
            config,
            phase: Phase::Idle,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current drag offset in world units.
    pub fn offset(&self) -> f32 {
        self.spring.position()
    }

    /// Snap target while settling or idle; the live offset while dragging.
    pub fn target(&self) -> f32 {
        self.spring.target()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Slot step the row rests on, once idle.
    pub fn settled_step(&self) -> Option<i32> {
        self.is_settled()
            .then(|| snap_step(self.offset(), self.config.spacing))
    }

    /// Pointer moved; `delta_px` is the cumulative travel since the gesture began.
    pub fn on_drag_update(&mut self, delta_px: f32) {
        let baseline = match self.phase {
            Phase::Dragging { baseline } => baseline,
            Phase::Idle | Phase::Settling => {
                let baseline = self.spring.position();
                self.phase = Phase::Dragging { baseline };
                baseline
            }
        };
        self.spring
            .hold(baseline + delta_px / self.config.sensitivity);
    }

    /// Pointer released with a final cumulative travel of `delta_px`.
    pub fn on_drag_end(&mut self, delta_px: f32) {
        self.on_drag_update(delta_px);
        let target = snap_target(self.spring.position(), self.config.spacing);
        self.settle_toward(target);
    }

    /// Single-callback form for gesture sources that report an "active" flag.
    pub fn on_drag(&mut self, delta_px: f32, active: bool) {
        if active {
            self.on_drag_update(delta_px);
        } else {
            self.on_drag_end(delta_px);
        }
    }

    /// Ease onto `step * spacing` from wherever the row currently is.
    /// Ignored while a gesture owns the row.
    pub fn settle_to(&mut self, step: i32) {
        if matches!(self.phase, Phase::Dragging { .. }) {
            return;
        }
        self.settle_toward(step as f32 * self.config.spacing);
    }

    /// Advance the settle animation. Returns true on the frame the row comes to rest.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.phase != Phase::Settling {
            return false;
        }
        let rested = self.spring.tick(dt);
        if rested {
            self.phase = Phase::Idle;
        }
        rested
    }

    fn settle_toward(&mut self, target: f32) {
        self.spring.set_target(target);
        self.phase = if self.spring.is_at_rest() {
            Phase::Idle
        } else {
            Phase::Settling
        };
    }
}
