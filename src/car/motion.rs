//! Per-frame motion resolution
//!
//! Propose, test, commit. Rotation is all-or-nothing at the current
//! position. Translation falls back to sliding along a single world axis,
//! and to the last safe position when neither axis alone is clear.

use crate::config::DriveConfig;
use crate::math::{wrap_pi, Vec3};
use crate::world::Scene;
use super::CarState;

/// Held keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriveInput {
    pub forward: bool,
    pub backward: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub boost: bool,
}

impl DriveInput {
    /// +1 forward, -1 backward, 0 for neither or both
    pub fn throttle(&self) -> f32 {
        let mut fwd = 0.0;
        if self.forward {
            fwd += 1.0;
        }
        if self.backward {
            fwd -= 1.0;
        }
        fwd
    }

    pub fn is_steering(&self) -> bool {
        self.steer_left || self.steer_right
    }

    /// Boost only applies when not braking
    pub fn is_boosting(&self) -> bool {
        self.boost && !self.backward
    }
}

/// How the translation step was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// Nothing proposed, nothing hit
    Idle,
    /// Full candidate committed
    Moved,
    /// Only the X component committed
    SlidX,
    /// Only the Z component committed
    SlidZ,
    /// Neither axis alone was clear; restored the last safe position
    RolledBack,
}

impl MotionOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            MotionOutcome::Idle => "idle",
            MotionOutcome::Moved => "moving",
            MotionOutcome::SlidX => "sliding X",
            MotionOutcome::SlidZ => "sliding Z",
            MotionOutcome::RolledBack => "blocked",
        }
    }

    pub fn is_blocked(&self) -> bool {
        !matches!(self, MotionOutcome::Idle | MotionOutcome::Moved)
    }
}

/// Result of one `drive` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub outcome: MotionOutcome,
    pub rotation_blocked: bool,
}

/// Speed for this frame's input, units per second
pub fn drive_speed(input: &DriveInput, config: &DriveConfig) -> f32 {
    if input.is_boosting() {
        config.car_speed * config.boost_factor
    } else {
        config.car_speed
    }
}

impl CarState {
    /// Resolve one frame: steer first, then move along the resolved heading
    pub fn drive(&mut self, input: &DriveInput, dt: f32, config: &DriveConfig, scene: &Scene) -> FrameReport {
        let rotation_blocked = !self.steer(input, config, scene);
        let outcome = self.translate(input, dt, config, scene);
        FrameReport { outcome, rotation_blocked }
    }

    /// Apply steering if the rotated box stays clear at the current position.
    /// Returns false only when a proposed rotation was rejected.
    pub fn steer(&mut self, input: &DriveInput, config: &DriveConfig, scene: &Scene) -> bool {
        if !input.is_steering() {
            return true;
        }

        let mut proposed = self.yaw;
        if input.steer_left {
            proposed += config.rotation_step;
        }
        if input.steer_right {
            proposed -= config.rotation_step;
        }
        let proposed = wrap_pi(proposed);

        if scene.would_collide_at(self.position, proposed) {
            return false;
        }
        self.yaw = proposed;
        true
    }

    /// Move along the heading, sliding on one axis or rolling back when blocked
    pub fn translate(&mut self, input: &DriveInput, dt: f32, config: &DriveConfig, scene: &Scene) -> MotionOutcome {
        let step = input.throttle() * drive_speed(input, config) * dt;
        let proposed = self.position + self.heading() * step;

        if !scene.would_collide_at(proposed, self.yaw) {
            let outcome = if proposed == self.position {
                MotionOutcome::Idle
            } else {
                MotionOutcome::Moved
            };
            self.position = proposed;
            self.safe_position = proposed;
            return outcome;
        }

        let slide_x = Vec3::new(proposed.x, self.position.y, self.position.z);
        let slide_z = Vec3::new(self.position.x, self.position.y, proposed.z);
        let x_free = !scene.would_collide_at(slide_x, self.yaw);
        let z_free = !scene.would_collide_at(slide_z, self.yaw);

        match (x_free, z_free) {
            (true, false) => {
                self.position.x = slide_x.x;
                self.safe_position = self.position;
                MotionOutcome::SlidX
            }
            (false, true) => {
                self.position.z = slide_z.z;
                self.safe_position = self.position;
                MotionOutcome::SlidZ
            }
            // Both blocked, or both clear with the combined move blocked:
            // no resolution attempted beyond a single pass
            _ => {
                self.position = self.safe_position;
                MotionOutcome::RolledBack
            }
        }
    }
}
