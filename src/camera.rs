//! Chase camera
//!
//! Sits above and behind the car along its heading. Mouse motion adds a
//! look offset on top of the chase direction; scroll zooms via field of view.

use macroquad::prelude::{vec3, Camera3D};
use crate::car::CarState;
use crate::config::CameraConfig;
use crate::math::Vec3;

pub struct ChaseCamera {
    /// Degrees added to the car's heading
    pub look_yaw: f32,
    /// Degrees added to the resting pitch
    pub look_pitch: f32,
    /// Vertical field of view, degrees
    pub fov: f32,
}

impl ChaseCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            look_yaw: 0.0,
            look_pitch: 0.0,
            fov: config.fov_deg.clamp(config.min_fov_deg, config.max_fov_deg),
        }
    }

    /// Mouse motion in pixels; moving the mouse up looks up
    pub fn look(&mut self, dx: f32, dy: f32, config: &CameraConfig) {
        self.look_yaw += dx * config.mouse_sensitivity;
        self.look_pitch -= dy * config.mouse_sensitivity;

        let total = (config.pitch_deg + self.look_pitch).clamp(-config.max_look_deg, config.max_look_deg);
        self.look_pitch = total - config.pitch_deg;
    }

    /// Scroll up narrows the field of view
    pub fn zoom(&mut self, scroll: f32, config: &CameraConfig) {
        self.fov = (self.fov - scroll).clamp(config.min_fov_deg, config.max_fov_deg);
    }

    pub fn pitch(&self, config: &CameraConfig) -> f32 {
        config.pitch_deg + self.look_pitch
    }

    pub fn eye(&self, car: &CarState, config: &CameraConfig) -> Vec3 {
        car.position + Vec3::new(0.0, config.height, 0.0) - car.heading() * config.distance
    }

    /// Unit view direction
    pub fn forward(&self, car: &CarState, config: &CameraConfig) -> Vec3 {
        let yaw = car.yaw + self.look_yaw.to_radians();
        let pitch = self.pitch(config).to_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            pitch.sin(),
            yaw.cos() * pitch.cos(),
        )
    }

    pub fn to_camera3d(&self, car: &CarState, config: &CameraConfig) -> Camera3D {
        let eye = self.eye(car, config);
        let target = eye + self.forward(car, config);
        Camera3D {
            position: eye.into(),
            target: target.into(),
            up: vec3(0.0, 1.0, 0.0),
            fovy: self.fov.to_radians(),
            ..Default::default()
        }
    }
}
