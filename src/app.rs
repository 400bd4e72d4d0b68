//! Demo state
//!
//! Everything the frame loop mutates lives here. The scene is fixed after
//! construction; only the car and the camera change from frame to frame.

use crate::camera::ChaseCamera;
use crate::car::{CarState, DriveInput, FrameReport, MotionOutcome};
use crate::config::Config;
use crate::world::Scene;

pub struct DemoState {
    scene: Scene,
    pub car: CarState,
    pub camera: ChaseCamera,
    pub config: Config,
    /// Draw collision boxes
    pub show_bounds: bool,
    /// Result of the most recent frame, for the HUD
    pub last_report: FrameReport,
}

impl DemoState {
    pub fn new(scene: Scene, config: Config) -> Self {
        Self {
            car: CarState::spawn(&scene),
            camera: ChaseCamera::new(&config.camera),
            scene,
            config,
            show_bounds: false,
            last_report: FrameReport {
                outcome: MotionOutcome::Idle,
                rotation_blocked: false,
            },
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Advance the car by one frame
    pub fn update(&mut self, input: &DriveInput, dt: f32) -> FrameReport {
        let report = self.car.drive(input, dt, &self.config.drive, &self.scene);
        self.last_report = report;
        report
    }

    /// Mouse look and zoom for this frame
    pub fn update_camera(&mut self, mouse_delta: (f32, f32), scroll: f32) {
        self.camera.look(mouse_delta.0, mouse_delta.1, &self.config.camera);
        if scroll != 0.0 {
            self.camera.zoom(scroll, &self.config.camera);
        }
    }

    pub fn toggle_bounds(&mut self) {
        self.show_bounds = !self.show_bounds;
    }
}
