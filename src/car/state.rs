//! Car transform

use crate::collision::Aabb;
use crate::math::Vec3;
use crate::world::Scene;

/// Car transform plus the last position known to be collision-free
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarState {
    pub position: Vec3,
    /// Radians in [-PI, PI]; 0 faces +Z
    pub yaw: f32,
    /// Rollback target when a move is blocked on both axes
    pub safe_position: Vec3,
}

impl CarState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            safe_position: position,
        }
    }

    pub fn spawn(scene: &Scene) -> Self {
        Self::new(scene.car_start)
    }

    pub fn heading(&self) -> Vec3 {
        Vec3::heading(self.yaw)
    }

    /// Current world bounds, as used for collision
    pub fn bounds(&self, scene: &Scene) -> Aabb {
        scene.car_bounds(self.position, self.yaw)
    }
}
