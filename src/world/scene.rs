//! Scene description: local boxes, car spawn, and building placements
//!
//! Pure data plus the collision query. Drawing lives in `render`.

use serde::{Deserialize, Serialize};
use crate::collision::{first_overlap, Aabb};
use crate::math::Vec3;

/// Car box in model units (car is drawn at scale 1)
pub const CAR_LOCAL_BOX: Aabb = Aabb::new(Vec3::new(-0.9, 0.0, -1.9), Vec3::new(0.9, 1.5, 1.9));

/// Building box in authoring units, before per-building scale
pub const BUILDING_LOCAL_BOX: Aabb = Aabb::new(Vec3::new(-10.0, 0.0, -8.0), Vec3::new(10.0, 10.0, 8.0));

/// A static obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Drawable name, resolved against loaded textures at draw time
    #[serde(default = "default_mesh")]
    pub mesh: String,
    pub position: Vec3,
    /// Non-uniform scale applied to the building box
    pub scale: Vec3,
    /// Yaw in radians. Visual only.
    #[serde(default)]
    pub rotation: f32,
}

fn default_mesh() -> String {
    "building".to_string()
}

impl Building {
    pub fn new(position: Vec3, scale: Vec3, rotation: f32) -> Self {
        Self {
            mesh: default_mesh(),
            position,
            scale,
            rotation,
        }
    }

    /// World-space bounds from translation and scale only
    pub fn world_bounds(&self, local: &Aabb) -> Aabb {
        local.scaled_translated(self.position, self.scale)
    }
}

/// The whole static scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default = "default_car_box")]
    pub car_box: Aabb,
    #[serde(default = "default_building_box")]
    pub building_box: Aabb,
    #[serde(default)]
    pub car_start: Vec3,
    #[serde(default)]
    pub buildings: Vec<Building>,
}

fn default_car_box() -> Aabb {
    CAR_LOCAL_BOX
}

fn default_building_box() -> Aabb {
    BUILDING_LOCAL_BOX
}

impl Scene {
    pub fn new() -> Self {
        Self {
            car_box: CAR_LOCAL_BOX,
            building_box: BUILDING_LOCAL_BOX,
            car_start: Vec3::ZERO,
            buildings: Vec::new(),
        }
    }

    /// Add a building and return its index
    pub fn add_building(&mut self, building: Building) -> usize {
        self.buildings.push(building);
        self.buildings.len() - 1
    }

    /// World bounds of every building, in placement order
    pub fn building_bounds(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.buildings
            .iter()
            .map(move |b| b.world_bounds(&self.building_box))
    }

    /// Car bounds at a proposed transform
    pub fn car_bounds(&self, position: Vec3, yaw: f32) -> Aabb {
        self.car_box.rotated_y_translated(position, yaw)
    }

    /// Which building the car would hit at this transform
    pub fn blocking_building(&self, position: Vec3, yaw: f32) -> Option<usize> {
        let car = self.car_bounds(position, yaw);
        first_overlap(&car, self.building_bounds())
    }

    pub fn would_collide_at(&self, position: Vec3, yaw: f32) -> bool {
        self.blocking_building(position, yaw).is_some()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in scene used when no scene file is present: three buildings around the spawn
pub fn create_default_scene() -> Scene {
    let mut scene = Scene::new();

    scene.add_building(Building::new(
        Vec3::new(0.0, 0.0, -5.0),
        Vec3::splat(0.04),
        180.0_f32.to_radians(),
    ));
    scene.add_building(Building::new(
        Vec3::new(8.0, 0.0, -12.0),
        Vec3::splat(0.05),
        0.0,
    ));
    scene.add_building(Building::new(
        Vec3::new(-6.0, 0.0, 2.0),
        Vec3::splat(0.035),
        0.0,
    ));

    scene
}
