//! Axis-aligned bounding boxes

use serde::{Deserialize, Serialize};
use crate::math::Vec3;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The 8 corners, ordered by (x, y, z) picking min/max bits
    pub fn corners(&self) -> [Vec3; 8] {
        let (mn, mx) = (self.min, self.max);
        [
            Vec3::new(mn.x, mn.y, mn.z),
            Vec3::new(mn.x, mn.y, mx.z),
            Vec3::new(mn.x, mx.y, mn.z),
            Vec3::new(mn.x, mx.y, mx.z),
            Vec3::new(mx.x, mn.y, mn.z),
            Vec3::new(mx.x, mn.y, mx.z),
            Vec3::new(mx.x, mx.y, mn.z),
            Vec3::new(mx.x, mx.y, mx.z),
        ]
    }

    /// Tightest box around a set of points
    pub fn from_points(points: &[Vec3]) -> Self {
        let mut bounds = Aabb::new(Vec3::splat(f32::MAX), Vec3::splat(f32::MIN));
        for p in points {
            bounds.expand(*p);
        }
        bounds
    }

    /// Expand bounds to include a point
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// World box for a local box under non-uniform scale then translation.
    /// Rotation is deliberately not applied: obstacles collide unrotated.
    pub fn scaled_translated(&self, position: Vec3, scale: Vec3) -> Aabb {
        let corners = self.corners().map(|c| c.mul_elem(scale));
        let scaled = Aabb::from_points(&corners);
        Aabb::new(scaled.min + position, scaled.max + position)
    }

    /// World box around this local box rotated about +Y by `yaw`, then translated.
    /// Over-approximates the oriented box at headings off the axes.
    pub fn rotated_y_translated(&self, position: Vec3, yaw: f32) -> Aabb {
        let corners = self.corners().map(|c| c.rotate_y(yaw) + position);
        Aabb::from_points(&corners)
    }

    /// Intervals intersect on all three axes. Touching faces count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        if self.max.x < other.min.x || self.min.x > other.max.x {
            return false;
        }
        if self.max.y < other.min.y || self.min.y > other.max.y {
            return false;
        }
        if self.max.z < other.min.z || self.min.z > other.max.z {
            return false;
        }
        true
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).len() < EPS
    }

    fn building_box() -> Aabb {
        Aabb::new(Vec3::new(-10.0, 0.0, -8.0), Vec3::new(10.0, 10.0, 8.0))
    }

    #[test]
    fn test_identity_transform_reproduces_local_box() {
        let local = Aabb::new(Vec3::new(-1.0, 0.5, -3.0), Vec3::new(2.0, 4.0, 1.0));
        let world = local.scaled_translated(Vec3::ZERO, Vec3::ONE);
        assert_eq!(world, local);
    }

    #[test]
    fn test_non_uniform_scale_keeps_min_below_max() {
        let local = building_box();
        let scales = [
            Vec3::new(0.04, 0.04, 0.04),
            Vec3::new(2.0, 0.1, 0.5),
            Vec3::new(0.0, 1.0, 3.0),
            Vec3::new(7.5, 0.0, 0.0),
        ];
        for scale in scales {
            let world = local.scaled_translated(Vec3::new(3.0, -1.0, 2.0), scale);
            assert!(world.min.x <= world.max.x);
            assert!(world.min.y <= world.max.y);
            assert!(world.min.z <= world.max.z);
        }
    }

    #[test]
    fn test_negative_scale_is_still_bounded() {
        let local = Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        let world = local.scaled_translated(Vec3::ZERO, Vec3::new(-1.0, 1.0, -2.0));
        assert!(close(world.min, Vec3::new(-1.0, 0.0, -6.0)));
        assert!(close(world.max, Vec3::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_scene_building_world_box() {
        let world = building_box().scaled_translated(Vec3::new(0.0, 0.0, -5.0), Vec3::splat(0.04));
        assert!(close(world.min, Vec3::new(-0.4, 0.0, -5.32)));
        assert!(close(world.max, Vec3::new(0.4, 0.4, -4.68)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let boxes = [
            Aabb::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0)),
            Aabb::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(2.0, 2.0, 2.0)),
            Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0)),
            Aabb::new(Vec3::new(3.0, -1.0, 0.0), Vec3::new(4.0, 5.0, 0.5)),
            Aabb::new(Vec3::new(-5.0, -5.0, -5.0), Vec3::new(5.0, 5.0, 5.0)),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn test_gap_on_one_axis_never_overlaps() {
        let a = Aabb::new(Vec3::new(-1.0, -100.0, -100.0), Vec3::new(1.0, 100.0, 100.0));
        let gap = 0.01;
        let on_x = Aabb::new(Vec3::new(1.0 + gap, -1.0, -1.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(!a.overlaps(&on_x));

        let b = Aabb::new(Vec3::new(-100.0, -1.0, -100.0), Vec3::new(100.0, 1.0, 100.0));
        let on_y = Aabb::new(Vec3::new(-1.0, -3.0, -1.0), Vec3::new(1.0, -1.0 - gap, 1.0));
        assert!(!b.overlaps(&on_y));

        let c = Aabb::new(Vec3::new(-100.0, -100.0, -1.0), Vec3::new(100.0, 100.0, 1.0));
        let on_z = Aabb::new(Vec3::new(-1.0, -1.0, 1.0 + gap), Vec3::new(1.0, 1.0, 2.0));
        assert!(!c.overlaps(&on_z));
    }

    #[test]
    fn test_touching_boxes_overlap() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_rotation_never_shrinks_square_footprint() {
        let local = Aabb::new(Vec3::new(-1.2, -0.75, -1.2), Vec3::new(1.2, 0.75, 1.2));
        let mut yaw = -std::f32::consts::PI;
        while yaw <= std::f32::consts::PI {
            let r = local.rotated_y_translated(Vec3::ZERO, yaw);
            assert!(r.min.x <= local.min.x + EPS && r.max.x >= local.max.x - EPS);
            assert!(r.min.y <= local.min.y + EPS && r.max.y >= local.max.y - EPS);
            assert!(r.min.z <= local.min.z + EPS && r.max.z >= local.max.z - EPS);
            yaw += 0.05;
        }
    }

    #[test]
    fn test_rotated_long_box_keeps_short_axis_bound() {
        // A 0.9 x 1.9 footprint swaps extents at a quarter turn, so each
        // rotated axis is only guaranteed to cover the shorter half extent.
        let local = Aabb::new(Vec3::new(-0.9, 0.0, -1.9), Vec3::new(0.9, 1.5, 1.9));
        let mut yaw = -std::f32::consts::PI;
        while yaw <= std::f32::consts::PI {
            let r = local.rotated_y_translated(Vec3::ZERO, yaw);
            assert!(r.size().x >= 1.8 - EPS);
            assert!(r.size().z >= 1.8 - EPS);
            assert!((r.size().y - 1.5).abs() < EPS);
            yaw += 0.05;
        }
    }

    #[test]
    fn test_rotation_at_zero_yaw_is_identity() {
        let local = Aabb::new(Vec3::new(-0.9, 0.0, -1.9), Vec3::new(0.9, 1.5, 1.9));
        let r = local.rotated_y_translated(Vec3::ZERO, 0.0);
        assert!(close(r.min, local.min));
        assert!(close(r.max, local.max));
    }

    #[test]
    fn test_rotated_box_extents_at_known_yaw() {
        let local = Aabb::new(Vec3::new(-0.9, 0.0, -1.9), Vec3::new(0.9, 1.5, 1.9));
        let yaw = 0.3_f32;
        let (s, c) = yaw.sin_cos();
        let r = local.rotated_y_translated(Vec3::new(1.0, 0.0, 2.0), yaw);
        let half_x = c * 0.9 + s * 1.9;
        let half_z = s * 0.9 + c * 1.9;
        assert!(close(r.min, Vec3::new(1.0 - half_x, 0.0, 2.0 - half_z)));
        assert!(close(r.max, Vec3::new(1.0 + half_x, 1.5, 2.0 + half_z)));
    }
}
