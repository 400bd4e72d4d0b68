//! Collision module - box overlap between the car and static buildings
//!
//! - Local boxes moved into world space (scaled, or yaw-rotated for the car)
//! - Interval overlap on all three axes
//! - Linear scan over the obstacle list, first hit wins

mod aabb;
mod query;

pub use aabb::*;
pub use query::*;
