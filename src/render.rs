//! Scene drawing
//!
//! Every drawable is a textured box placed with a model matrix built as
//! translate * rotate_y * scale. Buildings are drawn rotated even though
//! their collision boxes are not.

use macroquad::math::{Mat4, Quat};
use macroquad::prelude::*;
use crate::app::DemoState;
use crate::assets::TextureSet;
use crate::collision::Aabb;
use crate::math::Vec3;

/// Ground plane edge length
const GROUND_SIZE: f32 = 100.0;

const SKY: Color = Color::new(0.1, 0.1, 0.1, 1.0);
const BOUNDS_COLOR: Color = Color::new(0.2, 0.9, 0.9, 1.0);
const BLOCKED_COLOR: Color = Color::new(0.95, 0.2, 0.2, 1.0);

/// World transform for a drawable
pub fn model_matrix(position: Vec3, yaw: f32, scale: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale.into(), Quat::from_rotation_y(yaw), position.into())
}

/// Draw a local-space box under a model matrix
fn draw_model(transform: Mat4, local: &Aabb, texture: &Texture2D) {
    unsafe {
        get_internal_gl().quad_gl.push_model_matrix(transform);
    }
    draw_cube(local.center().into(), local.size().into(), Some(texture), WHITE);
    unsafe {
        get_internal_gl().quad_gl.pop_model_matrix();
    }
}

fn draw_bounds(bounds: &Aabb, color: Color) {
    draw_cube_wires(bounds.center().into(), bounds.size().into(), color);
}

/// Draw the 3D scene through the chase camera
pub fn draw_world(demo: &DemoState, textures: &TextureSet) {
    clear_background(SKY);
    set_camera(&demo.camera.to_camera3d(&demo.car, &demo.config.camera));

    draw_plane(
        vec3(0.0, 0.0, 0.0),
        vec2(GROUND_SIZE * 0.5, GROUND_SIZE * 0.5),
        Some(textures.get("ground")),
        WHITE,
    );

    let scene = demo.scene();
    for building in &scene.buildings {
        let transform = model_matrix(building.position, building.rotation, building.scale);
        draw_model(transform, &scene.building_box, textures.get(&building.mesh));
    }

    let car = &demo.car;
    draw_model(model_matrix(car.position, car.yaw, Vec3::ONE), &scene.car_box, textures.get("car"));

    if demo.show_bounds {
        for bounds in scene.building_bounds() {
            draw_bounds(&bounds, BOUNDS_COLOR);
        }
        let color = if demo.last_report.outcome.is_blocked() || demo.last_report.rotation_blocked {
            BLOCKED_COLOR
        } else {
            BOUNDS_COLOR
        };
        draw_bounds(&car.bounds(scene), color);
    }

    set_default_camera();
}

/// Status text in screen space
pub fn draw_hud(demo: &DemoState, boosting: bool) {
    let car = &demo.car;
    let report = &demo.last_report;
    let lines = [
        format!("pos  {:7.2} {:7.2} {:7.2}", car.position.x, car.position.y, car.position.z),
        format!("yaw  {:7.1} deg", car.yaw.to_degrees()),
        format!("mode {}", if boosting { "boost" } else { "normal" }),
        format!(
            "move {}{}",
            report.outcome.label(),
            if report.rotation_blocked { ", turn blocked" } else { "" }
        ),
        "W/S drive  A/D steer  Shift boost  F1 boxes  Esc quit".to_string(),
    ];

    for (i, line) in lines.iter().enumerate() {
        draw_text(line, 10.0, 20.0 + i as f32 * 18.0, 18.0, WHITE);
    }
}
