//! AABB Drive: a car on a ground plane among static buildings
//!
//! - Propose, test, commit movement against axis-aligned boxes
//! - Rotation blocked when the turned car would overlap a building
//! - Axis-wise sliding, rollback to the last safe position
//! - Chase camera with mouse look and scroll zoom

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod camera;
mod car;
mod collision;
mod config;
mod input;
mod math;
mod render;
mod world;

use macroquad::prelude::*;
use app::DemoState;
use assets::{TextureSet, TEXTURE_DIR};
use config::{Config, CONFIG_PATH};
use input::{poll_commands, poll_drive_input, MouseLook};
use world::load_scene_or_default;

/// Scene loaded at startup, built-in scene if absent
const SCENE_PATH: &str = "assets/scenes/default.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("AABB Drive v{}", VERSION),
        window_width: 800,
        window_height: 600,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match Config::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config {}: {}", CONFIG_PATH, e);
            std::process::exit(1);
        }
    };

    let scene = match load_scene_or_default(SCENE_PATH) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to load scene {}: {}", SCENE_PATH, e);
            std::process::exit(1);
        }
    };

    let textures = TextureSet::load(TEXTURE_DIR);
    let mut demo = DemoState::new(scene, config);
    let mut mouse_look = MouseLook::new();

    set_cursor_grab(true);
    show_mouse(false);

    println!("=== AABB Drive ===");

    loop {
        let commands = poll_commands();
        if commands.quit {
            break;
        }
        if commands.toggle_bounds {
            demo.toggle_bounds();
        }

        let input = poll_drive_input();
        demo.update(&input, get_frame_time());
        demo.update_camera(mouse_look.poll(), mouse_wheel().1);

        render::draw_world(&demo, &textures);
        render::draw_hud(&demo, input.is_boosting());

        next_frame().await;
    }
}
