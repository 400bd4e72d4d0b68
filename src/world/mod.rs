//! World module - the static scene the car drives through
//!
//! - Buildings placed once at startup, never mutated
//! - Collision against buildings ignores their visual rotation
//! - Scenes stored as RON files

mod scene;
mod scene_file;

pub use scene::*;
pub use scene_file::*;
