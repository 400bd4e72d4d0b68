//! Scene loading
//!
//! Uses RON (Rusty Object Notation) for human-readable scene files.

use std::fs;
use std::path::Path;
use super::{create_default_scene, Scene};

/// Error type for scene loading
#[derive(Debug)]
pub enum SceneError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let contents = fs::read_to_string(path)?;
    load_scene_from_str(&contents)
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<Scene, SceneError> {
    let scene: Scene = ron::from_str(s)?;
    Ok(scene)
}

/// Load the scene file if it exists, otherwise fall back to the built-in scene.
/// A file that exists but fails to parse is still an error.
pub fn load_scene_or_default<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    if !path.exists() {
        println!("No scene at {}, using built-in scene", path.display());
        return Ok(create_default_scene());
    }
    let scene = load_scene(path)?;
    println!("Loaded scene {} with {} buildings", path.display(), scene.buildings.len());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;
    use crate::world::{BUILDING_LOCAL_BOX, CAR_LOCAL_BOX};

    #[test]
    fn test_minimal_scene_uses_default_boxes() {
        let scene = load_scene_from_str(
            "(buildings: [(position: (x: 1.0, y: 0.0, z: 2.0), scale: (x: 0.1, y: 0.1, z: 0.1))])",
        )
        .unwrap();
        assert_eq!(scene.car_box, CAR_LOCAL_BOX);
        assert_eq!(scene.building_box, BUILDING_LOCAL_BOX);
        assert_eq!(scene.car_start, Vec3::ZERO);
        assert_eq!(scene.buildings.len(), 1);
        assert_eq!(scene.buildings[0].mesh, "building");
        assert_eq!(scene.buildings[0].rotation, 0.0);
    }

    #[test]
    fn test_malformed_scene_is_parse_error() {
        let err = load_scene_from_str("(buildings: [(position: oops)])").unwrap_err();
        assert!(matches!(err, SceneError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let scene = load_scene_or_default("does/not/exist.ron").unwrap();
        assert_eq!(scene.buildings.len(), create_default_scene().buildings.len());
    }

    #[test]
    fn test_shipped_scene_matches_built_in() {
        let shipped = load_scene_from_str(include_str!("../../assets/scenes/default.ron")).unwrap();
        let built_in = create_default_scene();
        assert_eq!(shipped.car_box, built_in.car_box);
        assert_eq!(shipped.building_box, built_in.building_box);
        assert_eq!(shipped.buildings.len(), built_in.buildings.len());
        for (a, b) in shipped.buildings.iter().zip(&built_in.buildings) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.scale, b.scale);
            assert!((a.rotation - b.rotation).abs() < 1e-6);
        }
    }
}
