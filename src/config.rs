//! Tunables for driving and the chase camera
//!
//! Read from an optional RON file; every field falls back to its default.

use std::f32::consts::PI;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};

/// Default location of the tunables file
pub const CONFIG_PATH: &str = "assets/config.ron";

/// Car handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriveConfig {
    /// Units per second, forward and reverse
    pub car_speed: f32,
    /// Speed multiplier while boost is held (ignored while reversing)
    pub boost_factor: f32,
    /// Radians turned per frame while a steer key is held
    pub rotation_step: f32,
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            car_speed: 3.5,
            boost_factor: 3.0,
            rotation_step: 0.01,
        }
    }
}

/// Chase camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Height above the car
    pub height: f32,
    /// Distance behind the car along its heading
    pub distance: f32,
    /// Resting pitch in degrees (negative looks down)
    pub pitch_deg: f32,
    pub fov_deg: f32,
    pub min_fov_deg: f32,
    pub max_fov_deg: f32,
    /// Degrees of look offset per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Limit on the total pitch, degrees
    pub max_look_deg: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: 8.0,
            distance: 3.0,
            pitch_deg: -60.0,
            fov_deg: 45.0,
            min_fov_deg: 1.0,
            max_fov_deg: 45.0,
            mouse_sensitivity: 0.1,
            max_look_deg: 89.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub drive: DriveConfig,
    pub camera: CameraConfig,
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    /// Parsed, but a value is out of range
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl Config {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the camera clamps and the yaw wrap cannot handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        let drive = &self.drive;
        let camera = &self.camera;

        if !(drive.car_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!("car_speed {} is negative", drive.car_speed)));
        }
        if !(drive.boost_factor >= 0.0) {
            return Err(ConfigError::Invalid(format!("boost_factor {} is negative", drive.boost_factor)));
        }
        // wrap_pi applies a single 2*PI correction
        if !(0.0..=PI).contains(&drive.rotation_step) {
            return Err(ConfigError::Invalid(format!("rotation_step {} outside [0, PI]", drive.rotation_step)));
        }
        if !(camera.min_fov_deg <= camera.max_fov_deg) {
            return Err(ConfigError::Invalid(format!(
                "min_fov_deg {} above max_fov_deg {}",
                camera.min_fov_deg, camera.max_fov_deg
            )));
        }
        if !(camera.max_look_deg >= 0.0) {
            return Err(ConfigError::Invalid(format!("max_look_deg {} is negative", camera.max_look_deg)));
        }
        Ok(())
    }

    /// Load tunables, or defaults when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        println!("Loaded config from {}", path.display());
        Ok(config)
    }
}
