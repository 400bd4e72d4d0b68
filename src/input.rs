//! Input polling
//!
//! Keyboard state is polled each frame; mouse look is derived from the
//! change in cursor position since the previous frame.

use macroquad::prelude::*;
use crate::car::DriveInput;

/// Requests that are not car motion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCommands {
    pub quit: bool,
    pub toggle_bounds: bool,
}

/// Read held driving keys
pub fn poll_drive_input() -> DriveInput {
    DriveInput {
        forward: is_key_down(KeyCode::W),
        backward: is_key_down(KeyCode::S),
        steer_left: is_key_down(KeyCode::A),
        steer_right: is_key_down(KeyCode::D),
        boost: is_key_down(KeyCode::LeftShift),
    }
}

pub fn poll_commands() -> FrameCommands {
    FrameCommands {
        quit: is_key_down(KeyCode::Escape),
        toggle_bounds: is_key_pressed(KeyCode::F1),
    }
}

/// Cursor tracking for mouse look
#[derive(Debug, Default)]
pub struct MouseLook {
    last: Option<(f32, f32)>,
}

impl MouseLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pixel delta since the last call; the first sample only primes the tracker
    pub fn delta(&mut self, pos: (f32, f32)) -> (f32, f32) {
        let delta = match self.last {
            Some((lx, ly)) => (pos.0 - lx, pos.1 - ly),
            None => (0.0, 0.0),
        };
        self.last = Some(pos);
        delta
    }

    pub fn poll(&mut self) -> (f32, f32) {
        self.delta(mouse_position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_has_no_delta() {
        let mut look = MouseLook::new();
        assert_eq!(look.delta((400.0, 300.0)), (0.0, 0.0));
        assert_eq!(look.delta((410.0, 295.0)), (10.0, -5.0));
        assert_eq!(look.delta((410.0, 295.0)), (0.0, 0.0));
    }
}
