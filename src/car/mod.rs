//! Car module - the single moving actor
//!
//! Each frame proposes a rotation, then a translation, and commits each
//! only if the car's box stays clear of every building.

mod state;
mod motion;

pub use state::*;
pub use motion::*;
