//! Orbit Hockey - a two-player air hockey arcade core
//!
//! Core modules:
//! - `sim`: Fixed timestep simulation (movement targets, collisions, goals)
//! - `config`: Data-driven tuning, loaded once before a match
//! - `settings`: Player preferences (control scheme, tutorial mode)
//! - `score`: Goal tally per team

pub mod config;
pub mod score;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use score::{Scoreboard, Team};
pub use settings::{ControlScheme, Settings};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Default fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Remaining distance below which a movement target counts as consumed
    pub const NEAR_ZERO: f32 = 0.001;
    /// Backstop on collision sub-steps within one resolve
    pub const MAX_RESOLVE_STEPS: u32 = 64;
}

/// Unit heading for a rotation in degrees (0 = +Y, positive = counter-clockwise)
#[inline]
pub fn heading_from_degrees(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(-rad.sin(), rad.cos())
}

/// Signed angle in degrees from +Y to `dir`, in (-180, 180]
#[inline]
pub fn degrees_from_heading(dir: Vec2) -> f32 {
    (-dir.x).atan2(dir.y).to_degrees()
}
