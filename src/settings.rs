//! Player preferences
//!
//! Persisted by the host as JSON and handed to the simulation at
//! construction; nothing in the core reads global state.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// How held input maps to paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlScheme {
    /// Hold to orbit; released paddles turn toward the disc
    #[default]
    FollowDisc,
    /// Hold left or right to orbit in that direction
    DualTap,
    /// Hold to orbit; each release flips the orbit direction
    TapToggle,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::FollowDisc => "Follow Disc",
            ControlScheme::DualTap => "Dual Tap",
            ControlScheme::TapToggle => "Tap Toggle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "followdisc" | "follow" => Some(ControlScheme::FollowDisc),
            "dualtap" | "dual" => Some(ControlScheme::DualTap),
            "taptoggle" | "toggle" => Some(ControlScheme::TapToggle),
            _ => None,
        }
    }

    /// Next scheme in the options menu cycle
    pub fn next(&self) -> Self {
        match self {
            ControlScheme::FollowDisc => ControlScheme::DualTap,
            ControlScheme::DualTap => ControlScheme::TapToggle,
            ControlScheme::TapToggle => ControlScheme::FollowDisc,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub control_scheme: ControlScheme,
    /// Tutorial mode uses a bigger disc and wider goals
    pub tutorial_mode: bool,
    /// Target render frame rate
    pub framerate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            control_scheme: ControlScheme::FollowDisc,
            tutorial_mode: false,
            framerate: 60,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Switch between 30 and 60 fps
    pub fn toggle_framerate(&mut self) {
        self.framerate = if self.framerate == 30 { 60 } else { 30 };
        log::info!("Framerate set to {}", self.framerate);
    }
}
