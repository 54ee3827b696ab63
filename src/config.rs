//! Data-driven game tuning
//!
//! Loaded once before the match starts and read-only afterwards. Every field
//! has a default, so a JSON file only needs to list what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::SIM_DT;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Goal mouth and zone line sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalSize {
    /// Full width of each goal mouth
    pub goal_width: f32,
    /// Distance of each zone line from the centre line
    pub zone_offset: f32,
}

impl Default for GoalSize {
    fn default() -> Self {
        Self {
            goal_width: 2.0,
            zone_offset: 2.8,
        }
    }
}

/// Table dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub width: f32,
    pub height: f32,
    pub standard: GoalSize,
    pub tutorial: GoalSize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 8.0,
            standard: GoalSize::default(),
            tutorial: GoalSize {
                goal_width: 3.0,
                zone_offset: 2.8,
            },
        }
    }
}

/// Paddle tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub count: usize,
    pub radius: f32,
    pub mass: f32,
    /// Straight-line speed when not orbiting
    pub forward_speed: f32,
    /// Arc speed at full orbit
    pub orbit_speed: f32,
    pub wall_slide_speed: f32,
    pub orbit_radius: f32,
    /// Per-second change of `percent_orbit` while orbiting
    pub to_orbit_delta_speed: f32,
    /// Per-second change of `percent_orbit` otherwise (negative)
    pub from_orbit_delta_speed: f32,
    /// Multiplier on the disc's post-hit speed
    pub disc_bounce_factor: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            count: 2,
            radius: 0.09,
            mass: 10.0,
            forward_speed: 3.2,
            orbit_speed: 3.2,
            wall_slide_speed: 6.0,
            orbit_radius: 0.7,
            to_orbit_delta_speed: 8.0,
            from_orbit_delta_speed: -15.0,
            disc_bounce_factor: 1.3,
        }
    }
}

/// Disc size (differs between tutorial and standard play)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscSize {
    pub radius: f32,
    pub mass: f32,
}

impl Default for DiscSize {
    fn default() -> Self {
        Self {
            radius: 0.1667,
            mass: 20.0,
        }
    }
}

/// Disc tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscConfig {
    pub standard: DiscSize,
    pub tutorial: DiscSize,
    pub max_speed: f32,
    /// Multiplicative speed decay applied once per tick
    pub drag_factor: f32,
    pub wall_bounce_factor: f32,
    /// Serve position is `(-r, 0)` with `r` in `[-serve_offset, serve_offset]`
    pub serve_offset: f32,
}

impl Default for DiscConfig {
    fn default() -> Self {
        Self {
            standard: DiscSize::default(),
            tutorial: DiscSize {
                radius: 0.25,
                mass: 20.0,
            },
            max_speed: 5.0,
            drag_factor: 0.992,
            wall_bounce_factor: 1.5,
            serve_offset: 2.2,
        }
    }
}

/// Complete game tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed simulation timestep in seconds
    pub timestep: f32,
    /// Ticks a single advance may run before the clock is re-anchored
    ///
    /// 0 (the default) runs every tick needed to reach the wall clock.
    pub max_ticks_per_advance: u32,
    /// Seed for serve randomisation
    pub seed: u64,
    pub table: TableConfig,
    pub paddle: PaddleConfig,
    pub disc: DiscConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            timestep: SIM_DT,
            max_ticks_per_advance: 0,
            seed: 0,
            table: TableConfig::default(),
            paddle: PaddleConfig::default(),
            disc: DiscConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Disc size for the given mode
    pub fn disc_size(&self, tutorial: bool) -> DiscSize {
        if tutorial {
            self.disc.tutorial
        } else {
            self.disc.standard
        }
    }

    /// Goal size for the given mode
    pub fn goal_size(&self, tutorial: bool) -> GoalSize {
        if tutorial {
            self.table.tutorial
        } else {
            self.table.standard
        }
    }

    /// Check the numeric invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
            }
        }

        positive("timestep", self.timestep)?;
        positive("table.width", self.table.width)?;
        positive("table.height", self.table.height)?;
        positive("paddle.radius", self.paddle.radius)?;
        positive("paddle.mass", self.paddle.mass)?;
        positive("paddle.orbit_radius", self.paddle.orbit_radius)?;
        positive("disc.max_speed", self.disc.max_speed)?;

        if self.paddle.count == 0 {
            return Err(ConfigError::Invalid("paddle.count must be at least 1".into()));
        }
        if !(self.disc.drag_factor > 0.0 && self.disc.drag_factor <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "disc.drag_factor must be in (0, 1], got {}",
                self.disc.drag_factor
            )));
        }

        let smallest_side = self.table.width.min(self.table.height);
        if smallest_side <= self.paddle.radius * 2.0 {
            return Err(ConfigError::Invalid("table too small for paddle".into()));
        }

        for (mode, size) in [("standard", self.disc.standard), ("tutorial", self.disc.tutorial)] {
            positive(&format!("disc.{mode}.radius"), size.radius)?;
            positive(&format!("disc.{mode}.mass"), size.mass)?;
            if smallest_side <= size.radius * 2.0 {
                return Err(ConfigError::Invalid(format!("table too small for {mode} disc")));
            }
            let half_width = self.table.width / 2.0 - size.radius;
            if self.disc.serve_offset.abs() > half_width {
                return Err(ConfigError::Invalid(format!(
                    "disc.serve_offset {} exceeds {mode} disc bounds {half_width}",
                    self.disc.serve_offset
                )));
            }
        }

        for (mode, goal) in [("standard", self.table.standard), ("tutorial", self.table.tutorial)] {
            if goal.goal_width < 0.0 {
                return Err(ConfigError::Invalid(format!("table.{mode}.goal_width is negative")));
            }
        }

        Ok(())
    }
}
