//! Render-time interpolation between simulation ticks
//!
//! The driver advances in fixed steps; the view renders at its own rate and
//! blends each entity's previous and current snapshot by where the render
//! time falls inside the last tick.

use serde::{Deserialize, Serialize};

use super::state::TransformState;

/// Below this bracket width the clock counts as not having advanced
const MIN_BRACKET: f64 = 1e-9;

/// Time bracket of the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimClock {
    pub prev_time: f64,
    pub time: f64,
}

impl SimClock {
    /// Open the next tick of length `timestep`
    pub fn advance(&mut self, timestep: f64) {
        self.prev_time = self.time;
        self.time += timestep;
    }

    /// Move the whole bracket forward by `offset` without running ticks
    pub fn shift(&mut self, offset: f64) {
        self.prev_time += offset;
        self.time += offset;
    }

    /// Position of `t` inside the bracket (0 at `prev_time`, 1 at `time`)
    ///
    /// `None` when the bracket has zero width. Not clamped.
    pub fn fraction(&self, t: f64) -> Option<f32> {
        let span = self.time - self.prev_time;
        if span.abs() < MIN_BRACKET {
            return None;
        }
        Some(((t - self.prev_time) / span) as f32)
    }
}

/// Entities that keep a previous/current transform pair
pub trait Interpolated {
    fn current(&self) -> TransformState;
    fn previous(&self) -> TransformState;

    /// Transform to draw at wall-clock time `t`
    fn transform_at(&self, clock: &SimClock, t: f64) -> TransformState {
        match clock.fraction(t) {
            Some(frac) => TransformState::lerp(&self.previous(), &self.current(), frac),
            None => self.current(),
        }
    }
}
