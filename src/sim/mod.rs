//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by player id)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod control;
pub mod geom;
pub mod interp;
pub mod state;
pub mod tick;

pub use arena::{Arena, Bounds, Table, WallHit, WallType};
pub use collision::{ContactParams, DiscContact, DiscParams, Resolution, resolve_disc, resolve_paddle, strike_disc};
pub use control::{PaddleInput, disc_target, paddle_target, update_input};
pub use geom::{Direction, Line, line_intersection};
pub use interp::{Interpolated, SimClock};
pub use state::{DiscState, GameEvent, GameState, MovementMode, MovementTarget, PaddleState, TransformState};
pub use tick::{Rules, Simulation, tick};
