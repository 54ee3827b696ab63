//! Game state and core simulation types
//!
//! Everything here is owned by the simulation driver and only mutated while
//! a tick runs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Direction, Line};
use super::interp::{Interpolated, SimClock};
use crate::config::GameConfig;
use crate::score::Team;
use crate::{degrees_from_heading, heading_from_degrees};

/// Position and rotation of an entity
///
/// Rotation is in degrees and is never wrapped into a fixed range. Snapping
/// to a heading (see [`TransformState::face`]) picks the equivalent angle
/// nearest the current one, so a lerp between snapshots turns at most 180°
/// per snap.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformState {
    pub position: Vec2,
    pub rotation: f32,
}

impl TransformState {
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    /// Forward ("up") axis
    #[inline]
    pub fn heading(&self) -> Vec2 {
        heading_from_degrees(self.rotation)
    }

    /// Right-hand axis
    #[inline]
    pub fn right(&self) -> Vec2 {
        heading_from_degrees(self.rotation - 90.0)
    }

    /// Point the forward axis along `dir`, turning the short way
    pub fn face(&mut self, dir: Vec2) {
        let delta = (degrees_from_heading(dir) - self.rotation).rem_euclid(360.0);
        let delta = if delta > 180.0 { delta - 360.0 } else { delta };
        self.rotation += delta;
    }

    pub fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        Self {
            position: a.position.lerp(b.position, t),
            rotation: a.rotation + (b.rotation - a.rotation) * t,
        }
    }
}

/// Paddle movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementMode {
    /// Driving forward, orbit direction follows the disc
    #[default]
    Normal,
    /// Sweeping around `orbit_origin`
    Orbiting,
    /// Travelling along `slide_wall`
    WallSliding,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaddleState {
    pub player_id: usize,
    pub transform: TransformState,
    prev_transform: TransformState,
    /// Speed of the last movement target (units/s)
    pub speed: f32,
    pub is_tapping: bool,
    pub mode: MovementMode,
    pub direction: Direction,
    /// Blend between forward (0) and orbit (1) movement
    pub percent_orbit: f32,
    pub orbit_origin: Vec2,
    /// Wall being slid along, set while `mode` is `WallSliding`
    pub slide_wall: Option<Line>,
    /// Set on a fresh press while sliding. Inert under once-per-tick input:
    /// a slide only lasts while the press that started it is held, and the
    /// release ends it before any re-press can be seen. Nothing reads it.
    pub has_tapped_while_wall_sliding: bool,
}

impl PaddleState {
    pub fn new(player_id: usize, transform: TransformState) -> Self {
        Self {
            player_id,
            transform,
            prev_transform: transform,
            speed: 0.0,
            is_tapping: false,
            mode: MovementMode::Normal,
            direction: Direction::CW,
            percent_orbit: 0.0,
            orbit_origin: transform.position,
            slide_wall: None,
            has_tapped_while_wall_sliding: false,
        }
    }

    pub fn team(&self) -> Team {
        Team::of_player(self.player_id)
    }

    /// Freeze the current transform as the interpolation start for this tick
    pub fn start_next_frame(&mut self) {
        self.prev_transform = self.transform;
    }

    pub fn prev_transform(&self) -> &TransformState {
        &self.prev_transform
    }

    pub fn is_wall_sliding(&self) -> bool {
        self.mode == MovementMode::WallSliding
    }

    /// Attach to `wall`, facing away from it
    pub fn enter_wall_slide(&mut self, wall: Line) {
        self.mode = MovementMode::WallSliding;
        self.slide_wall = Some(wall);
        self.has_tapped_while_wall_sliding = false;
        self.transform.face(wall.normal);
        log::debug!("Paddle {} started wall slide", self.player_id);
    }

    pub fn exit_wall_slide(&mut self) {
        self.mode = MovementMode::Normal;
        self.slide_wall = None;
        self.has_tapped_while_wall_sliding = false;
        self.percent_orbit = 0.0;
        log::debug!("Paddle {} stopped wall slide", self.player_id);
    }
}

impl Interpolated for PaddleState {
    fn current(&self) -> TransformState {
        self.transform
    }

    fn previous(&self) -> TransformState {
        self.prev_transform
    }
}

/// The disc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscState {
    pub transform: TransformState,
    prev_transform: TransformState,
    pub speed: f32,
    /// Unit direction of travel
    pub heading: Vec2,
    /// Passing through a goal mouth, wall collisions are off
    pub is_heading_toward_goal: bool,
    /// Fully past a goal line; the driver scores and serves
    pub is_in_goal: bool,
}

impl Default for DiscState {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl DiscState {
    pub fn new(position: Vec2) -> Self {
        let transform = TransformState::new(position, 0.0);
        Self {
            transform,
            prev_transform: transform,
            speed: 0.0,
            heading: Vec2::Y,
            is_heading_toward_goal: false,
            is_in_goal: false,
        }
    }

    pub fn start_next_frame(&mut self) {
        self.prev_transform = self.transform;
    }

    pub fn prev_transform(&self) -> &TransformState {
        &self.prev_transform
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.heading * self.speed
    }

    /// Back to rest at the origin with goal flags cleared
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Interpolated for DiscState {
    fn current(&self) -> TransformState {
        self.transform
    }

    fn previous(&self) -> TransformState {
        self.prev_transform
    }
}

/// Intended displacement for one tick, consumed by the collision resolver
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementTarget {
    /// Unit direction (zero when there is nowhere to go)
    pub direction: Vec2,
    pub distance: f32,
    /// Rotation to apply over the full distance (degrees)
    pub angle_offset: f32,
}

impl MovementTarget {
    pub fn new(direction: Vec2, distance: f32, angle_offset: f32) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            distance: distance.max(0.0),
            angle_offset,
        }
    }

    /// Target covering `offset` in a straight line
    pub fn from_offset(offset: Vec2, angle_offset: f32) -> Self {
        Self::new(offset, offset.length(), angle_offset)
    }
}

/// Things the view layer reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    WallSlideStarted { player_id: usize },
    WallSlideEnded { player_id: usize },
    /// A paddle hit the disc at `point`
    DiscStruck { player_id: usize, point: Vec2 },
    /// The disc entered a goal; `score` is the team's new total
    Goal { team: Team, score: u32 },
    /// The disc was placed for a new rally (clear its trail)
    DiscServed { position: Vec2 },
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub disc: DiscState,
    /// Indexed by player id
    pub paddles: Vec<PaddleState>,
    pub clock: SimClock,
    /// Ticks run so far
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh match: paddles on their zone lines facing the centre, disc at rest
    pub fn new(config: &GameConfig, tutorial: bool) -> Self {
        let zone = config.goal_size(tutorial).zone_offset;
        let half_x = config.table.width / 2.0 - config.paddle.radius;
        let half_y = config.table.height / 2.0 - config.paddle.radius;

        let paddles = (0..config.paddle.count)
            .map(|id| {
                // Lanes fan out from the centre: 0, +1, -1, +2, -2, ...
                let slot = id / 2;
                let side = if slot % 2 == 1 { 1.0 } else { -1.0 };
                let lane = side * slot.div_ceil(2) as f32 * config.paddle.orbit_radius;
                let (y, rotation) = match Team::of_player(id) {
                    Team::Home => (-zone, 0.0),
                    Team::Away => (zone, 180.0),
                };
                let position = Vec2::new(lane.clamp(-half_x, half_x), y.clamp(-half_y, half_y));
                PaddleState::new(id, TransformState::new(position, rotation))
            })
            .collect();

        Self {
            disc: DiscState::default(),
            paddles,
            clock: SimClock::default(),
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, player_id: usize) -> Option<&PaddleState> {
        self.paddles.get(player_id)
    }

    pub fn paddle_mut(&mut self, player_id: usize) -> Option<&mut PaddleState> {
        self.paddles.get_mut(player_id)
    }
}
