//! Rectangular play area
//!
//! An [`Arena`] is the table shrunk by one entity's radius, so the entity's
//! centre moves inside a rectangle whose four edges are the walls. Paddles and
//! the disc each get their own arena; [`Table`] bundles both with the goals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Direction, Line, line_intersection};
use crate::consts::NEAR_ZERO;

/// Axis-aligned rectangle, inclusive on its edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Squared distance from `p` to the rectangle (0 inside)
    pub fn sqr_distance(&self, p: Vec2) -> f32 {
        (p - self.clamp(p)).length_squared()
    }

    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// Wall slots, in clockwise order around the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallType {
    Left = 0,
    Top = 1,
    Right = 2,
    Bottom = 3,
}

impl WallType {
    pub const ALL: [WallType; 4] = [WallType::Left, WallType::Top, WallType::Right, WallType::Bottom];

    /// Top and bottom walls hold the goal mouths
    pub fn is_goal_wall(&self) -> bool {
        matches!(self, WallType::Top | WallType::Bottom)
    }
}

/// A wall crossing found by [`Arena::check_point_collision`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    pub kind: WallType,
    pub wall: Line,
    /// Where the step crosses the wall's line
    pub point: Vec2,
}

/// Feasible region for one entity's centre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    bounds: Bounds,
    walls: [Line; 4],
}

impl Arena {
    /// Arena for an entity of `radius` on a table of `table_size`, centred on the origin
    pub fn new(table_size: Vec2, radius: f32) -> Self {
        let bounds = Bounds::from_center_size(Vec2::ZERO, table_size - Vec2::splat(radius * 2.0));
        let (min, max) = (bounds.min, bounds.max);

        // Wound so each normal faces the table and index + 1 is the clockwise neighbour
        let walls = [
            Line::new(Vec2::new(min.x, max.y), Vec2::new(min.x, min.y)),
            Line::new(Vec2::new(max.x, max.y), Vec2::new(min.x, max.y)),
            Line::new(Vec2::new(max.x, min.y), Vec2::new(max.x, max.y)),
            Line::new(Vec2::new(min.x, min.y), Vec2::new(max.x, min.y)),
        ];

        Self { bounds, walls }
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn walls(&self) -> &[Line; 4] {
        &self.walls
    }

    #[inline]
    pub fn wall(&self, kind: WallType) -> Line {
        self.walls[kind as usize]
    }

    /// Slot of a wall, matched by value
    pub fn wall_type(&self, wall: &Line) -> Option<WallType> {
        self.walls.iter().position(|w| w == wall).map(|i| WallType::ALL[i])
    }

    /// Neighbouring wall reached by sliding off the end of `wall` in `direction`
    pub fn next_wall(&self, wall: &Line, direction: Direction) -> Line {
        let index = self.walls.iter().position(|w| w == wall).unwrap_or(0);
        let count = self.walls.len();
        let next = match direction {
            Direction::CW => (index + 1) % count,
            Direction::CCW => (index + count - 1) % count,
        };
        self.walls[next]
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        self.bounds.contains(p)
    }

    /// Inside or within float noise of the edge
    #[inline]
    pub fn is_inside(&self, p: Vec2) -> bool {
        self.bounds.sqr_distance(p) <= NEAR_ZERO * NEAR_ZERO
    }

    /// Wall crossed by a step ending at `target`, `None` while inside
    ///
    /// Each axis limit is compared independently and the first match wins
    /// (left, right, bottom, top). A step leaving through a corner is
    /// attributed to the vertical wall.
    ///
    /// # Panics
    ///
    /// When `target` is outside but no limit matches, which only happens for
    /// non-finite input; carrying on would corrupt the entity's state.
    pub fn crossed_wall(&self, target: Vec2) -> Option<WallType> {
        if self.contains(target) {
            return None;
        }

        let Bounds { min, max } = self.bounds;
        let kind = if target.x < min.x {
            WallType::Left
        } else if target.x > max.x {
            WallType::Right
        } else if target.y < min.y {
            WallType::Bottom
        } else if target.y > max.y {
            WallType::Top
        } else {
            panic!("step to {target} left {:?} without crossing an edge", self.bounds);
        };
        Some(kind)
    }

    /// Check a straight step from `from` to `to` against the walls
    pub fn check_point_collision(&self, from: Vec2, to: Vec2) -> Option<WallHit> {
        let kind = self.crossed_wall(to)?;
        let wall = self.wall(kind);
        let point = line_intersection(from, to, wall.start, wall.end).unwrap_or(from);
        Some(WallHit { kind, wall, point })
    }
}

/// Both arenas plus the goal mouths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub size: Vec2,
    pub paddle_arena: Arena,
    pub disc_arena: Arena,
    pub goal_width: f32,
    pub disc_radius: f32,
}

impl Table {
    pub fn new(size: Vec2, paddle_radius: f32, disc_radius: f32, goal_width: f32) -> Self {
        Self {
            size,
            paddle_arena: Arena::new(size, paddle_radius),
            disc_arena: Arena::new(size, disc_radius),
            goal_width,
            disc_radius,
        }
    }

    /// Whether a disc hitting `hit` passes into the goal instead of bouncing
    pub fn is_goal_mouth(&self, hit: &WallHit) -> bool {
        let half = self.goal_width / 2.0 - self.disc_radius;
        hit.kind.is_goal_wall() && hit.point.x > -half && hit.point.x < half
    }

    /// Height beyond which a disc has fully entered a goal
    pub fn goal_line_y(&self) -> f32 {
        self.disc_arena.bounds().max.y + self.disc_radius * 2.0
    }
}
