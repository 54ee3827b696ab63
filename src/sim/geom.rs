//! Line and vector helpers for the collision resolver
//!
//! Angles are in degrees, counter-clockwise positive, matching the
//! unwrapped entity rotations in [`super::state::TransformState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Determinant below which two lines count as parallel
const PARALLEL_EPSILON: f32 = 1e-9;

/// Rotational sense for orbits and wall slides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    CW,
    CCW,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::CW => Direction::CCW,
            Direction::CCW => Direction::CW,
        }
    }
}

/// A wall segment with its midpoint and unit normal
///
/// The normal is the segment direction turned a quarter counter-clockwise;
/// walls built by [`super::arena::Arena`] wind so that it faces the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
    pub mid: Vec2,
    pub normal: Vec2,
}

impl Line {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let v = (end - start).normalize_or_zero();
        Self {
            start,
            end,
            mid: start.lerp(end, 0.5),
            normal: v.perp(),
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Unit direction of travel along the wall when sliding in `direction`
    pub fn tangent(&self, direction: Direction) -> Vec2 {
        let degrees = match direction {
            Direction::CW => 90.0,
            Direction::CCW => -90.0,
        };
        rotate_degrees(self.normal, degrees).normalize_or_zero()
    }

    /// Closest point on this segment to `point`
    #[inline]
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        nearest_point_on_finite_line(self.start, self.end, point)
    }
}

/// Intersection of the infinite lines through `p1-p2` and `q1-q2`
///
/// The result is not clamped to either segment. Returns `None` when the
/// lines are parallel or collinear.
pub fn line_intersection(p1: Vec2, p2: Vec2, q1: Vec2, q2: Vec2) -> Option<Vec2> {
    // a*x + b*y = c for each line
    let a1 = p2.y - p1.y;
    let b1 = p1.x - p2.x;
    let c1 = a1 * p1.x + b1 * p1.y;

    let a2 = q2.y - q1.y;
    let b2 = q1.x - q2.x;
    let c2 = a2 * q1.x + b2 * q1.y;

    let delta = a1 * b2 - a2 * b1;
    if delta.abs() < PARALLEL_EPSILON {
        return None;
    }

    Some(Vec2::new((b2 * c1 - b1 * c2) / delta, (a1 * c2 - a2 * c1) / delta))
}

/// Angular sweep in degrees covered by an arc of length `distance` at `radius`
#[inline]
pub fn arc_distance_to_degrees(distance: f32, radius: f32) -> f32 {
    (distance / radius).to_degrees()
}

/// Project `point` onto the segment `start-end`, clamped to its ends
pub fn nearest_point_on_finite_line(start: Vec2, end: Vec2, point: Vec2) -> Vec2 {
    let line = end - start;
    let len = line.length();
    if len <= f32::EPSILON {
        return start;
    }
    let dir = line / len;
    let d = (point - start).dot(dir).clamp(0.0, len);
    start + dir * d
}

/// Rotate `v` counter-clockwise by `degrees`
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Rotate `point` about `origin` by `degrees`
#[inline]
pub fn rotate_around(point: Vec2, origin: Vec2, degrees: f32) -> Vec2 {
    origin + rotate_degrees(point - origin, degrees)
}

/// Reflect `v` off a surface with unit `normal`: v' = v - 2(v·n)n
#[inline]
pub fn reflect(v: Vec2, normal: Vec2) -> Vec2 {
    v - 2.0 * v.dot(normal) * normal
}

/// Mirror `v` across the line spanned by unit `axis`, keeping its axis component
#[inline]
pub fn mirror_across(v: Vec2, axis: Vec2) -> Vec2 {
    2.0 * v.dot(axis) * axis - v
}
