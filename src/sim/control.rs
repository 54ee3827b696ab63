//! Input handling and per-tick movement targets
//!
//! Input drives the paddle mode machine; the target builders then turn the
//! current state into the displacement the collision resolver will try to
//! carry out.

use glam::Vec2;

use super::geom::{Direction, arc_distance_to_degrees, rotate_around};
use super::state::{DiscState, MovementMode, MovementTarget, PaddleState};
use crate::config::{DiscConfig, PaddleConfig};
use crate::settings::ControlScheme;

/// Input for one paddle, polled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    /// Orbit button/touch held
    pub tapping: bool,
    /// Left/right side of a dual-tap press (left = CCW, right = CW)
    pub hint: Option<Direction>,
}

impl PaddleInput {
    pub fn held() -> Self {
        Self {
            tapping: true,
            hint: None,
        }
    }

    pub fn held_toward(direction: Direction) -> Self {
        Self {
            tapping: true,
            hint: Some(direction),
        }
    }
}

/// Apply this tick's input to the paddle's mode machine
///
/// Wall slides are only ever entered by the collision resolver.
pub fn update_input(paddle: &mut PaddleState, input: &PaddleInput, scheme: ControlScheme) {
    let was_tapping = paddle.is_tapping;
    paddle.is_tapping = input.tapping;
    let sliding = paddle.is_wall_sliding();

    // Only reachable when a host puts a released paddle into a slide
    if sliding && input.tapping && !was_tapping {
        paddle.has_tapped_while_wall_sliding = true;
    }

    if input.tapping && !sliding {
        match scheme {
            ControlScheme::FollowDisc | ControlScheme::TapToggle => {
                paddle.mode = MovementMode::Orbiting;
            }
            ControlScheme::DualTap => {
                if let Some(direction) = input.hint {
                    paddle.direction = direction;
                    paddle.mode = MovementMode::Orbiting;
                }
            }
        }
    }

    if !input.tapping {
        match paddle.mode {
            MovementMode::Orbiting => paddle.mode = MovementMode::Normal,
            MovementMode::WallSliding => paddle.exit_wall_slide(),
            MovementMode::Normal => {}
        }
    }

    if scheme == ControlScheme::TapToggle && was_tapping && !input.tapping {
        paddle.direction = paddle.direction.opposite();
    }
}

/// Ramp `percent_orbit` toward 1 while orbiting, toward 0 otherwise
pub fn step_percent_orbit(paddle: &mut PaddleState, config: &PaddleConfig, dt: f32) {
    if paddle.is_wall_sliding() {
        paddle.percent_orbit = 0.0;
        return;
    }

    let rate = if paddle.mode == MovementMode::Orbiting {
        config.to_orbit_delta_speed
    } else {
        config.from_orbit_delta_speed
    };
    paddle.percent_orbit = (paddle.percent_orbit + rate * dt).clamp(0.0, 1.0);
}

/// Orbit toward whichever side of the paddle the disc is on
pub fn update_orbit_direction(paddle: &mut PaddleState, disc_position: Vec2) {
    let to_disc = disc_position - paddle.transform.position;
    paddle.direction = if paddle.transform.right().dot(to_disc) > 0.0 {
        Direction::CW
    } else {
        Direction::CCW
    };
}

/// Place the orbit centre beside the paddle, on the side it turns toward
pub fn update_orbit_origin(paddle: &mut PaddleState, orbit_radius: f32) {
    let left = paddle.transform.heading().perp();
    let offset = match paddle.direction {
        Direction::CW => -orbit_radius,
        Direction::CCW => orbit_radius,
    };
    paddle.orbit_origin = paddle.transform.position + left * offset;
}

/// Build this tick's paddle target
pub fn paddle_target(
    paddle: &mut PaddleState,
    disc_position: Vec2,
    config: &PaddleConfig,
    scheme: ControlScheme,
    dt: f32,
) -> MovementTarget {
    step_percent_orbit(paddle, config, dt);

    if paddle.mode == MovementMode::Normal && scheme == ControlScheme::FollowDisc {
        update_orbit_direction(paddle, disc_position);
    }
    if !paddle.is_wall_sliding() {
        update_orbit_origin(paddle, config.orbit_radius);
    }

    let trans = &paddle.transform;
    let target = if paddle.is_wall_sliding() {
        MovementTarget::from_offset(trans.heading() * config.wall_slide_speed * dt, 0.0)
    } else {
        let orbit_dist = dt * config.orbit_speed * paddle.percent_orbit;
        let mut orbit_degrees = arc_distance_to_degrees(orbit_dist, config.orbit_radius);
        if paddle.direction == Direction::CW {
            orbit_degrees = -orbit_degrees;
        }
        let orbit_offset =
            rotate_around(trans.position, paddle.orbit_origin, orbit_degrees) - trans.position;

        let forward_dist = dt * config.forward_speed * (1.0 - paddle.percent_orbit);
        let forward_offset = trans.heading() * forward_dist;

        MovementTarget::from_offset(orbit_offset + forward_offset, orbit_degrees)
    };

    paddle.speed = if dt > 0.0 { target.distance / dt } else { 0.0 };
    target
}

/// Build this tick's disc target after applying drag
pub fn disc_target(disc: &mut DiscState, config: &DiscConfig, dt: f32) -> MovementTarget {
    disc.speed *= config.drag_factor;
    MovementTarget::new(disc.heading, disc.speed * dt, 0.0)
}
