//! Fixed timestep simulation driver
//!
//! `tick` advances every entity by one timestep. `Simulation` owns the state,
//! runs as many ticks as the wall clock calls for and handles goals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::arena::Table;
use super::collision::{ContactParams, DiscParams, resolve_disc, resolve_paddle};
use super::control::{PaddleInput, disc_target, paddle_target, update_input};
use super::interp::Interpolated;
use super::state::{GameEvent, GameState, TransformState};
use crate::config::{ConfigError, DiscConfig, GameConfig, PaddleConfig};
use crate::score::{Scoreboard, Team};
use crate::settings::{ControlScheme, Settings};

/// Everything a tick reads but never changes
#[derive(Debug, Clone)]
pub struct Rules {
    pub table: Table,
    pub paddle: PaddleConfig,
    pub disc: DiscConfig,
    pub contact: ContactParams,
    pub disc_physics: DiscParams,
    pub scheme: ControlScheme,
    pub timestep: f32,
}

impl Rules {
    pub fn new(config: &GameConfig, settings: &Settings) -> Self {
        let tutorial = settings.tutorial_mode;
        let disc_size = config.disc_size(tutorial);
        let goal = config.goal_size(tutorial);

        Self {
            table: Table::new(
                Vec2::new(config.table.width, config.table.height),
                config.paddle.radius,
                disc_size.radius,
                goal.goal_width,
            ),
            paddle: config.paddle.clone(),
            disc: config.disc.clone(),
            contact: ContactParams {
                paddle_radius: config.paddle.radius,
                paddle_mass: config.paddle.mass,
                disc_radius: disc_size.radius,
                disc_mass: disc_size.mass,
                bounce_factor: config.paddle.disc_bounce_factor,
            },
            disc_physics: DiscParams {
                wall_bounce_factor: config.disc.wall_bounce_factor,
                max_speed: config.disc.max_speed,
            },
            scheme: settings.control_scheme,
            timestep: config.timestep,
        }
    }
}

/// Advance the game state by one fixed timestep
///
/// `inputs` is indexed by player id; missing entries count as released.
/// Goals are left for the driver to score.
pub fn tick(state: &mut GameState, rules: &Rules, inputs: &[PaddleInput], dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Paddles in id order, each one can strike the disc
    for paddle in state.paddles.iter_mut() {
        let input = inputs.get(paddle.player_id).copied().unwrap_or_default();
        let was_sliding = paddle.is_wall_sliding();

        update_input(paddle, &input, rules.scheme);
        paddle.start_next_frame();

        let mut target = paddle_target(paddle, state.disc.transform.position, &rules.paddle, rules.scheme, dt);
        let res = resolve_paddle(paddle, &mut target, &rules.table, &mut state.disc, &rules.contact);

        if let Some(contact) = res.contact {
            events.push(GameEvent::DiscStruck {
                player_id: paddle.player_id,
                point: contact.point,
            });
        }
        match (was_sliding, paddle.is_wall_sliding()) {
            (false, true) => events.push(GameEvent::WallSlideStarted {
                player_id: paddle.player_id,
            }),
            (true, false) => events.push(GameEvent::WallSlideEnded {
                player_id: paddle.player_id,
            }),
            _ => {}
        }
    }

    // Disc
    state.disc.start_next_frame();
    let mut target = disc_target(&mut state.disc, &rules.disc, dt);
    resolve_disc(&mut state.disc, &mut target, &rules.table, &rules.disc_physics);

    events
}

/// Owns a match and drives it from wall-clock time
pub struct Simulation {
    rules: Rules,
    state: GameState,
    scores: Scoreboard,
    rng: Pcg32,
    max_ticks: u32,
}

impl Simulation {
    pub fn new(config: &GameConfig, settings: &Settings) -> Result<Self, ConfigError> {
        config.validate()?;

        let rules = Rules::new(config, settings);
        let state = GameState::new(config, settings.tutorial_mode);
        log::info!(
            "Simulation ready: {} paddles, {:?} controls, tutorial {}, seed {}",
            state.paddles.len(),
            rules.scheme,
            settings.tutorial_mode,
            config.seed
        );

        Ok(Self {
            rules,
            state,
            scores: Scoreboard::new(),
            rng: Pcg32::seed_from_u64(config.seed),
            max_ticks: config.max_ticks_per_advance,
        })
    }

    /// Run ticks until the simulation clock reaches `wall_time`
    ///
    /// May run zero, one or several ticks. Past the per-call tick limit the
    /// clock bracket is moved up to `wall_time` and the backlog is dropped.
    pub fn advance(&mut self, wall_time: f64, inputs: &[PaddleInput]) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let mut ticks = 0;

        while self.state.clock.time < wall_time {
            if self.max_ticks > 0 && ticks >= self.max_ticks {
                let behind = wall_time - self.state.clock.time;
                log::warn!("Tick limit of {ticks} reached, skipping {behind:.3}s");
                self.state.clock.shift(behind);
                break;
            }
            events.extend(self.step(inputs));
            ticks += 1;
        }

        events
    }

    /// Run exactly one tick
    pub fn step(&mut self, inputs: &[PaddleInput]) -> Vec<GameEvent> {
        let dt = self.rules.timestep;
        self.state.clock.advance(f64::from(dt));
        let mut events = tick(&mut self.state, &self.rules, inputs, dt);
        self.check_goal(&mut events);
        events
    }

    fn check_goal(&mut self, events: &mut Vec<GameEvent>) {
        if !self.state.disc.is_in_goal {
            return;
        }

        let team = Team::scoring_at(self.state.disc.transform.position.y);
        let score = self.scores.record(team);
        log::info!(
            "Goal for {team:?}: {} - {}",
            self.scores.get(Team::Home),
            self.scores.get(Team::Away)
        );
        events.push(GameEvent::Goal { team, score });

        let position = self.serve();
        events.push(GameEvent::DiscServed { position });
    }

    /// Put the disc back in play at a random spot on the centre line
    pub fn serve(&mut self) -> Vec2 {
        let offset = self.rules.disc.serve_offset;
        let r = if offset > 0.0 {
            self.rng.random_range(-offset..=offset)
        } else {
            0.0
        };

        let disc = &mut self.state.disc;
        disc.reset();
        disc.transform.position = Vec2::new(-r, 0.0);
        // No interpolation from the goal back to the centre
        disc.start_next_frame();

        log::debug!("Disc served at {}", disc.transform.position);
        disc.transform.position
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn table(&self) -> &Table {
        &self.rules.table
    }

    /// Paddle transform to draw at wall-clock time `t`
    pub fn paddle_transform_at(&self, player_id: usize, t: f64) -> Option<TransformState> {
        let paddle = self.state.paddle(player_id)?;
        Some(paddle.transform_at(&self.state.clock, t))
    }

    /// Disc transform to draw at wall-clock time `t`
    pub fn disc_transform_at(&self, t: f64) -> TransformState {
        self.state.disc.transform_at(&self.state.clock, t)
    }
}
