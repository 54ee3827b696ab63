//! Orbit Hockey headless runner
//!
//! Plays a scripted match against the wall clock of a fake render loop and
//! logs what happens. Usage: `orbit-hockey [config.json] [seconds]`.

use orbit_hockey::sim::{GameEvent, PaddleInput, Simulation};
use orbit_hockey::{ConfigError, GameConfig, Settings, Team};

const DEFAULT_SECONDS: f64 = 30.0;

fn main() -> Result<(), ConfigError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Orbit Hockey (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seconds = match args.next() {
        Some(s) => s
            .parse::<f64>()
            .map_err(|e| ConfigError::Invalid(format!("bad duration {s:?}: {e}")))?,
        None => DEFAULT_SECONDS,
    };

    let settings = Settings::default();
    let mut sim = Simulation::new(&config, &settings)?;
    let frame = 1.0 / f64::from(settings.framerate.max(1));

    let mut time = 0.0;
    while time < seconds {
        time += frame;
        let inputs = scripted_inputs(config.paddle.count, time);
        for event in sim.advance(time, &inputs) {
            match event {
                GameEvent::Goal { team, score } => log::info!("{time:.2}s: {team:?} scores ({score})"),
                GameEvent::DiscStruck { player_id, point } => {
                    log::debug!("{time:.2}s: paddle {player_id} hit the disc at {point}")
                }
                _ => {}
            }
        }
    }

    let scores = sim.scores();
    log::info!(
        "Final score after {seconds:.1}s: home {} - away {}",
        scores.get(Team::Home),
        scores.get(Team::Away)
    );
    Ok(())
}

/// Each paddle holds its orbit for 0.4s out of every 1.5s, staggered by id
fn scripted_inputs(count: usize, time: f64) -> Vec<PaddleInput> {
    (0..count)
        .map(|id| {
            let phase = (time + id as f64 * 0.35) % 1.5;
            PaddleInput {
                tapping: phase < 0.4,
                hint: None,
            }
        })
        .collect()
}
