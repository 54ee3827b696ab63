//! Goal tally
//!
//! Two teams; the home team defends the bottom goal.

use serde::{Deserialize, Serialize};

/// A scoring side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Defends the bottom goal, scores through the top one
    Home,
    /// Defends the top goal, scores through the bottom one
    Away,
}

impl Team {
    /// Team for a paddle; even player ids play for home
    pub fn of_player(player_id: usize) -> Self {
        if player_id % 2 == 0 { Team::Home } else { Team::Away }
    }

    /// Team credited when the disc ends up at height `y`
    pub fn scoring_at(y: f32) -> Self {
        if y > 0.0 { Team::Home } else { Team::Away }
    }

    pub fn index(&self) -> usize {
        match self {
            Team::Home => 0,
            Team::Away => 1,
        }
    }
}

/// Running score for both teams
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    scores: [u32; 2],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a goal, returning the team's new score
    pub fn record(&mut self, team: Team) -> u32 {
        let score = &mut self.scores[team.index()];
        *score += 1;
        *score
    }

    pub fn get(&self, team: Team) -> u32 {
        self.scores[team.index()]
    }

    /// Team currently ahead (None when level)
    pub fn leader(&self) -> Option<Team> {
        let [home, away] = self.scores;
        match home.cmp(&away) {
            std::cmp::Ordering::Greater => Some(Team::Home),
            std::cmp::Ordering::Less => Some(Team::Away),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn reset(&mut self) {
        self.scores = [0; 2];
    }
}
