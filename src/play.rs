//! Play loop: drive an agent through complete games and summarize scores

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{agent::Agent, error::Result, game::DiceGame};

/// Play one complete game: reset, then ask the agent for an action and roll
/// until the terminal action ends the game. Returns the final score.
pub fn play_game(game: &mut DiceGame, agent: &mut dyn Agent, verbose: bool) -> Result<f64> {
    let mut state = game.reset();
    if verbose {
        println!("Initial dice: {state}");
    }

    let mut roll_count = 0;
    loop {
        roll_count += 1;
        let action = agent.choose_action(&state)?;
        let (next, game_over) = game.roll(&action)?;
        state = next;

        if verbose {
            println!("Agent action: \t{action}");
            if !game_over {
                println!("Dice roll {roll_count}: \t{state}");
            }
        }

        if game_over {
            if verbose {
                println!("Final dice: {state}");
            }
            return Ok(game.score());
        }
    }
}

/// Aggregate result of a multi-game run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySummary {
    /// Name of the agent that played
    pub agent: String,

    /// Number of games played
    pub games: usize,

    /// Per-game final scores, in play order
    pub scores: Vec<f64>,

    /// Sum of all scores
    pub total_score: f64,

    /// Mean score per game
    pub average_score: f64,

    /// Lowest single-game score
    pub min_score: f64,

    /// Highest single-game score
    pub max_score: f64,

    /// Wall-clock seconds spent solving the policy before play began
    pub solve_seconds: f64,
}

impl PlaySummary {
    pub fn new(agent: String, scores: Vec<f64>, solve_seconds: f64) -> Self {
        let games = scores.len();
        let total_score: f64 = scores.iter().sum();
        let average_score = if games > 0 {
            total_score / games as f64
        } else {
            0.0
        };
        let min_score = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            agent,
            games,
            scores,
            total_score,
            average_score,
            min_score: if games > 0 { min_score } else { 0.0 },
            max_score: if games > 0 { max_score } else { 0.0 },
            solve_seconds,
        }
    }

    /// Save the summary to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load a summary from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let summary = serde_json::from_reader(file)?;
        Ok(summary)
    }
}
