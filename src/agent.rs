//! Agents that play the dice game
//!
//! The [`Agent`] trait is the seam between decision-making and the play
//! loop: the loop hands an agent the current dice state and executes
//! whatever action comes back. [`OptimalAgent`] answers from a solved
//! policy; [`RandomAgent`] is a seedable baseline for comparison runs.

pub mod optimal;
pub mod random;

// Public re-exports
pub use optimal::OptimalAgent;
pub use random::RandomAgent;

use crate::{
    error::Result,
    game::{Action, DiceState},
};

/// Unified interface for game-playing agents.
pub trait Agent {
    /// Choose the action to take for the given dice state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state is not one the agent recognizes.
    fn choose_action(&mut self, state: &DiceState) -> Result<Action>;

    /// The agent's name, used for reporting.
    fn name(&self) -> &str;
}
