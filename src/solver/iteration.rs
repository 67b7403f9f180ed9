//! Policy iteration orchestration

use crate::{
    error::Result,
    game::DiceGame,
    solver::{
        evaluation::evaluate_policy, improvement::improve_policy, policy::Policy,
        value_function::ValueFunction,
    },
};

/// Discount factor γ applied to future value in every Bellman backup.
pub const DISCOUNT_FACTOR: f64 = 0.94;

/// Convergence threshold θ: a sweep whose largest value change stays below
/// this ends an evaluation.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Policy-iteration solver for a dice game.
///
/// Alternates fixed-policy evaluation with cyclic single-candidate
/// improvement until an improvement pass changes nothing. The solve consumes
/// no randomness: for a fixed game configuration it always produces the same
/// policy.
#[derive(Debug, Clone, Copy)]
pub struct PolicyIteration<'a> {
    game: &'a DiceGame,
    gamma: f64,
    theta: f64,
}

impl<'a> PolicyIteration<'a> {
    pub fn new(game: &'a DiceGame) -> Self {
        Self {
            game,
            gamma: DISCOUNT_FACTOR,
            theta: CONVERGENCE_THRESHOLD,
        }
    }

    /// Solve the game's MDP and return the converged policy.
    ///
    /// Starts from V ≡ 0 and a policy that holds every die in every state,
    /// with the candidate cursor parked on the terminal action. Termination
    /// has no general proof under the cyclic improvement scheme, but for the
    /// game's supported parameter ranges the loop settles within a small
    /// multiple of the action-list length.
    pub fn solve(&self) -> Result<Policy> {
        let states = self.game.states();
        let actions = self.game.actions();
        let hold_all = actions
            .last()
            .expect("a game always has at least the terminal action");

        let mut v = ValueFunction::zeroed(states);
        let mut policy = Policy::constant(states, hold_all);
        let mut cursor = actions.len() - 1;

        loop {
            evaluate_policy(self.game, &mut v, &policy, self.gamma, self.theta)?;
            let improvement = improve_policy(self.game, &v, &mut policy, cursor, self.gamma)?;
            cursor = improvement.cursor;
            if improvement.stable {
                return Ok(policy);
            }
        }
    }
}
