//! Optimal agent backed by policy iteration

use crate::{
    agent::Agent,
    error::{Error, Result},
    game::{Action, DiceGame, DiceState},
    solver::{Policy, PolicyIteration},
};

/// An agent that plays the solved optimal policy.
///
/// Construction runs the full policy-iteration solve once; after that every
/// decision is a map lookup.
#[derive(Debug, Clone)]
pub struct OptimalAgent {
    policy: Policy,
}

impl OptimalAgent {
    /// Solve the game's MDP and retain the converged policy.
    pub fn new(game: &DiceGame) -> Result<Self> {
        Ok(Self {
            policy: PolicyIteration::new(game).solve()?,
        })
    }

    /// Wrap an already-solved (or loaded) policy.
    pub fn from_policy(policy: Policy) -> Self {
        Self { policy }
    }

    /// The solved policy.
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// The action the solved policy assigns to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `state` is not part of the game the
    /// policy was solved for (e.g. a state from a differently-configured
    /// game).
    pub fn action_for(&self, state: &DiceState) -> Result<&Action> {
        self.policy.action(state).map_err(|_| Error::InvalidState {
            state: state.to_string(),
        })
    }
}

impl Agent for OptimalAgent {
    fn choose_action(&mut self, state: &DiceState) -> Result<Action> {
        self.action_for(state).cloned()
    }

    fn name(&self) -> &str {
        "optimal"
    }
}
