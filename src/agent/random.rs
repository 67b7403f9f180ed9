//! Uniform-random baseline agent

use rand::{rngs::StdRng, seq::IndexedRandom};

use crate::{
    agent::Agent,
    error::Result,
    game::{Action, DiceGame, DiceState, config::build_rng},
};

/// An agent that picks a uniformly random action every turn.
///
/// Useful as a floor when judging what the solved policy is worth. Seed it
/// for reproducible comparison runs.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    actions: Vec<Action>,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(game: &DiceGame) -> Self {
        Self {
            actions: game.actions().to_vec(),
            rng: build_rng(None),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = build_rng(Some(seed));
        self
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, _state: &DiceState) -> Result<Action> {
        Ok(self
            .actions
            .choose(&mut self.rng)
            .expect("a game always has at least the terminal action")
            .clone())
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    #[test]
    fn seeded_agents_pick_identical_actions() {
        let game =
            DiceGame::new(GameConfig::new().with_seed(0)).expect("config should build");
        let mut a = RandomAgent::new(&game).with_seed(7);
        let mut b = RandomAgent::new(&game).with_seed(7);
        let state = game.current_state();
        for _ in 0..10 {
            assert_eq!(
                a.choose_action(&state).unwrap(),
                b.choose_action(&state).unwrap()
            );
        }
    }

    #[test]
    fn chosen_actions_come_from_the_game() {
        let game =
            DiceGame::new(GameConfig::new().with_seed(0)).expect("config should build");
        let mut agent = RandomAgent::new(&game).with_seed(1);
        let state = game.current_state();
        for _ in 0..20 {
            let action = agent.choose_action(&state).unwrap();
            assert!(game.actions().contains(&action));
        }
    }
}
