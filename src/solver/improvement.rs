//! Cyclic single-candidate policy improvement
//!
//! Unlike canonical policy iteration, which arg-maxes over every action per
//! state, each call here tests exactly ONE candidate action, the same one
//! for every state, with the candidate cycling backward through the action
//! list across calls. The solver keeps calling until a full pass changes
//! nothing.

use crate::{
    error::Result,
    game::DiceGame,
    solver::{evaluation::backup, policy::Policy, value_function::ValueFunction},
};

/// Outcome of one improvement pass.
#[derive(Debug, Clone, Copy)]
pub struct Improvement {
    /// The candidate cursor after this pass; feed it back into the next call.
    pub cursor: usize,
    /// False if any state's assigned action changed.
    pub stable: bool,
}

/// Test the next candidate action against every state, substituting it
/// wherever its one-step value strictly exceeds V(s).
///
/// The cursor walks backward through `game.actions()` and wraps from the
/// front back to the end, so successive calls cycle through the whole action
/// list starting from the terminal (hold-all) action's neighbors.
pub fn improve_policy(
    game: &DiceGame,
    v: &ValueFunction,
    policy: &mut Policy,
    cursor: usize,
    gamma: f64,
) -> Result<Improvement> {
    let actions = game.actions();
    let cursor = (cursor + actions.len() - 1) % actions.len();
    let candidate = &actions[cursor];

    let mut stable = true;
    for state in game.states() {
        let value = backup(game, v, state, candidate, gamma)?;
        if value > v.get(state) && policy.assign(state.clone(), candidate.clone()) {
            stable = false;
        }
    }

    Ok(Improvement { cursor, stable })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Action, DiceState, GameConfig};
    use crate::solver::iteration::DISCOUNT_FACTOR;

    fn coin_die_game() -> DiceGame {
        DiceGame::new(GameConfig::new().with_dice(1).with_sides(2).with_seed(0))
            .expect("config should build")
    }

    #[test]
    fn cursor_walks_backward_and_wraps() {
        let game = coin_die_game();
        let v = ValueFunction::zeroed(game.states());
        let mut policy = Policy::constant(game.states(), &Action::hold_all(1));

        // Two actions: cursor 1 steps to 0, then wraps back to 1.
        let first = improve_policy(&game, &v, &mut policy, 1, DISCOUNT_FACTOR)
            .expect("improvement should succeed");
        assert_eq!(first.cursor, 0);
        let second = improve_policy(&game, &v, &mut policy, first.cursor, DISCOUNT_FACTOR)
            .expect("improvement should succeed");
        assert_eq!(second.cursor, 1);
    }

    #[test]
    fn candidate_replaces_only_strictly_better_assignments() {
        let game = coin_die_game();
        let one = DiceState::new(vec![1]);
        let two = DiceState::new(vec![2]);

        let mut v = ValueFunction::zeroed(game.states());
        v.raise(&one, 10.0);
        v.raise(&two, 40.0);

        // Candidate after decrement from cursor 1 is the reroll action. Its
        // backup value is -1 + γ·(0.5·10 + 0.5·40) = 22.5: better than 10,
        // worse than 40.
        let mut policy = Policy::constant(game.states(), &Action::hold_all(1));
        let result = improve_policy(&game, &v, &mut policy, 1, DISCOUNT_FACTOR)
            .expect("improvement should succeed");

        assert!(!result.stable);
        assert_eq!(policy.action(&one).unwrap(), &Action::hold_none());
        assert_eq!(policy.action(&two).unwrap(), &Action::hold_all(1));
    }

    #[test]
    fn reassigning_the_same_action_is_stable() {
        let game = coin_die_game();
        let mut v = ValueFunction::zeroed(game.states());
        for state in game.states() {
            v.raise(state, 100.0);
        }

        // No candidate's backup can beat 100, so nothing changes.
        let mut policy = Policy::constant(game.states(), &Action::hold_all(1));
        let result = improve_policy(&game, &v, &mut policy, 1, DISCOUNT_FACTOR)
            .expect("improvement should succeed");
        assert!(result.stable);
    }
}
