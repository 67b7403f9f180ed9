//! Fixed-policy Bellman evaluation

use crate::{
    error::Result,
    game::{Action, DiceGame, DiceState},
    solver::{policy::Policy, value_function::ValueFunction},
};

/// One-step lookahead value of taking `action` in `state` under the current
/// value function.
///
/// Non-terminal: Σᵢ P(sᵢ') · (reward + γ·V(sᵢ')).
///
/// Terminal: reward + γ·V(s). The terminal transition bootstraps on the
/// pre-update value of its own state rather than cutting the recursion off at
/// the reward, which changes the numbers the solve converges to. The terminal
/// transition reports the state itself as its single certain successor, so
/// the two formulas stay consistent.
pub(crate) fn backup(
    game: &DiceGame,
    v: &ValueFunction,
    state: &DiceState,
    action: &Action,
    gamma: f64,
) -> Result<f64> {
    let transitions = game.next_states(state, action)?;
    if transitions.game_over {
        return Ok(transitions.reward + gamma * v.get(state));
    }

    let mut value = 0.0;
    for (next, probability) in transitions.states.iter().zip(&transitions.probabilities) {
        value += probability * (transitions.reward + gamma * v.get(next));
    }
    Ok(value)
}

/// Refine `v` under a fixed policy until it stops moving.
///
/// Sweeps every state in the game's fixed enumeration order, raising each
/// value to its one-step lookahead under π(s). Updates are applied in place,
/// so later states in a sweep see values already raised earlier in the same
/// sweep (Gauss-Seidel, not a two-buffer Jacobi sweep). A sweep whose largest
/// change falls below `theta` ends the evaluation.
pub fn evaluate_policy(
    game: &DiceGame,
    v: &mut ValueFunction,
    policy: &Policy,
    gamma: f64,
    theta: f64,
) -> Result<()> {
    loop {
        let mut delta: f64 = 0.0;
        for state in game.states() {
            let action = policy.action(state)?;
            let candidate = backup(game, v, state, action, gamma)?;
            delta = delta.max(v.raise(state, candidate));
        }
        if delta < theta {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::solver::iteration::{CONVERGENCE_THRESHOLD, DISCOUNT_FACTOR};

    fn coin_die_game() -> DiceGame {
        DiceGame::new(GameConfig::new().with_dice(1).with_sides(2).with_seed(0))
            .expect("config should build")
    }

    #[test]
    fn terminal_backup_bootstraps_on_its_own_state() {
        let game = coin_die_game();
        let state = DiceState::new(vec![2]);
        let mut v = ValueFunction::zeroed(game.states());
        v.raise(&state, 10.0);

        let value = backup(&game, &v, &state, &Action::hold_all(1), DISCOUNT_FACTOR)
            .expect("valid inputs");
        // final_score([2]) = 2, plus γ times the state's own current value.
        assert!((value - (2.0 + DISCOUNT_FACTOR * 10.0)).abs() < 1e-12);
    }

    #[test]
    fn nonterminal_backup_averages_over_outcomes() {
        let game = coin_die_game();
        let one = DiceState::new(vec![1]);
        let two = DiceState::new(vec![2]);
        let mut v = ValueFunction::zeroed(game.states());
        v.raise(&one, 4.0);
        v.raise(&two, 8.0);

        let value = backup(&game, &v, &one, &Action::hold_none(), DISCOUNT_FACTOR)
            .expect("valid inputs");
        let expected = 0.5 * (-1.0 + DISCOUNT_FACTOR * 4.0) + 0.5 * (-1.0 + DISCOUNT_FACTOR * 8.0);
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn evaluation_never_lowers_a_value() {
        let game = coin_die_game();
        let policy = Policy::constant(game.states(), &Action::hold_all(1));
        let mut v = ValueFunction::zeroed(game.states());

        let before: Vec<f64> = game.states().iter().map(|s| v.get(s)).collect();
        evaluate_policy(&game, &mut v, &policy, DISCOUNT_FACTOR, CONVERGENCE_THRESHOLD)
            .expect("evaluation should succeed");
        for (state, old) in game.states().iter().zip(before) {
            assert!(v.get(state) >= old);
        }
    }

    #[test]
    fn hold_all_policy_converges_toward_the_geometric_fixed_point() {
        // Under the always-hold policy, V(s) satisfies V = score + γ·V, so
        // the evaluation climbs toward score / (1 - γ).
        let game = coin_die_game();
        let policy = Policy::constant(game.states(), &Action::hold_all(1));
        let mut v = ValueFunction::zeroed(game.states());
        evaluate_policy(&game, &mut v, &policy, DISCOUNT_FACTOR, CONVERGENCE_THRESHOLD)
            .expect("evaluation should succeed");

        let limit_one = 1.0 / (1.0 - DISCOUNT_FACTOR);
        let limit_two = 2.0 / (1.0 - DISCOUNT_FACTOR);
        let got_one = v.get(&DiceState::new(vec![1]));
        let got_two = v.get(&DiceState::new(vec![2]));
        assert!(got_one <= limit_one && limit_one - got_one < 0.1);
        assert!(got_two <= limit_two && limit_two - got_two < 0.1);
    }
}
