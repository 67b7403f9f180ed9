//! Dice game engine: state/action spaces, transition model, and play state
//!
//! The game rolls a fixed number of biased dice. Each turn the player holds a
//! subset of the dice and rerolls the rest, paying a penalty; holding every
//! die ends the game and banks the final score, where any face value showing
//! more than once is flipped to the value on the opposite side of the die
//! before summing.
//!
//! The engine is two things at once: an immutable finite-MDP description
//! (state space, action space, exact transition probabilities) consumed by
//! the solver, and a mutable table position (current dice, running score)
//! consumed by the play loop.

use std::collections::{HashMap, HashSet};

use rand::{
    distr::{Distribution, weighted::WeightedIndex},
    rngs::StdRng,
};

use crate::{
    error::{Error, Result},
    game::{
        combinatorics::{combinations, face_counts, multinomial_pmf, multisets},
        config::{GameConfig, build_rng},
        state::{Action, DiceState},
    },
};

/// One-step transition: everything reachable from a (state, action) pair.
#[derive(Debug, Clone)]
pub struct Transitions {
    /// Reachable next states, canonicalized. The terminal action yields
    /// exactly one entry: the state itself.
    pub states: Vec<DiceState>,
    /// True when the action holds every die and ends the game.
    pub game_over: bool,
    /// Reward attached to the transition: the final score when terminal,
    /// `-penalty` otherwise.
    pub reward: f64,
    /// Probability of reaching each entry of `states`; sums to 1.
    pub probabilities: Vec<f64>,
}

/// A fully-specified dice game.
#[derive(Debug)]
pub struct DiceGame {
    dice: usize,
    sides: usize,
    values: Vec<i32>,
    biases: Vec<f64>,
    penalty: f64,
    /// Face value paired with the value physically opposite it on the die.
    opposite: HashMap<i32, i32>,
    states: Vec<DiceState>,
    state_set: HashSet<DiceState>,
    actions: Vec<Action>,
    action_set: HashSet<Action>,
    sampler: WeightedIndex<f64>,
    rng: StdRng,
    current: Vec<i32>,
    score: f64,
    game_over: bool,
}

impl DiceGame {
    /// Build the game from a configuration and deal the opening roll.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] on length mismatches or
    /// degenerate bias weights.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let dice = config.dice;
        let sides = config.sides;
        let values = config.resolved_values();
        let biases = config.resolved_biases();

        // Face i is opposite face sides-1-i, like the two ends of a die.
        let opposite: HashMap<i32, i32> = values
            .iter()
            .copied()
            .zip(values.iter().rev().copied())
            .collect();

        let states: Vec<DiceState> = multisets(sides, dice)
            .into_iter()
            .map(|combo| DiceState::new(combo.into_iter().map(|i| values[i]).collect()))
            .collect();
        let state_set: HashSet<DiceState> = states.iter().cloned().collect();

        let mut actions = vec![Action::hold_none()];
        for size in 1..=dice {
            for held in combinations(dice, size) {
                actions.push(Action::new(held));
            }
        }
        let action_set: HashSet<Action> = actions.iter().cloned().collect();

        let sampler = WeightedIndex::new(biases.iter().copied()).map_err(|source| {
            Error::InvalidConfiguration {
                message: format!("invalid bias weights: {source}"),
            }
        })?;
        let rng = build_rng(config.seed);

        let mut game = Self {
            dice,
            sides,
            values,
            biases,
            penalty: config.penalty,
            opposite,
            states,
            state_set,
            actions,
            action_set,
            sampler,
            rng,
            current: vec![0; dice],
            score: 0.0,
            game_over: false,
        };
        game.reset();
        Ok(game)
    }

    /// Every canonical dice state, in the fixed enumeration order the solver
    /// sweeps in.
    pub fn states(&self) -> &[DiceState] {
        &self.states
    }

    /// Every hold action: the empty set first, then subsets by ascending
    /// size. The full hold (terminal) action is last; the improvement cycle
    /// depends on this order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Running score of the game in progress.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// True once the terminal action has been played.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Current dice as a canonical state.
    pub fn current_state(&self) -> DiceState {
        DiceState::new(self.current.clone())
    }

    pub fn penalty(&self) -> f64 {
        self.penalty
    }

    fn opposite_face(&self, face: i32) -> i32 {
        *self
            .opposite
            .get(&face)
            .expect("face value outside the configured domain")
    }

    /// Final score of a state: faces showing more than once are flipped to
    /// their opposite value and contribute `opposite * count`; unique faces
    /// contribute themselves.
    pub fn final_score(&self, state: &DiceState) -> i32 {
        grouped(state.faces())
            .map(|(face, count)| {
                if count > 1 {
                    self.opposite_face(face) * count as i32
                } else {
                    face
                }
            })
            .sum()
    }

    /// Transition model: reachable next states, terminal flag, reward, and
    /// exact probabilities for taking `action` in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] / [`Error::InvalidAction`] when either
    /// input is not part of this game.
    pub fn next_states(&self, state: &DiceState, action: &Action) -> Result<Transitions> {
        if !self.state_set.contains(state) {
            return Err(Error::InvalidState {
                state: state.to_string(),
            });
        }
        if !self.action_set.contains(action) {
            return Err(Error::InvalidAction {
                action: action.to_string(),
            });
        }

        if action.holds_all(self.dice) {
            return Ok(Transitions {
                states: vec![state.clone()],
                game_over: true,
                reward: f64::from(self.final_score(state)),
                probabilities: vec![1.0],
            });
        }

        let reroll = self.dice - action.hold_count();
        let held: Vec<i32> = action.held().iter().map(|&i| state.faces()[i]).collect();

        let outcomes = multisets(self.sides, reroll);
        let mut states = Vec::with_capacity(outcomes.len());
        let mut probabilities = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            probabilities.push(multinomial_pmf(
                &face_counts(&outcome, self.sides),
                &self.biases,
            ));
            let mut faces = held.clone();
            faces.extend(outcome.into_iter().map(|i| self.values[i]));
            states.push(DiceState::new(faces));
        }

        Ok(Transitions {
            states,
            game_over: false,
            reward: -self.penalty,
            probabilities,
        })
    }

    /// Play one turn: reroll the dice not held by `action`.
    ///
    /// The terminal action flips duplicated faces to their opposite values in
    /// place, banks their sum into the score, and ends the game. Any other
    /// action redraws the unheld dice and subtracts the penalty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] for an unrecognized action and
    /// [`Error::GameOver`] when the game has already ended.
    pub fn roll(&mut self, action: &Action) -> Result<(DiceState, bool)> {
        if !self.action_set.contains(action) {
            return Err(Error::InvalidAction {
                action: action.to_string(),
            });
        }
        if self.game_over {
            return Err(Error::GameOver);
        }

        if action.holds_all(self.dice) {
            self.flip_duplicates();
            self.score += f64::from(self.current.iter().sum::<i32>());
            self.game_over = true;
            Ok((self.current_state(), true))
        } else {
            self.reroll_unheld(action);
            self.score -= self.penalty;
            Ok((self.current_state(), false))
        }
    }

    /// Start a fresh game and deal the opening roll.
    ///
    /// The score starts at `penalty` and the opening roll, being a
    /// non-terminal roll of every die, immediately subtracts `penalty` again:
    /// the score is exactly 0 after reset for any penalty value.
    pub fn reset(&mut self) -> DiceState {
        self.game_over = false;
        self.score = self.penalty;
        self.current = vec![0; self.dice];
        self.reroll_unheld(&Action::hold_none());
        self.score -= self.penalty;
        self.current_state()
    }

    /// Flip every face value that appears more than once to its opposite,
    /// then restore canonical order.
    fn flip_duplicates(&mut self) {
        let duplicated: Vec<i32> = grouped(&self.current)
            .filter(|&(_, count)| count > 1)
            .map(|(face, _)| face)
            .collect();
        if !duplicated.is_empty() {
            for i in 0..self.current.len() {
                if duplicated.contains(&self.current[i]) {
                    self.current[i] = self.opposite_face(self.current[i]);
                }
            }
        }
        self.current.sort_unstable();
    }

    /// Redraw every die not held by `action` from the biased face
    /// distribution, then restore canonical order.
    fn reroll_unheld(&mut self, action: &Action) {
        for i in 0..self.dice {
            if !action.holds(i) {
                self.current[i] = self.values[self.sampler.sample(&mut self.rng)];
            }
        }
        self.current.sort_unstable();
    }
}

/// Group sorted faces into (face, occurrence count) runs.
fn grouped(faces: &[i32]) -> impl Iterator<Item = (i32, usize)> {
    faces.chunk_by(|a, b| a == b).map(|run| (run[0], run.len()))
}
