//! dicemdp: optimal play for a dice-rerolling game
//!
//! The game rolls a handful of biased dice; each turn the player holds a
//! subset and rerolls the rest at a penalty, and holding everything banks a
//! final score in which duplicated faces flip to the opposite side of the
//! die. This crate provides:
//! - A finite-MDP model of the game: canonical states, hold actions, and an
//!   exact multinomial transition model
//! - A policy-iteration solver (monotonic Bellman evaluation + cyclic
//!   single-candidate improvement)
//! - Agents that play the game, and a play loop with score reporting
//! - A CLI for solving and playing configured games

pub mod agent;
pub mod cli;
pub mod error;
pub mod game;
pub mod play;
pub mod solver;

pub use agent::{Agent, OptimalAgent, RandomAgent};
pub use error::{Error, Result};
pub use game::{Action, DiceGame, DiceState, GameConfig, Transitions};
pub use solver::{
    CONVERGENCE_THRESHOLD, DISCOUNT_FACTOR, Policy, PolicyIteration, ValueFunction,
    evaluate_policy, improve_policy,
};
