//! Dice game model: configuration, state/action spaces, and the transition
//! model consumed by the solver.

pub mod combinatorics;
pub mod config;
pub mod engine;
pub mod state;

// Public re-exports
pub use config::GameConfig;
pub use engine::{DiceGame, Transitions};
pub use state::{Action, DiceState};
