//! Game configuration with defaults and validation

use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a dice-rerolling game.
///
/// Every field defaults independently: 3 dice, 6 sides, face values
/// `1..=sides`, uniform bias weights, penalty 1. Values and biases stay
/// unset until overridden, so changing the side count alone still yields a
/// matching default domain.
///
/// # Examples
///
/// ```
/// use dicemdp::GameConfig;
///
/// let config = GameConfig::new()
///     .with_dice(2)
///     .with_sides(4)
///     .with_biases(vec![0.1, 0.2, 0.3, 0.4])
///     .with_seed(42);
/// assert_eq!(config.resolved_values(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of dice in play
    pub dice: usize,
    /// Number of sides per die
    pub sides: usize,
    /// Face values; `None` means `1..=sides`
    pub values: Option<Vec<i32>>,
    /// Probability of rolling each face; `None` means uniform
    pub biases: Option<Vec<f64>>,
    /// Cost subtracted from the score on every reroll
    pub penalty: f64,
    /// Random seed for the dice rolls; `None` is non-deterministic
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of dice.
    pub fn with_dice(mut self, dice: usize) -> Self {
        self.dice = dice;
        self
    }

    /// Set the number of sides per die.
    pub fn with_sides(mut self, sides: usize) -> Self {
        self.sides = sides;
        self
    }

    /// Override the face values.
    pub fn with_values(mut self, values: Vec<i32>) -> Self {
        self.values = Some(values);
        self
    }

    /// Override the per-face bias weights.
    pub fn with_biases(mut self, biases: Vec<f64>) -> Self {
        self.biases = Some(biases);
        self
    }

    /// Set the reroll penalty.
    pub fn with_penalty(mut self, penalty: f64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set the random seed for deterministic play.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Face values, defaulting to `1..=sides`.
    pub fn resolved_values(&self) -> Vec<i32> {
        self.values
            .clone()
            .unwrap_or_else(|| (1..=self.sides as i32).collect())
    }

    /// Bias weights, defaulting to uniform.
    pub fn resolved_biases(&self) -> Vec<f64> {
        self.biases
            .clone()
            .unwrap_or_else(|| vec![1.0 / self.sides as f64; self.sides])
    }

    /// Check the structural invariants the game model relies on.
    pub fn validate(&self) -> Result<()> {
        if self.dice == 0 {
            return Err(Error::InvalidConfiguration {
                message: "at least one die is required".to_string(),
            });
        }
        if self.sides == 0 {
            return Err(Error::InvalidConfiguration {
                message: "dice must have at least one side".to_string(),
            });
        }
        if let Some(values) = &self.values {
            if values.len() != self.sides {
                return Err(Error::InvalidConfiguration {
                    message: "values must have same length as sides".to_string(),
                });
            }
        }
        if let Some(biases) = &self.biases {
            if biases.len() != self.resolved_values().len() {
                return Err(Error::InvalidConfiguration {
                    message: "biases and values must be same length".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice: 3,
            sides: 6,
            values: None,
            biases: None,
            penalty: 1.0,
            seed: None,
        }
    }
}

/// Build the RNG for game play: seeded for reproducible runs, OS-seeded
/// otherwise.
pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}
