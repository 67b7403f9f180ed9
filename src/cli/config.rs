//! Shared CLI arguments for configuring the game

use clap::Args;

use crate::game::GameConfig;

/// Game overrides shared by every subcommand. Anything left unset falls back
/// to the standard game: 3 dice, 6 sides, values 1..=6, uniform biases,
/// penalty 1.
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Number of dice
    #[arg(long, short = 'd')]
    pub dice: Option<usize>,

    /// Number of sides per die
    #[arg(long, short = 's')]
    pub sides: Option<usize>,

    /// Face values, comma separated (e.g. 1,2,3,4,5,6)
    #[arg(long, short = 'v', value_delimiter = ',')]
    pub values: Option<Vec<i32>>,

    /// Face probabilities, comma separated; must pair with --values
    #[arg(long, short = 'b', value_delimiter = ',')]
    pub biases: Option<Vec<f64>>,

    /// Penalty subtracted from the score on every reroll
    #[arg(long, short = 'p')]
    pub penalty: Option<f64>,
}

impl GameArgs {
    /// Fold the overrides into a [`GameConfig`].
    pub fn to_config(&self, seed: Option<u64>) -> GameConfig {
        let mut config = GameConfig::new();
        if let Some(dice) = self.dice {
            config = config.with_dice(dice);
        }
        if let Some(sides) = self.sides {
            config = config.with_sides(sides);
        }
        if let Some(values) = &self.values {
            config = config.with_values(values.clone());
        }
        if let Some(biases) = &self.biases {
            config = config.with_biases(biases.clone());
        }
        if let Some(penalty) = self.penalty {
            config = config.with_penalty(penalty);
        }
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> GameArgs {
        GameArgs {
            dice: None,
            sides: None,
            values: None,
            biases: None,
            penalty: None,
        }
    }

    #[test]
    fn unset_overrides_keep_the_defaults() {
        let config = empty_args().to_config(None);
        assert_eq!(config.dice, 3);
        assert_eq!(config.sides, 6);
        assert_eq!(config.penalty, 1.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn overrides_flow_into_the_config() {
        let mut args = empty_args();
        args.dice = Some(2);
        args.sides = Some(4);
        args.penalty = Some(0.5);
        let config = args.to_config(Some(99));
        assert_eq!(config.dice, 2);
        assert_eq!(config.sides, 4);
        assert_eq!(config.penalty, 0.5);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.resolved_values(), vec![1, 2, 3, 4]);
    }
}
