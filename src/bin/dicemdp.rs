//! dicemdp CLI - optimal dice-game play via policy iteration
//!
//! This CLI provides:
//! - Solving a configured game's optimal policy and exporting it
//! - Playing a number of games with the solved (or a baseline) agent
//! - Per-run score reporting

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dicemdp")]
#[command(version, about = "Optimal play for a dice-rerolling game", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the game and play a number of games with the solved policy
    Play(dicemdp::cli::commands::play::PlayArgs),

    /// Solve the optimal policy and optionally print or export it
    Solve(dicemdp::cli::commands::solve::SolveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => dicemdp::cli::commands::play::execute(args),
        Commands::Solve(args) => dicemdp::cli::commands::solve::execute(args),
    }
}
