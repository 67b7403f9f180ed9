//! Solve command - compute the optimal policy without playing

use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use clap::Parser;

use crate::{
    agent::OptimalAgent,
    cli::{config::GameArgs, output::print_kv},
    game::DiceGame,
};

#[derive(Parser, Debug)]
#[command(about = "Solve the optimal policy")]
pub struct SolveArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Print the full state -> action table
    #[arg(long)]
    pub show_policy: bool,

    /// Export the solved policy as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = args.game.to_config(None);
    let game = DiceGame::new(config)?;

    let start = Instant::now();
    let agent = OptimalAgent::new(&game)?;
    let solve_seconds = start.elapsed().as_secs_f64();

    println!("=== Solved Game ===");
    print_kv("States", &game.states().len().to_string());
    print_kv("Actions", &game.actions().len().to_string());
    print_kv("Solve time", &format!("{solve_seconds:.4}s"));

    if args.show_policy {
        println!();
        for (state, action) in agent.policy().entries_sorted() {
            println!("{state} -> {action}");
        }
    }

    if let Some(path) = &args.export {
        agent.policy().save(path)?;
        println!("Policy written to {}", path.display());
    }
    Ok(())
}
