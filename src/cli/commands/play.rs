//! Play command - solve the game, then play it for a number of games

use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use clap::Parser;

use crate::{
    agent::{Agent, OptimalAgent, RandomAgent},
    cli::{config::GameArgs, output::create_play_progress},
    game::DiceGame,
    play::{PlaySummary, play_game},
};

#[derive(Parser, Debug)]
#[command(about = "Solve the game and play it")]
pub struct PlayArgs {
    /// Number of games to play
    #[arg(long, short = 'n', default_value_t = 10)]
    pub games: usize,

    /// Random seed for the dice rolls (and the random agent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Agent to play with (`optimal` or `random`)
    #[arg(long, default_value = "optimal")]
    pub agent: String,

    /// Print every roll and action
    #[arg(long)]
    pub verbose: bool,

    #[command(flatten)]
    pub game: GameArgs,

    /// Export the run summary as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.game.to_config(args.seed);
    let mut game = DiceGame::new(config)?;

    let solve_start = Instant::now();
    let mut agent: Box<dyn Agent> = match args.agent.to_lowercase().as_str() {
        "optimal" => Box::new(OptimalAgent::new(&game)?),
        "random" => {
            let mut random = RandomAgent::new(&game);
            // Offset the agent seed so its draws are not correlated with the
            // game's dice stream.
            if let Some(seed) = args.seed {
                random = random.with_seed(seed + 1);
            }
            Box::new(random)
        }
        other => {
            return Err(anyhow::anyhow!(
                "Unknown agent type: '{other}'. Supported: optimal, random"
            ));
        }
    };
    let solve_seconds = solve_start.elapsed().as_secs_f64();
    let agent_name = agent.name().to_string();

    let progress =
        (!args.verbose && args.games > 1).then(|| create_play_progress(args.games as u64));

    let mut scores = Vec::with_capacity(args.games);
    for i in 1..=args.games {
        if args.verbose {
            println!("Game {i}:");
        }

        let score = play_game(&mut game, agent.as_mut(), args.verbose)?;
        scores.push(score);

        if args.verbose {
            println!("Game {i} score: {score}");
            println!("----------------------");
        }
        if let Some(pb) = &progress {
            pb.inc(1);
            let running_avg: f64 = scores.iter().sum::<f64>() / scores.len() as f64;
            pb.set_message(format!("avg {running_avg:.2}"));
        }
    }
    if let Some(pb) = &progress {
        pb.finish();
    }

    let summary = PlaySummary::new(agent_name, scores, solve_seconds);
    println!();
    println!("Time to find optimal policy: {solve_seconds:.4}s");
    println!(
        "Average score over {} games: {}",
        summary.games, summary.average_score
    );

    if let Some(path) = &args.export {
        summary.save(path)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}
