//! # Pendulum Runtime
//!
//! Entry point for the `pendulum` binary.
//!
//! `run` drives the pendulum poke environment with a scripted policy and
//! reports the reward it collected; `replay` verifies that restoring a state
//! snapshot reproduces the original trajectory exactly.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use pendulum::app::{self, Agent, Policy};
use rl::PendulumPoke;

#[derive(Parser)]
#[command(name = "pendulum", version, about = "Run the pendulum poke environment")]
struct Cli {
    /// JSON config file, defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the environment and the agent
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a rollout with a scripted policy
    Run {
        #[arg(long, default_value_t = 500)]
        steps: usize,
        #[arg(long, value_enum, default_value_t = Policy::Pump)]
        policy: Policy,
        /// Log progress every N steps, 0 to disable
        #[arg(long, default_value_t = 50)]
        log_every: usize,
    },
    /// Check that a restored snapshot replays the same trajectory
    Replay {
        #[arg(long, default_value_t = 200)]
        steps: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    app::init_tracing(cli.verbose);

    let config = app::load_config(cli.config.as_deref(), cli.seed)?;
    tracing::info!(
        "Initializing pendulum poke environment ({} s per step)...",
        config.physics.control_period()
    );
    let mut env = PendulumPoke::new(config)?;

    match cli.command {
        Command::Run { steps, policy, log_every } => {
            let mut agent = Agent::new(policy, cli.seed);
            tracing::info!("Starting {:?} rollout for {} steps...", policy, steps);
            let summary = app::rollout(&mut env, &mut agent, steps, log_every)?;
            tracing::info!(
                "Rollout finished: {} steps, total reward {}, {} rewarded steps, final observation {:?}",
                summary.steps,
                summary.total_reward,
                summary.rewarded_steps,
                summary.final_observation
            );
        }
        Command::Replay { steps } => {
            let compared = app::replay_check(&mut env, steps, cli.seed)?;
            tracing::info!("Replay matched the original trajectory for {} steps.", compared);
        }
    }

    Ok(())
}
