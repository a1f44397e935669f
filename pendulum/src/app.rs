//! # Rollout Driver
//!
//! Drives an [`Env`] with a scripted [`Policy`] and checks snapshot replay.
//! The binary in `main.rs` only parses arguments and hands off to the
//! functions here.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use rl::{Action, Env, EnvError, Observation, PokeConfig};
use tracing::Level;

/// Scripted behaviour used to pick actions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Uniformly random actions
    Random,
    /// Always push negative
    Negative,
    /// Always push positive
    Positive,
    /// Never push
    Stay,
    /// Push in the direction of motion to pump energy into the swing
    Pump,
}

/// Action selector for a [`Policy`].
///
/// The agent owns its own generator, separate from the one inside the
/// environment state, so replaying a state is unaffected by how actions were
/// chosen.
pub struct Agent {
    policy: Policy,
    rng: fastrand::Rng,
}

impl Agent {
    #[must_use]
    pub fn new(policy: Policy, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        Self { policy, rng }
    }

    pub fn act(&mut self, obs: &Observation) -> Action {
        match self.policy {
            Policy::Random => Action::from_index(self.rng.usize(..Action::ALL.len()))
                .unwrap_or(Action::Stay),
            Policy::Negative => Action::Negative,
            Policy::Positive => Action::Positive,
            Policy::Stay => Action::Stay,
            Policy::Pump => {
                if obs[2] < 0.0 {
                    Action::Negative
                } else {
                    Action::Positive
                }
            }
        }
    }
}

/// Outcome of a call to [`rollout`].
#[derive(Clone, Debug, PartialEq)]
pub struct RolloutSummary {
    pub steps: usize,
    pub total_reward: f32,
    pub rewarded_steps: usize,
    pub max_speed: f32,
    pub final_observation: Observation,
}

/// Start `env` and run `steps` actions chosen by `agent`.
///
/// Progress is logged every `log_every` steps; `0` disables it.
///
/// # Errors
///
/// Propagates any [`EnvError`] from the environment.
pub fn rollout<E: Env>(
    env: &mut E,
    agent: &mut Agent,
    steps: usize,
    log_every: usize,
) -> Result<RolloutSummary, EnvError> {
    let mut obs = env.start();
    let mut summary = RolloutSummary {
        steps: 0,
        total_reward: 0.0,
        rewarded_steps: 0,
        max_speed: 0.0,
        final_observation: obs,
    };

    for i in 0..steps {
        let action = agent.act(&obs);
        let (next, reward) = env.step(action)?;
        obs = next;
        summary.steps += 1;
        summary.total_reward += reward;
        if reward > 0.0 {
            summary.rewarded_steps += 1;
        }
        summary.max_speed = summary.max_speed.max(obs[2].abs());

        if log_every > 0 && (i + 1) % log_every == 0 {
            tracing::info!(
                "Step {} complete. obs = [{:.3}, {:.3}, {:.3}], total reward = {}",
                i + 1,
                obs[0],
                obs[1],
                obs[2],
                summary.total_reward
            );
        }
    }

    summary.final_observation = obs;
    Ok(summary)
}

/// Snapshot `env` right after `start`, run `steps` random actions, restore
/// the snapshot and replay the same actions.
///
/// Returns the number of steps compared.
///
/// # Errors
///
/// Fails if any replayed observation or reward differs from the original.
pub fn replay_check<E: Env>(env: &mut E, steps: usize, seed: Option<u64>) -> Result<usize> {
    let mut obs = env.start();
    let snapshot = env
        .get_state()
        .context("environment has no state right after start")?;

    let mut agent = Agent::new(Policy::Random, seed);
    let mut actions = Vec::with_capacity(steps);
    let mut original = Vec::with_capacity(steps);
    for _ in 0..steps {
        let action = agent.act(&obs);
        let transition = env.step(action)?;
        obs = transition.0;
        actions.push(action);
        original.push(transition);
    }

    env.set_state(snapshot);
    for (i, (action, expected)) in actions.into_iter().zip(original).enumerate() {
        let replayed = env.step(action)?;
        if replayed != expected {
            bail!("replay diverged at step {i}: expected {expected:?}, got {replayed:?}");
        }
    }
    Ok(steps)
}

/// Load the config file if given, then apply a seed override.
///
/// # Errors
///
/// Returns any config read, parse or validation error.
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<PokeConfig> {
    let mut config = match path {
        Some(path) => PokeConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PokeConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// Install the global `tracing` subscriber. `verbose` counts `-v` flags.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();
}
