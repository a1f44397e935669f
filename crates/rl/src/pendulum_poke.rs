use std::f32::consts::PI;

use physics::{wrap_angle, Pendulum, Phase};
use serde::{Deserialize, Serialize};

use crate::config::PokeConfig;
use crate::env::{Action, Env, Observation, Reward};
use crate::error::{ConfigError, EnvError};
use crate::rng::EnvRng;

/// Everything that determines the future of a [`PendulumPoke`] environment.
///
/// Two equal states stepped with the same actions stay equal bit for bit,
/// because the generator that draws the pokes travels with the state.
///
/// `angle` and `velocity` must be finite. A non-finite state installed through
/// [`Env::set_state`] panics in debug builds and turns every later
/// observation into NaN otherwise.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Radians from the hanging position, kept in `[0, 2π)` by the environment
    pub angle: f32,
    /// Radians per second
    pub velocity: f32,
    pub rng: EnvRng,
}

impl State {
    /// Hanging straight down and not moving.
    #[must_use]
    pub fn at_rest(rng: EnvRng) -> Self {
        Self { angle: 0.0, velocity: 0.0, rng }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::new(self.angle, self.velocity)
    }
}

/// Map a state to what the agent sees.
#[must_use]
pub fn observation(state: &State) -> Observation {
    [state.angle.cos(), state.angle.sin(), state.velocity]
}

/// `1.0` while the pendulum is within `band` radians of upright.
fn upright_reward(angle: f32, band: f32) -> Reward {
    if (wrap_angle(angle) - PI).abs() < band {
        1.0
    } else {
        0.0
    }
}

/// Torque-driven pendulum that is randomly poked.
///
/// The pendulum starts hanging at rest. Each step the agent picks one of
/// three torques; before the torque is integrated the pendulum may receive a
/// random velocity poke. Reward is sparse: `1.0` only while the pendulum is
/// held near upright, which the bounded torque cannot reach without pumping
/// energy into the swing.
pub struct PendulumPoke {
    config: PokeConfig,
    pendulum: Pendulum,
    state: Option<State>,
}

impl PendulumPoke {
    /// Create an environment that has not been started yet.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(config: PokeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pendulum = Pendulum::new(config.physics.clone())?;
        Ok(Self { config, pendulum, state: None })
    }

    #[must_use]
    pub fn config(&self) -> &PokeConfig {
        &self.config
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.state.is_some()
    }

    /// Reward earned by being in `state`.
    #[must_use]
    pub fn reward(&self, state: &State) -> Reward {
        upright_reward(state.angle, self.config.reward_angle_radians())
    }

    fn fresh_rng(&self) -> EnvRng {
        self.config.seed.map_or_else(EnvRng::from_entropy, EnvRng::with_seed)
    }
}

impl Default for PendulumPoke {
    fn default() -> Self {
        let config = PokeConfig::default();
        let pendulum = Pendulum::default();
        Self { config, pendulum, state: None }
    }
}

impl Env for PendulumPoke {
    type State = State;

    fn start(&mut self) -> Observation {
        let state = State::at_rest(self.fresh_rng());
        tracing::debug!(rng = state.rng.seed_state(), "pendulum started at rest");
        let obs = observation(&state);
        self.state = Some(state);
        obs
    }

    fn step(&mut self, action: Action) -> Result<(Observation, Reward), EnvError> {
        let state = self.state.as_mut().ok_or(EnvError::NotStarted)?;

        // Both draws happen every step so the generator advances by a fixed
        // amount regardless of whether a poke lands.
        let strength = self.config.poke_strength;
        let roll = state.rng.uniform();
        let kick = state.rng.uniform_range(-strength, strength);
        if roll < self.config.poke_probability {
            tracing::debug!(kick, velocity = state.velocity, "pendulum poked");
            state.velocity += kick;
        }

        let next = self.pendulum.advance(state.phase(), action.torque_sign());
        state.angle = next.angle;
        state.velocity = next.velocity;

        let reward = upright_reward(state.angle, self.config.reward_angle_radians());
        tracing::trace!(%action, angle = state.angle, velocity = state.velocity, reward, "step");
        Ok((observation(state), reward))
    }

    fn get_state(&self) -> Option<State> {
        self.state.clone()
    }

    fn set_state(&mut self, mut state: State) -> Observation {
        debug_assert!(
            state.phase().is_finite(),
            "non-finite state: angle={}, velocity={}",
            state.angle,
            state.velocity
        );
        state.angle = wrap_angle(state.angle);
        tracing::debug!(angle = state.angle, velocity = state.velocity, "state installed");
        let obs = observation(&state);
        self.state = Some(state);
        obs
    }

    fn observation_size(&self) -> usize {
        3
    }

    fn num_actions(&self) -> usize {
        Action::ALL.len()
    }
}
