use std::fmt;

use crate::error::EnvError;

/// Observation vector `[cos(angle), sin(angle), velocity]`.
///
/// The raw angle is never exposed, so the observation is continuous across
/// the `0`/`2π` wrap.
pub type Observation = [f32; 3];

/// Scalar reward produced by a transition.
pub type Reward = f32;

/// Discrete torque selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Negative,
    Stay,
    Positive,
}

impl Action {
    pub const ALL: [Self; 3] = [Self::Negative, Self::Stay, Self::Positive];

    /// Sign of the applied torque.
    #[must_use]
    pub const fn torque_sign(self) -> f32 {
        match self {
            Self::Negative => -1.0,
            Self::Stay => 0.0,
            Self::Positive => 1.0,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Negative => "negative",
            Self::Stay => "stay",
            Self::Positive => "positive",
        };
        f.write_str(name)
    }
}

/// Reinforcement learning environment trait.
///
/// Environments are continuing: there is no terminal flag, an agent keeps
/// calling [`step`] for as long as it likes. The full state, including any
/// random generator, can be read out and written back for replay.
///
/// [`step`]: Env::step
pub trait Env {
    type State: Clone;

    /// Reset to the canonical start state and return its observation.
    fn start(&mut self) -> Observation;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotStarted`] if neither [`Env::start`] nor
    /// [`Env::set_state`] has been called yet.
    fn step(&mut self, action: Action) -> Result<(Observation, Reward), EnvError>;

    /// Snapshot of the current state, `None` before the environment starts.
    fn get_state(&self) -> Option<Self::State>;

    /// Replace the current state, mark the environment started and return
    /// the new observation.
    fn set_state(&mut self, state: Self::State) -> Observation;

    /// Size of the observation vector.
    fn observation_size(&self) -> usize;

    /// Number of discrete actions.
    fn num_actions(&self) -> usize;
}
