//! Environment configuration.
//!
//! A [`PokeConfig`] can be built in code or loaded from JSON. Every field is
//! optional in JSON and falls back to its default:
//!
//! ```json
//! {
//!   "physics": { "friction": 0.1, "dt": 0.05, "substeps": 4, "integrator": "rk4" },
//!   "poke_probability": 0.05,
//!   "poke_strength": 0.1,
//!   "reward_angle": 30.0,
//!   "seed": 1234
//! }
//! ```

use std::fs;
use std::path::Path;

use physics::PendulumParams;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings of a [`crate::PendulumPoke`] environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokeConfig {
    pub physics: PendulumParams,
    /// Chance per step that the pendulum receives a velocity poke
    pub poke_probability: f32,
    /// Pokes are drawn uniformly from `[-poke_strength, poke_strength)` rad/s.
    /// At the default no two pokes can swing a pendulum pushed from rest with
    /// two `Positive` steps back past the bottom.
    pub poke_strength: f32,
    /// Half-width in degrees of the upright band that earns reward
    pub reward_angle: f32,
    /// Seed for the generator created by `start()`, entropy if `None`
    pub seed: Option<u64>,
}

impl Default for PokeConfig {
    fn default() -> Self {
        Self {
            physics: PendulumParams::default(),
            poke_probability: 0.05,
            poke_strength: 0.1,
            reward_angle: 30.0,
            seed: None,
        }
    }
}

impl PokeConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// validation error otherwise.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`PokeConfig::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// # Errors
    ///
    /// Returns the first out-of-range setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        if !(0.0..=1.0).contains(&self.poke_probability) {
            return Err(ConfigError::Invalid(format!(
                "poke_probability must be within [0, 1], got {}",
                self.poke_probability
            )));
        }
        if !(self.poke_strength.is_finite() && self.poke_strength >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "poke_strength must be finite and non-negative, got {}",
                self.poke_strength
            )));
        }
        if !(self.reward_angle > 0.0 && self.reward_angle <= 180.0) {
            return Err(ConfigError::Invalid(format!(
                "reward_angle must be within (0, 180] degrees, got {}",
                self.reward_angle
            )));
        }
        Ok(())
    }

    /// Half-width of the rewarded band in radians.
    #[must_use]
    pub fn reward_angle_radians(&self) -> f32 {
        self.reward_angle.to_radians()
    }
}
