#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Pendulum Poke Environment
//!
//! A continuing control benchmark: a torque-limited pendulum that has to be
//! swung up and held upright while it is randomly poked.
//!
//! -   [`Env`] is the interface agents drive: `start`, `step`, `get_state`
//!     and `set_state`.
//! -   [`PendulumPoke`] implements it on top of [`physics::Pendulum`].
//! -   [`State`] carries the angle, the angular velocity and the [`EnvRng`]
//!     that draws the pokes, so a snapshot replays exactly.
//! -   [`PokeConfig`] holds the tunable constants and loads from JSON.

pub mod config;
pub mod env;
pub mod error;
pub mod pendulum_poke;
pub mod rng;

pub use config::PokeConfig;
pub use env::{Action, Env, Observation, Reward};
pub use error::{ConfigError, EnvError};
pub use pendulum_poke::{observation, PendulumPoke, State};
pub use rng::EnvRng;
