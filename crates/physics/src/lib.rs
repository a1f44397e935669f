#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Pendulum Physics
//!
//! The numerical core behind the pendulum environment: a single rigid
//! pendulum driven by a bounded external torque, damped by viscous friction
//! and pulled back towards its hanging position by gravity.
//!
//! ## Key Components
//!
//! -   **Phase:** [`Phase`] holds the angle and angular velocity of the
//!     pendulum. Angles are measured from the downward rest position and kept
//!     wrapped into `[0, 2π)` by [`wrap_angle`].
//! -   **Integrators:** [`Integrator`] selects between a semi-implicit Euler
//!     step and classic fourth-order Runge–Kutta.
//! -   **Dynamics:** [`Pendulum`] combines a set of [`PendulumParams`] with an
//!     integrator and advances a [`Phase`] by one control period.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{Pendulum, PendulumParams, Phase};
//!
//! let pendulum = Pendulum::new(PendulumParams::default()).unwrap();
//! let next = pendulum.advance(Phase::REST, 1.0);
//! assert!(next.velocity > 0.0);
//! ```

pub mod error;
pub mod integrator;
pub mod pendulum;
pub mod types;

pub use error::ParamError;
pub use integrator::Integrator;
pub use pendulum::{Pendulum, PendulumParams};
pub use types::{wrap_angle, Phase};
