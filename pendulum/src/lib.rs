//! # Pendulum Poke
//!
//! Documentation entry point for the pendulum poke workspace.
//!
//! ## Overview
//!
//! Pendulum poke is a small continuing-control benchmark for sequential
//! decision-making agents. A pendulum hangs at rest; the agent can push it
//! with a weak negative or positive torque, or leave it alone. The torque is
//! too weak to lift the pendulum directly, so an agent has to pump energy
//! into the swing to reach the upright band where reward is paid, while
//! random pokes knock the pendulum around.
//!
//! ## The Crates
//!
//! -   **`pendulum`:** The crate you are currently viewing. It hosts the
//!     `pendulum` binary, which runs rollouts with simple scripted policies
//!     and checks that state snapshots replay exactly.
//! -   **[`physics`]:** The equation of motion, the integrators and the
//!     physical parameters.
//! -   **[`rl`]:** The [`rl::Env`] interface, the [`rl::PendulumPoke`]
//!     environment, its configuration and the random generator that travels
//!     inside its state.
//!
//! ## Getting Started
//!
//! ```rust
//! use pendulum::rl::{Action, Env, PendulumPoke};
//!
//! let mut env = PendulumPoke::default();
//! assert_eq!(env.start(), [1.0, 0.0, 0.0]);
//! let (_obs, reward) = env.step(Action::Positive).unwrap();
//! assert_eq!(reward, 0.0);
//! ```

pub mod app;

pub use physics;
pub use rl;
