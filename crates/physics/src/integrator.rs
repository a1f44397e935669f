//! # Numerical Integration
//!
//! One-step integrators for the pendulum's second-order equation of motion,
//! written as the first-order system `θ' = ω`, `ω' = a(θ, ω)`.
//!
//! Both schemes are deterministic: the same phase, step size and
//! acceleration function always produce bit-identical results.

use serde::{Deserialize, Serialize};

use crate::types::Phase;

/// Integration scheme used by [`crate::Pendulum`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// Update the velocity first, then move the angle with the new velocity.
    SemiImplicitEuler,
    /// Classic fourth-order Runge–Kutta.
    #[default]
    Rk4,
}

impl Integrator {
    /// Advance `phase` by `dt` under the acceleration field `accel`.
    ///
    /// The returned angle is not wrapped.
    #[must_use]
    pub fn step<F>(self, phase: Phase, dt: f32, accel: F) -> Phase
    where
        F: Fn(Phase) -> f32,
    {
        match self {
            Self::SemiImplicitEuler => semi_implicit_euler(phase, dt, accel),
            Self::Rk4 => rk4(phase, dt, accel),
        }
    }
}

fn semi_implicit_euler<F: Fn(Phase) -> f32>(phase: Phase, dt: f32, accel: F) -> Phase {
    let velocity = phase.velocity + accel(phase) * dt;
    Phase::new(phase.angle + velocity * dt, velocity)
}

fn rk4<F: Fn(Phase) -> f32>(phase: Phase, dt: f32, accel: F) -> Phase {
    let half = 0.5 * dt;

    let k1 = (phase.velocity, accel(phase));

    let p2 = Phase::new(phase.angle + half * k1.0, phase.velocity + half * k1.1);
    let k2 = (p2.velocity, accel(p2));

    let p3 = Phase::new(phase.angle + half * k2.0, phase.velocity + half * k2.1);
    let k3 = (p3.velocity, accel(p3));

    let p4 = Phase::new(phase.angle + dt * k3.0, phase.velocity + dt * k3.1);
    let k4 = (p4.velocity, accel(p4));

    let sixth = dt / 6.0;
    Phase::new(
        phase.angle + sixth * (k1.0 + 2.0 * k2.0 + 2.0 * k3.0 + k4.0),
        phase.velocity + sixth * (k1.1 + 2.0 * k2.1 + 2.0 * k3.1 + k4.1),
    )
}
