//! Torque-actuated pendulum dynamics
//!
//! This module couples the physical constants of a single pendulum with an
//! [`Integrator`] and exposes one entry point, [`Pendulum::advance`], which
//! moves a [`Phase`] forward by one control period.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;
use crate::integrator::Integrator;
use crate::types::Phase;

/// Physical constants and integration settings of a pendulum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumParams {
    /// Gravitational acceleration over pendulum length (1/s²)
    pub gravity: f32,
    /// Viscous friction coefficient (1/s)
    pub friction: f32,
    /// Angular acceleration produced by a full-strength action (rad/s²)
    pub torque: f32,
    /// Integrator step size in seconds
    pub dt: f32,
    /// Integrator steps per control period
    pub substeps: u32,
    /// Velocity magnitude limit applied after every substep, unbounded if `None`
    pub max_speed: Option<f32>,
    pub integrator: Integrator,
}

impl Default for PendulumParams {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            friction: 0.1,
            torque: 1.0,
            dt: 0.05,
            substeps: 4,
            max_speed: None,
            integrator: Integrator::Rk4,
        }
    }
}

impl PendulumParams {
    /// Check that every constant is usable by the integrator.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamError`] found.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ParamError::TimeStep(self.dt));
        }
        if self.substeps == 0 {
            return Err(ParamError::NoSubsteps);
        }
        if !(self.friction.is_finite() && self.friction >= 0.0) {
            return Err(ParamError::Friction(self.friction));
        }
        for (name, value) in [("gravity", self.gravity), ("torque", self.torque)] {
            if !value.is_finite() {
                return Err(ParamError::NotFinite { name, value });
            }
        }
        if let Some(max_speed) = self.max_speed {
            if max_speed.is_nan() || max_speed <= 0.0 {
                return Err(ParamError::MaxSpeed(max_speed));
            }
        }
        Ok(())
    }

    /// Simulated seconds covered by one call to [`Pendulum::advance`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn control_period(&self) -> f32 {
        self.dt * self.substeps as f32
    }
}

/// A pendulum with validated parameters.
#[derive(Clone, Debug)]
pub struct Pendulum {
    params: PendulumParams,
}

impl Default for Pendulum {
    fn default() -> Self {
        Self { params: PendulumParams::default() }
    }
}

impl Pendulum {
    /// Build a pendulum from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if the parameters fail [`PendulumParams::validate`].
    pub fn new(params: PendulumParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Angular acceleration at `phase` with the drive set to `action`
    /// (`-1.0` full negative torque, `1.0` full positive torque).
    #[must_use]
    pub fn acceleration(&self, phase: Phase, action: f32) -> f32 {
        let p = &self.params;
        p.torque * action.clamp(-1.0, 1.0) - p.friction * phase.velocity - p.gravity * phase.angle.sin()
    }

    /// Mechanical energy per unit inertia, zero at rest.
    #[must_use]
    pub fn energy(&self, phase: Phase) -> f32 {
        0.5 * phase.velocity * phase.velocity + self.params.gravity * (1.0 - phase.angle.cos())
    }

    /// Advance `phase` by one control period while holding `action` constant.
    ///
    /// Velocity is clipped and the angle wrapped into `[0, 2π)` after every
    /// substep.
    #[must_use]
    pub fn advance(&self, phase: Phase, action: f32) -> Phase {
        let p = &self.params;
        let mut current = phase;
        for _ in 0..p.substeps {
            let mut next = p
                .integrator
                .step(current, p.dt, |q| self.acceleration(q, action));
            if let Some(max_speed) = p.max_speed {
                next.velocity = next.velocity.clamp(-max_speed, max_speed);
            }
            current = next.wrapped();
        }
        current
    }
}
