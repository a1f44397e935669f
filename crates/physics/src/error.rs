use thiserror::Error;

/// Rejected physical parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("time step must be finite and positive, got {0}")]
    TimeStep(f32),
    #[error("at least one integration substep is required")]
    NoSubsteps,
    #[error("friction must be finite and non-negative, got {0}")]
    Friction(f32),
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },
    #[error("max speed must be positive, got {0}")]
    MaxSpeed(f32),
}
