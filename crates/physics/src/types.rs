use std::f32::consts::TAU;

/// Angle and angular velocity of the pendulum.
///
/// `angle == 0` is the hanging rest position and `angle == π` is upright.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Phase {
    pub angle: f32,
    pub velocity: f32,
}

impl Phase {
    /// Hanging straight down, not moving.
    pub const REST: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(angle: f32, velocity: f32) -> Self {
        Self { angle, velocity }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.angle.is_finite() && self.velocity.is_finite()
    }

    /// Same phase with the angle wrapped into `[0, 2π)`.
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self { angle: wrap_angle(self.angle), ..self }
    }
}

/// Map an angle into `[0, 2π)`.
///
/// `rem_euclid` can round up to exactly `2π` for tiny negative inputs, which
/// is folded back to `0`.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
