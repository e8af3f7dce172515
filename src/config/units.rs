//! Unit types for physical quantities.
//!
//! Keeps angles and pacing rates apart at compile time.

use core::ops::{Add, AddAssign, Neg, Sub};

use serde::Deserialize;

/// Angular displacement or position in degrees.
///
/// Positive values turn forward, negative values turn in reverse.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// Magnitude of the displacement.
    #[inline]
    pub fn abs(self) -> Self {
        Self(libm::fabsf(self.0))
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Degrees {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Pacing rate in steps per second.
///
/// The inter-step delay is `1e6 / rate * step_size` microseconds, so a
/// motor configured at 720 waits 2500 µs per full step.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct StepsPerSec(pub f32);

impl StepsPerSec {
    /// Whether the rate can pace a motor (finite and strictly positive).
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}
