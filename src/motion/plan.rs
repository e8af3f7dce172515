//! Step plan calculation.
//!
//! Turns a commanded displacement into a step count, a direction and a
//! constant inter-step delay.

use crate::config::units::{Degrees, StepsPerSec};

use super::phase::StepMode;

/// Direction of rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Phase index walks upward.
    Forward,
    /// Phase index walks downward.
    Reverse,
}

impl Direction {
    /// Direction of a signed displacement. Zero counts as reverse, which is
    /// harmless since a zero displacement has no steps.
    #[inline]
    pub fn from_degrees(displacement: Degrees) -> Self {
        if displacement.0 > 0.0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    /// Whether the phase index walks upward.
    #[inline]
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}

/// Computed plan for one `drive` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    /// Stepping mode.
    pub mode: StepMode,

    /// Requested displacement, including any sub-step remainder.
    pub displacement: Degrees,

    /// Whole steps to execute; the remainder below one step is dropped.
    pub steps: u32,

    /// Direction of the phase walk.
    pub direction: Direction,

    /// Blocking wait after each step, in microseconds.
    pub delay_us: u32,
}

impl StepPlan {
    /// Plan a displacement at the given pacing rate.
    ///
    /// The per-step delay is `1e6 / speed * step_size` rounded to the
    /// nearest microsecond, not truncated: 720 steps/s gives exactly 2500 µs
    /// per full step, where truncating the float quotient can yield 2499.
    ///
    /// `speed` is not checked: zero or negative rates yield a saturated or
    /// zero delay. Validated configuration never produces such a motor.
    pub fn new(mode: StepMode, displacement: Degrees, speed: StepsPerSec) -> Self {
        let step_size = mode.step_size().0;
        let steps = libm::floorf(libm::fabsf(displacement.0) / step_size) as u32;
        let delay_us = libm::roundf(1_000_000.0 / speed.0 * step_size) as u32;

        Self {
            mode,
            displacement,
            steps,
            direction: Direction::from_degrees(displacement),
            delay_us,
        }
    }

    /// Whether the plan executes no step at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// Angle actually covered by `completed` steps of this plan.
    #[inline]
    pub fn executed_angle(&self, completed: u32) -> Degrees {
        Degrees(completed as f32 * self.mode.step_size().0 * self.direction.sign())
    }

    /// Total blocking time of the plan in microseconds.
    #[inline]
    pub fn estimated_duration_us(&self) -> u64 {
        u64::from(self.steps) * u64::from(self.delay_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: StepsPerSec = StepsPerSec(720.0);

    #[test]
    fn test_full_revolution() {
        let plan = StepPlan::new(StepMode::Full, Degrees(360.0), SPEED);
        assert_eq!(plan.steps, 200);
        assert_eq!(plan.direction, Direction::Forward);
        assert_eq!(plan.delay_us, 2500);
        assert_eq!(plan.estimated_duration_us(), 500_000);
    }

    #[test]
    fn test_half_step_doubles_count_and_halves_delay() {
        let plan = StepPlan::new(StepMode::Half, Degrees(-360.0), SPEED);
        assert_eq!(plan.steps, 400);
        assert_eq!(plan.direction, Direction::Reverse);
        assert_eq!(plan.delay_us, 1250);
    }

    #[test]
    fn test_delay_rounds_to_nearest_microsecond() {
        // 1e6 / 1300 * 1.8 = 1384.6
        let plan = StepPlan::new(StepMode::Full, Degrees(1.8), StepsPerSec(1300.0));
        assert_eq!(plan.delay_us, 1385);

        // 1e6 / 1100 * 1.8 = 1636.4
        let plan = StepPlan::new(StepMode::Full, Degrees(1.8), StepsPerSec(1100.0));
        assert_eq!(plan.delay_us, 1636);
    }

    #[test]
    fn test_remainder_is_dropped() {
        let plan = StepPlan::new(StepMode::Full, Degrees(1.0), SPEED);
        assert!(plan.is_empty());

        let plan = StepPlan::new(StepMode::Full, Degrees(10.0), SPEED);
        assert_eq!(plan.steps, 5);
    }

    #[test]
    fn test_zero_displacement() {
        let plan = StepPlan::new(StepMode::Half, Degrees(0.0), SPEED);
        assert!(plan.is_empty());
        assert_eq!(plan.estimated_duration_us(), 0);
    }

    #[test]
    fn test_executed_angle_is_signed() {
        let plan = StepPlan::new(StepMode::Full, Degrees(-90.0), SPEED);
        assert_eq!(plan.executed_angle(0), Degrees(0.0));
        assert!((plan.executed_angle(3).0 + 5.4).abs() < 1e-4);
    }
}
