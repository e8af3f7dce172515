//! Per-motor state record.

use crate::config::units::{Degrees, StepsPerSec};
use crate::motion::StepMode;

/// State of one physical motor.
///
/// Handed out by [`MotorController`](super::MotorController) and consumed by
/// its `stop`. Not `Clone`: once stopped, the motor cannot be driven again.
#[derive(Debug, PartialEq)]
pub struct Motor {
    /// Motor name for logging/debugging.
    name: heapless::String<32>,

    /// Reserved enable flag, never set by this crate.
    operational: bool,

    /// Pacing rate, fixed at creation.
    speed: StepsPerSec,

    /// Mode used by named moves that do not pick one.
    default_mode: StepMode,

    /// Sum of commanded displacements.
    pub(crate) position: Degrees,

    /// Phase index of the last applied pattern.
    pub(crate) last_step: u8,
}

impl Motor {
    /// Names longer than 32 bytes are truncated.
    pub(crate) fn new(name: &str, speed: StepsPerSec) -> Self {
        Self::with_mode(name, speed, StepMode::Full)
    }

    pub(crate) fn with_mode(name: &str, speed: StepsPerSec, default_mode: StepMode) -> Self {
        let mut stored = heapless::String::new();
        for c in name.chars() {
            if stored.push(c).is_err() {
                break;
            }
        }

        Self {
            name: stored,
            operational: false,
            speed,
            default_mode,
            position: Degrees::default(),
            last_step: 0,
        }
    }

    /// Get the motor name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Reserved enable flag. Always `false`.
    #[inline]
    pub fn is_operational(&self) -> bool {
        self.operational
    }

    /// Get the pacing rate.
    #[inline]
    pub fn speed(&self) -> StepsPerSec {
        self.speed
    }

    /// Mode used by named moves that do not pick one.
    #[inline]
    pub fn default_mode(&self) -> StepMode {
        self.default_mode
    }

    /// Accumulated commanded position in degrees.
    ///
    /// Tracks requested displacements, so it can run ahead of the shaft by up
    /// to one step per `drive` call when displacements are not whole steps.
    #[inline]
    pub fn position(&self) -> Degrees {
        self.position
    }

    /// Phase index of the last applied pattern.
    #[inline]
    pub fn last_step(&self) -> u8 {
        self.last_step
    }
}
