//! Named move and sequence configuration.

use heapless::{String, Vec};
use serde::Deserialize;

use super::units::Degrees;
use crate::motion::StepMode;

/// Maximum number of steps in one sequence.
pub const MAX_SEQUENCE_STEPS: usize = 32;

/// A single named displacement for one motor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveConfig {
    /// Motor key in `[motors]`.
    pub motor: String<32>,

    /// Stepping mode; falls back to the motor's default mode.
    #[serde(default)]
    pub mode: Option<StepMode>,

    /// Signed displacement in degrees.
    pub degrees: Degrees,
}

/// One entry of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SequenceStep {
    /// Stepping mode; falls back to the motor's default mode.
    #[serde(default)]
    pub mode: Option<StepMode>,

    /// Signed displacement in degrees.
    pub degrees: Degrees,
}

/// Ordered displacements run back to back on one motor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceConfig {
    /// Motor key in `[motors]`.
    pub motor: String<32>,

    /// Steps, executed in order.
    pub steps: Vec<SequenceStep, MAX_SEQUENCE_STEPS>,
}

impl SequenceConfig {
    /// Net displacement of the whole sequence.
    pub fn net_degrees(&self) -> Degrees {
        self.steps
            .iter()
            .fold(Degrees::default(), |acc, step| acc + step.degrees)
    }
}
