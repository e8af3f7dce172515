//! H-bridge phase tables.
//!
//! Each entry is the level of lines (A, B, C, D) for one step, `true` being
//! active. The patterns encode the motor's winding arrangement and are
//! supplied as-is.

use serde::Deserialize;

use crate::config::units::Degrees;
use crate::error::DriveError;

/// Levels applied to the four control lines for one step.
pub type PhasePattern = [bool; 4];

/// All four lines inactive: no current through either winding.
pub const ALL_INACTIVE: PhasePattern = [false; 4];

const H: bool = true;
const L: bool = false;

/// Full-step cycle, two coils energized per step.
pub const FULL_STEP_TABLE: [PhasePattern; 4] = [
    [H, L, H, L],
    [L, H, H, L],
    [L, H, L, H],
    [H, L, L, H],
];

/// Half-step cycle, alternating one and two energized coils.
pub const HALF_STEP_TABLE: [PhasePattern; 8] = [
    [L, L, H, L],
    [L, H, H, L],
    [L, H, L, L],
    [L, H, L, H],
    [L, L, L, H],
    [H, L, L, H],
    [H, L, L, L],
    [H, L, H, L],
];

/// Stepping resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// 1.8° per step, 4-phase cycle.
    #[default]
    Full,
    /// 0.9° per step, 8-phase cycle.
    Half,
}

impl StepMode {
    /// Angle covered by one step of this mode.
    #[inline]
    pub const fn step_size(self) -> Degrees {
        match self {
            StepMode::Full => Degrees(1.8),
            StepMode::Half => Degrees(0.9),
        }
    }

    /// Phase cycle for this mode.
    #[inline]
    pub const fn table(self) -> &'static [PhasePattern] {
        match self {
            StepMode::Full => &FULL_STEP_TABLE,
            StepMode::Half => &HALF_STEP_TABLE,
        }
    }

    /// Number of phases in one cycle.
    #[inline]
    pub const fn phase_count(self) -> u8 {
        match self {
            StepMode::Full => 4,
            StepMode::Half => 8,
        }
    }

    /// Pattern at `index`, which must be below [`phase_count`](Self::phase_count).
    #[inline]
    pub fn pattern(self, index: u8) -> PhasePattern {
        self.table()[usize::from(index)]
    }

    /// Phase index one step away from `index` in the given direction.
    ///
    /// The index is taken as-is and wrapped into `[0, phase_count)`, so an
    /// index left behind by the other mode is not rescaled.
    #[inline]
    pub fn advance(self, index: u8, forward: bool) -> u8 {
        let len = i16::from(self.phase_count());
        let delta = if forward { 1 } else { -1 };
        (i16::from(index) + delta).rem_euclid(len) as u8
    }

    /// Mode name for display/logging.
    pub const fn name(self) -> &'static str {
        match self {
            StepMode::Full => "full",
            StepMode::Half => "half",
        }
    }
}

/// Raw mode codes: 1 is full-step, 2 is half-step.
impl TryFrom<u8> for StepMode {
    type Error = DriveError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(StepMode::Full),
            2 => Ok(StepMode::Half),
            other => Err(DriveError::InvalidMode(other)),
        }
    }
}
