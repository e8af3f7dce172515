//! Motion module for hybrid-stepper.
//!
//! Phase tables, step planning and the blocking step sequencer.

mod phase;
mod plan;
mod sequencer;

pub use phase::{PhasePattern, StepMode, ALL_INACTIVE, FULL_STEP_TABLE, HALF_STEP_TABLE};
pub use plan::{Direction, StepPlan};
pub use sequencer::drive;
