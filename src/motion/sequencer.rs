//! Step sequencing - phase walk and pacing.

use embedded_hal::delay::DelayNs;

use crate::config::units::Degrees;
use crate::error::DriveError;
use crate::lines::LineDriver;
use crate::motor::Motor;

use super::phase::StepMode;
use super::plan::StepPlan;

/// Walk the phase table for `displacement` and pace each step.
///
/// One line write and one blocking delay per whole step. On success the full
/// requested displacement (remainder included) is added to the motor's
/// position. If a write fails the sequence stops at once and the motor keeps
/// only the phase index and angle of the steps that were applied.
pub fn drive<L, D>(
    lines: &mut L,
    delay: &mut D,
    motor: &mut Motor,
    mode: StepMode,
    displacement: Degrees,
) -> Result<(), DriveError>
where
    L: LineDriver,
    D: DelayNs,
{
    let plan = StepPlan::new(mode, displacement, motor.speed());
    debug!(
        "{}: {} steps ({}), {} us/step",
        motor.name(),
        plan.steps,
        mode.name(),
        plan.delay_us
    );

    let forward = plan.direction.is_forward();
    let mut last_step = motor.last_step;

    for completed in 0..plan.steps {
        let next = mode.advance(last_step, forward);
        let pattern = mode.pattern(next);
        trace!("phase {}", next);

        if let Err(error) = lines.set_levels(pattern) {
            warn!("{}: line write failed after {} steps", motor.name(), completed);
            motor.last_step = last_step;
            motor.position += plan.executed_angle(completed);
            return Err(DriveError::Line { completed, error });
        }

        last_step = next;
        delay.delay_us(plan.delay_us);
    }

    motor.last_step = last_step;
    motor.position += displacement;
    Ok(())
}
