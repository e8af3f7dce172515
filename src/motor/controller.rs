//! Motor lifecycle management.
//!
//! Owns the claimed lines and the delay provider, hands out [`Motor`] states
//! and retires them with every coil de-energized.

use embedded_hal::delay::DelayNs;

use crate::config::units::{Degrees, StepsPerSec};
use crate::config::{DriverConfig, SystemConfig};
use crate::error::{ConfigError, DriveError, Error, InitError, LineError, Result, StopError};
use crate::lines::{LineDriver, LineProvider};
use crate::motion::{self, StepMode, ALL_INACTIVE};
use crate::moves::MoveRegistry;

use super::state::Motor;

/// Lifecycle manager for motors sharing one set of H-bridge lines.
///
/// Generic over:
/// - `L`: line driver (must implement [`LineDriver`])
/// - `D`: delay provider used to pace steps (must implement `DelayNs`)
///
/// Driving takes `&mut self` and `&mut Motor`, so only one step sequence can
/// be in flight on the lines and on any motor at a time.
pub struct MotorController<L, D>
where
    L: LineDriver,
    D: DelayNs,
{
    /// Claimed output lines.
    lines: L,

    /// Blocking delay between steps.
    delay: D,
}

impl<L, D> MotorController<L, D>
where
    L: LineDriver,
    D: DelayNs,
{
    /// Take over already claimed lines and force them inactive.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::Deenergize`] if the initial write fails.
    pub fn new(mut lines: L, delay: D) -> core::result::Result<Self, InitError> {
        lines.set_levels(ALL_INACTIVE).map_err(|e| {
            warn!("initial de-energize failed");
            InitError::Deenergize(e)
        })?;

        info!("line driver ready, all lines inactive");
        Ok(Self { lines, delay })
    }

    /// Open the configured chip, claim its four lines and force them inactive.
    ///
    /// Must run before any motor is created. Failures are not retried.
    pub fn initialize<P>(
        provider: &mut P,
        config: &DriverConfig,
        delay: D,
    ) -> core::result::Result<Self, InitError>
    where
        P: LineProvider<Lines = L>,
    {
        debug!("claiming lines on {}", config.chip.as_str());
        let lines = provider.request_lines(config.chip.as_str(), config.lines)?;
        Self::new(lines, delay)
    }

    /// Create a motor paced at `speed`.
    ///
    /// The speed is not validated; see [`StepsPerSec::is_valid`].
    pub fn create_motor(&self, speed: StepsPerSec) -> Motor {
        self.create_named_motor("motor", speed)
    }

    /// Create a named motor paced at `speed`.
    pub fn create_named_motor(&self, name: &str, speed: StepsPerSec) -> Motor {
        info!("{}: created at {} steps/s", name, speed.0);
        Motor::new(name, speed)
    }

    /// Create the motor registered under `name` in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if no such motor is configured.
    pub fn create_motor_from_config(&self, config: &SystemConfig, name: &str) -> Result<Motor> {
        let motor_config = config.motor(name).ok_or_else(|| {
            Error::Config(ConfigError::MotorNotFound(
                heapless::String::try_from(name).unwrap_or_default(),
            ))
        })?;

        info!(
            "{} ({}): created at {} steps/s",
            name,
            motor_config.label(name),
            motor_config.speed.0
        );
        Ok(Motor::with_mode(
            name,
            motor_config.speed,
            motor_config.default_mode,
        ))
    }

    /// Turn `motor` by `displacement` in the given stepping mode (blocking).
    ///
    /// See [`motion::drive`] for the step and position semantics.
    pub fn drive(
        &mut self,
        motor: &mut Motor,
        mode: StepMode,
        displacement: Degrees,
    ) -> core::result::Result<(), DriveError> {
        motion::drive(&mut self.lines, &mut self.delay, motor, mode, displacement)
    }

    /// Like [`drive`](Self::drive), with the mode given as a raw code
    /// (1 = full, 2 = half).
    pub fn drive_with_code(
        &mut self,
        motor: &mut Motor,
        mode: u8,
        displacement: Degrees,
    ) -> core::result::Result<(), DriveError> {
        let mode = StepMode::try_from(mode)?;
        self.drive(motor, mode, displacement)
    }

    /// Execute a named move from a registry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The move is not found in the registry
    /// - The move is configured for another motor
    /// - A line write fails during the move
    pub fn execute_move(
        &mut self,
        motor: &mut Motor,
        name: &str,
        registry: &MoveRegistry,
    ) -> Result<()> {
        let mv = registry.get_or_error(name)?;
        check_owner(name, mv.motor.as_str(), motor)?;

        let mode = mv.mode.unwrap_or(motor.default_mode());
        self.drive(motor, mode, mv.degrees)?;
        Ok(())
    }

    /// Run a named sequence step by step, stopping at the first failure.
    pub fn run_sequence(
        &mut self,
        motor: &mut Motor,
        name: &str,
        registry: &MoveRegistry,
    ) -> Result<()> {
        let seq = registry.sequence_or_error(name)?;
        check_owner(name, seq.motor.as_str(), motor)?;

        debug!(
            "{}: running sequence {} ({} deg net)",
            motor.name(),
            name,
            seq.net_degrees().0
        );
        for step in seq.steps.iter() {
            let mode = step.mode.unwrap_or(motor.default_mode());
            self.drive(motor, mode, step.degrees)?;
        }
        Ok(())
    }

    /// Force all four lines inactive without retiring any motor.
    pub fn deenergize(&mut self) -> core::result::Result<(), LineError> {
        self.lines.set_levels(ALL_INACTIVE)
    }

    /// De-energize the lines and retire `motor`.
    ///
    /// The motor is consumed even if the final write fails; its state is
    /// meaningless once the coils have been left in an unknown pattern.
    ///
    /// ```
    /// use embedded_hal::delay::DelayNs;
    /// use hybrid_stepper::{
    ///     Degrees, LineDriver, LineError, MotorController, PhasePattern, StepMode, StepsPerSec,
    /// };
    ///
    /// struct Lines;
    /// impl LineDriver for Lines {
    ///     fn set_levels(&mut self, _: PhasePattern) -> Result<(), LineError> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// struct Delay;
    /// impl DelayNs for Delay {
    ///     fn delay_ns(&mut self, _: u32) {}
    /// }
    ///
    /// let mut controller = MotorController::new(Lines, Delay).unwrap();
    /// let mut motor = controller.create_motor(StepsPerSec(720.0));
    /// controller.drive(&mut motor, StepMode::Full, Degrees(1.8)).unwrap();
    /// controller.stop(motor).unwrap();
    /// ```
    ///
    /// A stopped motor cannot be driven again:
    ///
    /// ```compile_fail
    /// use embedded_hal::delay::DelayNs;
    /// use hybrid_stepper::{
    ///     Degrees, LineDriver, LineError, MotorController, PhasePattern, StepMode, StepsPerSec,
    /// };
    ///
    /// struct Lines;
    /// impl LineDriver for Lines {
    ///     fn set_levels(&mut self, _: PhasePattern) -> Result<(), LineError> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// struct Delay;
    /// impl DelayNs for Delay {
    ///     fn delay_ns(&mut self, _: u32) {}
    /// }
    ///
    /// let mut controller = MotorController::new(Lines, Delay).unwrap();
    /// let mut motor = controller.create_motor(StepsPerSec(720.0));
    /// controller.stop(motor).unwrap();
    /// controller.drive(&mut motor, StepMode::Full, Degrees(1.8)).unwrap();
    /// ```
    pub fn stop(&mut self, motor: Motor) -> core::result::Result<(), StopError> {
        let result = self.deenergize();
        match result {
            Ok(()) => info!("{}: stopped at {} deg", motor.name(), motor.position().0),
            Err(_) => warn!("{}: de-energize failed on stop", motor.name()),
        }
        drop(motor);
        result.map_err(StopError::from)
    }

    /// De-energize the lines and give back the line driver and delay.
    ///
    /// On failure the controller is handed back with the error.
    pub fn release(mut self) -> core::result::Result<(L, D), (Self, StopError)> {
        match self.deenergize() {
            Ok(()) => Ok((self.lines, self.delay)),
            Err(e) => Err((self, StopError::Line(e))),
        }
    }
}

fn check_owner(name: &str, owner: &str, motor: &Motor) -> Result<()> {
    if owner != motor.name() {
        return Err(Error::Config(ConfigError::WrongMotor {
            name: heapless::String::try_from(name).unwrap_or_default(),
            expected: heapless::String::try_from(owner).unwrap_or_default(),
        }));
    }
    Ok(())
}
