//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::moves::{MoveConfig, SequenceConfig};
use super::units::Degrees;
use super::{DriverConfig, MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - The chip identifier is set and the four lines are distinct
/// - Motor speeds are finite and positive
/// - Moves and sequences reference existing motors
/// - Displacements are finite and sequences are not empty
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_driver(&config.driver)?;

    for (_, motor) in config.motors.iter() {
        validate_motor(motor)?;
    }

    for (name, mv) in config.moves.iter() {
        validate_move(name.as_str(), mv, config)?;
    }

    for (name, seq) in config.sequences.iter() {
        validate_sequence(name.as_str(), seq, config)?;
    }

    Ok(())
}

fn validate_driver(driver: &DriverConfig) -> Result<()> {
    if driver.chip.is_empty() {
        return Err(Error::Config(ConfigError::EmptyChip));
    }

    if let Some(line) = driver.duplicate_line() {
        return Err(Error::Config(ConfigError::DuplicateLine(line)));
    }

    Ok(())
}

fn validate_motor(motor: &MotorConfig) -> Result<()> {
    // The sequencer divides by the speed without checking it
    if !motor.speed.is_valid() {
        return Err(Error::Config(ConfigError::InvalidSpeed(motor.speed.0)));
    }

    Ok(())
}

fn validate_move(name: &str, mv: &MoveConfig, config: &SystemConfig) -> Result<()> {
    check_motor_exists(name, mv.motor.as_str(), config)?;
    check_degrees(mv.degrees)
}

fn validate_sequence(name: &str, seq: &SequenceConfig, config: &SystemConfig) -> Result<()> {
    check_motor_exists(name, seq.motor.as_str(), config)?;

    if seq.steps.is_empty() {
        return Err(Error::Config(ConfigError::EmptySequence(
            heapless::String::try_from(name).unwrap_or_default(),
        )));
    }

    for step in seq.steps.iter() {
        check_degrees(step.degrees)?;
    }

    Ok(())
}

fn check_motor_exists(owner: &str, motor: &str, config: &SystemConfig) -> Result<()> {
    if config.motor(motor).is_none() {
        return Err(Error::Config(ConfigError::UnknownMotor {
            owner: heapless::String::try_from(owner).unwrap_or_default(),
            motor: heapless::String::try_from(motor).unwrap_or_default(),
        }));
    }
    Ok(())
}

fn check_degrees(degrees: Degrees) -> Result<()> {
    if !degrees.0.is_finite() {
        return Err(Error::Config(ConfigError::InvalidDegrees(degrees.0)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::StepsPerSec;
    use crate::motion::StepMode;

    #[test]
    fn test_invalid_speed() {
        let config = MotorConfig {
            name: heapless::String::try_from("test").unwrap(),
            speed: StepsPerSec(0.0), // Invalid!
            default_mode: StepMode::Full,
        };

        let result = validate_motor(&config);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidSpeed(_)))
        ));
    }

    #[test]
    fn test_empty_chip() {
        let driver = DriverConfig::new("", [1, 2, 3, 4]).unwrap();
        assert_eq!(
            validate_driver(&driver),
            Err(Error::Config(ConfigError::EmptyChip))
        );
    }

    #[test]
    fn test_infinite_degrees() {
        assert!(check_degrees(Degrees(f32::INFINITY)).is_err());
        assert!(check_degrees(Degrees(-90.0)).is_ok());
    }
}
