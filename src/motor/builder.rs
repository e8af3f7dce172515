//! Builder pattern for MotorController.

use embedded_hal::delay::DelayNs;

use crate::config::DriverConfig;
use crate::error::{ConfigError, Error, Result};
use crate::lines::{LineDriver, LineProvider};

use super::controller::MotorController;

/// Builder for creating MotorController instances.
pub struct MotorControllerBuilder<L, D>
where
    L: LineDriver,
    D: DelayNs,
{
    lines: Option<L>,
    delay: Option<D>,
}

impl<L, D> Default for MotorControllerBuilder<L, D>
where
    L: LineDriver,
    D: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, D> MotorControllerBuilder<L, D>
where
    L: LineDriver,
    D: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            lines: None,
            delay: None,
        }
    }

    /// Set already claimed lines.
    pub fn lines(mut self, lines: L) -> Self {
        self.lines = Some(lines);
        self
    }

    /// Claim the configured lines through a provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the chip cannot be opened or the lines claimed.
    pub fn request_lines<P>(mut self, provider: &mut P, config: &DriverConfig) -> Result<Self>
    where
        P: LineProvider<Lines = L>,
    {
        let lines = provider.request_lines(config.chip.as_str(), config.lines)?;
        self.lines = Some(lines);
        Ok(self)
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Build the MotorController, forcing all lines inactive.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the initial
    /// de-energize fails.
    pub fn build(self) -> Result<MotorController<L, D>> {
        let lines = self
            .lines
            .ok_or(Error::Config(ConfigError::MissingField("lines")))?;

        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        Ok(MotorController::new(lines, delay)?)
    }
}
