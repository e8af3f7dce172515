//! Configuration module for hybrid-stepper.
//!
//! Provides types for loading and validating driver, motor and move
//! configurations from TOML files (with `std` feature) or pre-parsed data.

mod driver;
mod motor;
mod moves;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use driver::DriverConfig;
pub use motor::MotorConfig;
pub use moves::{MoveConfig, SequenceConfig, SequenceStep, MAX_SEQUENCE_STEPS};
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, StepsPerSec};
