//! # hybrid-stepper
//!
//! Full-step and half-step phase sequencing for hybrid stepper motors driven
//! through an H-bridge on four GPIO lines.
//!
//! ## Features
//!
//! - **Phase tables**: fixed 4-phase (1.8°) and 8-phase (0.9°) drive patterns
//! - **Phase continuity**: each motor remembers its last phase, so consecutive
//!   moves continue the walk instead of re-energizing from a fixed start
//! - **Constant-speed pacing**: blocking `DelayNs` wait between steps
//! - **Ownership-checked lifecycle**: stopping a motor consumes it
//! - **no_std compatible**: core library works without standard library
//! - **Configuration-driven**: lines, motors and named moves in TOML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hybrid_stepper::{Degrees, MotorController, PinLines, StepMode, StepsPerSec};
//!
//! // Four output pins wired to H-bridge inputs A..D
//! let lines = PinLines::new([a, b, c, d]);
//! let mut controller = MotorController::new(lines, delay)?;
//!
//! let mut motor = controller.create_motor(StepsPerSec(720.0));
//! controller.drive(&mut motor, StepMode::Full, Degrees(360.0))?;
//! controller.drive(&mut motor, StepMode::Half, Degrees(-180.0))?;
//!
//! // De-energize the coils; `motor` cannot be used afterwards
//! controller.stop(motor)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets
//! - `log`: Enables logging through the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Must come first so the logging macros are visible to every module
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod error;
pub mod lines;
pub mod motion;
pub mod motor;
pub mod moves;

// Re-exports for ergonomic API
pub use config::{validate_config, DriverConfig, MotorConfig, SystemConfig};
pub use error::{DriveError, Error, InitError, LineError, Result, StopError};
pub use lines::{LineDriver, LineProvider, PinLines};
pub use motion::{Direction, PhasePattern, StepMode, StepPlan};
pub use motor::{Motor, MotorController, MotorControllerBuilder};
pub use moves::MoveRegistry;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, StepsPerSec};
