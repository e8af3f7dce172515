//! Motor module for hybrid-stepper.
//!
//! Provides the per-motor state record and its lifecycle manager.

mod builder;
mod controller;
mod state;

pub use builder::MotorControllerBuilder;
pub use controller::MotorController;
pub use state::Motor;
