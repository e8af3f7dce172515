//! Moves module for hybrid-stepper.
//!
//! Named move and sequence storage and lookup.

mod registry;

pub use registry::{MoveRegistry, MAX_MOVES, MAX_SEQUENCES};
