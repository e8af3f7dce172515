//! Line driver capability.
//!
//! The sequencer only ever needs to put a [`PhasePattern`] on the four
//! H-bridge control lines. Opening the GPIO controller and claiming the lines
//! is platform work, reached through [`LineProvider`].

mod pins;

pub use pins::PinLines;

use crate::error::{InitError, LineError};
use crate::motion::PhasePattern;

/// Write-only access to the four H-bridge control lines.
pub trait LineDriver {
    /// Apply `levels` to lines (A, B, C, D).
    ///
    /// Callers treat this as a single write. A failed write may leave the
    /// lines in a mixed pattern, so the sequence it belongs to is abandoned.
    fn set_levels(&mut self, levels: PhasePattern) -> Result<(), LineError>;
}

impl<T: LineDriver + ?Sized> LineDriver for &mut T {
    #[inline]
    fn set_levels(&mut self, levels: PhasePattern) -> Result<(), LineError> {
        (**self).set_levels(levels)
    }
}

/// A GPIO controller able to hand out four output lines.
pub trait LineProvider {
    /// Line driver produced by a successful request.
    type Lines: LineDriver;

    /// Open `chip` and claim `lines` as outputs.
    fn request_lines(&mut self, chip: &str, lines: [u32; 4]) -> Result<Self::Lines, InitError>;
}
