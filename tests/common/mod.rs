//! Hardware doubles shared by the integration tests.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use hybrid_stepper::error::{InitError, LineError};
use hybrid_stepper::{LineDriver, LineProvider, PhasePattern};

/// Line driver that records every pattern and can fail on a given write.
#[derive(Debug, Default)]
pub struct RecordingLines {
    pub writes: Vec<PhasePattern>,
    /// Zero-based index of the write that fails.
    pub fail_at: Option<usize>,
    attempts: usize,
}

impl RecordingLines {
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Default::default()
        }
    }
}

impl LineDriver for RecordingLines {
    fn set_levels(&mut self, levels: PhasePattern) -> Result<(), LineError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(LineError::Pin(1));
        }
        self.writes.push(levels);
        Ok(())
    }
}

/// Delay that records requested microsecond waits instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub waits_us: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_us.push(ns / 1_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.waits_us.push(us);
    }
}

/// GPIO controller double that hands out [`RecordingLines`].
#[derive(Debug, Default)]
pub struct FakeChip {
    pub requests: Vec<(String, [u32; 4])>,
    pub missing: bool,
}

impl LineProvider for FakeChip {
    type Lines = RecordingLines;

    fn request_lines(&mut self, chip: &str, lines: [u32; 4]) -> Result<RecordingLines, InitError> {
        if self.missing {
            return Err(InitError::ChipOpen(
                heapless::String::try_from(chip).unwrap_or_default(),
            ));
        }
        self.requests.push((chip.to_string(), lines));
        Ok(RecordingLines::default())
    }
}
