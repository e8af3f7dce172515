//! Line driver over four embedded-hal output pins.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::LineError;
use crate::motion::PhasePattern;

use super::LineDriver;

/// Four embedded-hal 1.0 output pins acting as lines (A, B, C, D).
pub struct PinLines<P>
where
    P: OutputPin,
{
    pins: [P; 4],
}

impl<P> PinLines<P>
where
    P: OutputPin,
{
    /// Wrap four pins, in (A, B, C, D) order.
    pub fn new(pins: [P; 4]) -> Self {
        Self { pins }
    }

    /// Give the pins back.
    pub fn into_inner(self) -> [P; 4] {
        self.pins
    }
}

impl<P> LineDriver for PinLines<P>
where
    P: OutputPin,
{
    fn set_levels(&mut self, levels: PhasePattern) -> Result<(), LineError> {
        for (index, (pin, level)) in self.pins.iter_mut().zip(levels).enumerate() {
            pin.set_state(PinState::from(level))
                .map_err(|_| LineError::Pin(index as u8))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{Mock, State, Transaction};

    fn pin(states: &[State]) -> Mock {
        let transactions: Vec<_> = states.iter().map(|&s| Transaction::set(s)).collect();
        Mock::new(&transactions)
    }

    #[test]
    fn test_levels_reach_pins_in_order() {
        let a = pin(&[State::High, State::Low]);
        let b = pin(&[State::Low, State::Low]);
        let c = pin(&[State::High, State::Low]);
        let d = pin(&[State::Low, State::Low]);
        let mut handles = [a.clone(), b.clone(), c.clone(), d.clone()];

        let mut lines = PinLines::new([a, b, c, d]);
        lines.set_levels([true, false, true, false]).unwrap();
        lines.set_levels([false; 4]).unwrap();

        for handle in handles.iter_mut() {
            handle.done();
        }
    }
}
