//! Line driver configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// GPIO controller and the four lines wired to the H-bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriverConfig {
    /// Controller identifier (e.g. "/dev/gpiochip0").
    pub chip: String<64>,

    /// Line offsets for (A, B, C, D).
    pub lines: [u32; 4],
}

impl DriverConfig {
    /// Create a driver configuration.
    ///
    /// Chip identifiers longer than 64 bytes are rejected with `None`.
    pub fn new(chip: &str, lines: [u32; 4]) -> Option<Self> {
        Some(Self {
            chip: String::try_from(chip).ok()?,
            lines,
        })
    }

    /// First line offset that appears more than once.
    pub fn duplicate_line(&self) -> Option<u32> {
        (0..self.lines.len()).find_map(|i| {
            let line = self.lines[i];
            self.lines[i + 1..].contains(&line).then_some(line)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_line() {
        let ok = DriverConfig::new("/dev/gpiochip0", [17, 27, 23, 24]).unwrap();
        assert_eq!(ok.duplicate_line(), None);

        let bad = DriverConfig::new("/dev/gpiochip0", [17, 27, 17, 24]).unwrap();
        assert_eq!(bad.duplicate_line(), Some(17));
    }
}
