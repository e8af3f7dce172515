//! Motor configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::StepsPerSec;
use crate::motion::StepMode;

/// Complete motor configuration from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MotorConfig {
    /// Human-readable name for log lines (max 32 chars). Optional.
    #[serde(default)]
    pub name: String<32>,

    /// Pacing rate in steps per second.
    #[serde(rename = "speed_steps_per_sec")]
    pub speed: StepsPerSec,

    /// Mode used by moves that do not pick one.
    #[serde(default)]
    pub default_mode: StepMode,
}

impl MotorConfig {
    /// Display name, falling back to the `[motors]` key when none is set.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        if self.name.is_empty() {
            key
        } else {
            self.name.as_str()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_full() {
        let config: MotorConfig = toml::from_str(
            r#"
name = "Pan"
speed_steps_per_sec = 720.0
"#,
        )
        .unwrap();

        assert_eq!(config.default_mode, StepMode::Full);
        assert_eq!(config.speed, StepsPerSec(720.0));
        assert_eq!(config.label("pan"), "Pan");
    }

    #[test]
    fn test_name_is_optional() {
        let config: MotorConfig = toml::from_str("speed_steps_per_sec = 360.0").unwrap();

        assert!(config.name.is_empty());
        assert_eq!(config.label("tilt"), "tilt");
    }
}
