//! Error types for hybrid-stepper.
//!
//! One crate-wide [`Error`] wraps the per-concern errors raised while loading
//! configuration, claiming lines, driving a motor and stopping it.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all hybrid-stepper operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Line driver initialization error
    Init(InitError),
    /// Step sequence error
    Drive(DriveError),
    /// Error while de-energizing a motor
    Stop(StopError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Motor name not found in configuration
    MotorNotFound(heapless::String<32>),
    /// Move or sequence name not found
    MoveNotFound(heapless::String<32>),
    /// Move or sequence references a motor that is not configured
    UnknownMotor {
        /// Move or sequence name
        owner: heapless::String<32>,
        /// Referenced motor name
        motor: heapless::String<32>,
    },
    /// Move belongs to another motor than the one asked to run it
    WrongMotor {
        /// Move name
        name: heapless::String<32>,
        /// Motor the move is configured for
        expected: heapless::String<32>,
    },
    /// Speed must be finite and > 0
    InvalidSpeed(f32),
    /// Displacement must be finite
    InvalidDegrees(f32),
    /// Line offsets must be pairwise distinct
    DuplicateLine(u32),
    /// Chip identifier is empty
    EmptyChip,
    /// Sequence has no steps
    EmptySequence(heapless::String<32>),
    /// Registry capacity or name length exceeded
    CapacityExceeded,
    /// A required builder field was not set
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// A single write to the four output lines failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// The pin at this index (0 = A .. 3 = D) rejected the new level
    Pin(u8),
    /// The backend rejected the whole request
    Request,
}

/// Failure to open the controller or claim the four lines.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// The GPIO controller could not be opened
    ChipOpen(heapless::String<64>),
    /// The four lines could not be claimed as outputs
    LineRequest {
        /// Chip identifier
        chip: heapless::String<64>,
        /// Requested line offsets
        lines: [u32; 4],
    },
    /// The initial all-inactive write failed
    Deenergize(LineError),
}

/// Step sequence errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveError {
    /// A line write failed part way through the sequence
    Line {
        /// Steps fully applied before the failing write
        completed: u32,
        /// Underlying line error
        error: LineError,
    },
    /// Raw stepping mode code is neither 1 (full) nor 2 (half)
    InvalidMode(u8),
}

/// Errors raised while stopping a motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopError {
    /// The all-inactive write failed
    Line(LineError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Init(e) => write!(f, "Initialization error: {}", e),
            Error::Drive(e) => write!(f, "Drive error: {}", e),
            Error::Stop(e) => write!(f, "Stop error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::MotorNotFound(name) => write!(f, "Motor '{}' not found", name),
            ConfigError::MoveNotFound(name) => write!(f, "Move '{}' not found", name),
            ConfigError::UnknownMotor { owner, motor } => {
                write!(f, "'{}' references unknown motor '{}'", owner, motor)
            }
            ConfigError::WrongMotor { name, expected } => {
                write!(f, "Move '{}' belongs to motor '{}'", name, expected)
            }
            ConfigError::InvalidSpeed(v) => write!(f, "Invalid speed: {}. Must be > 0", v),
            ConfigError::InvalidDegrees(v) => write!(f, "Invalid displacement: {}", v),
            ConfigError::DuplicateLine(line) => write!(f, "Line {} listed more than once", line),
            ConfigError::EmptyChip => write!(f, "Chip identifier is empty"),
            ConfigError::EmptySequence(name) => write!(f, "Sequence '{}' has no steps", name),
            ConfigError::CapacityExceeded => write!(f, "Capacity exceeded"),
            ConfigError::MissingField(field) => write!(f, "{} is required", field),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Pin(index) => write!(f, "write to line {} failed", index),
            LineError::Request => write!(f, "line request rejected the write"),
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::ChipOpen(chip) => write!(f, "Cannot open GPIO chip '{}'", chip),
            InitError::LineRequest { chip, lines } => {
                write!(f, "Cannot claim lines {:?} on '{}'", lines, chip)
            }
            InitError::Deenergize(e) => write!(f, "Initial de-energize failed: {}", e),
        }
    }
}

impl fmt::Display for DriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriveError::Line { completed, error } => {
                write!(f, "{} after {} completed steps", error, completed)
            }
            DriveError::InvalidMode(code) => {
                write!(f, "Invalid step mode {}. Valid values: 1 (full), 2 (half)", code)
            }
        }
    }
}

impl fmt::Display for StopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopError::Line(e) => write!(f, "De-energize failed: {}", e),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Error::Init(e)
    }
}

impl From<DriveError> for Error {
    fn from(e: DriveError) -> Self {
        Error::Drive(e)
    }
}

impl From<StopError> for Error {
    fn from(e: StopError) -> Self {
        Error::Stop(e)
    }
}

impl From<LineError> for StopError {
    fn from(e: LineError) -> Self {
        StopError::Line(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for LineError {}

#[cfg(feature = "std")]
impl std::error::Error for InitError {}

#[cfg(feature = "std")]
impl std::error::Error for DriveError {}

#[cfg(feature = "std")]
impl std::error::Error for StopError {}
