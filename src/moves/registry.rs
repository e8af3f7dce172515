//! Move registry for named move and sequence lookup.

use heapless::{FnvIndexMap, String};

use crate::config::{MoveConfig, SequenceConfig, SystemConfig};
use crate::error::{ConfigError, Error, Result};

/// Maximum number of moves in the registry.
pub const MAX_MOVES: usize = 64;

/// Maximum number of sequences in the registry.
pub const MAX_SEQUENCES: usize = 16;

/// Registry for named moves and sequences.
#[derive(Debug)]
pub struct MoveRegistry {
    moves: FnvIndexMap<String<32>, MoveConfig, MAX_MOVES>,
    sequences: FnvIndexMap<String<32>, SequenceConfig, MAX_SEQUENCES>,
}

impl Default for MoveRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            moves: FnvIndexMap::new(),
            sequences: FnvIndexMap::new(),
        }
    }

    /// Load every move and sequence of a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CapacityExceeded`] if an entry does not fit.
    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        let mut registry = Self::new();
        for (name, mv) in &config.moves {
            registry.register(name.as_str(), mv.clone())?;
        }
        for (name, seq) in &config.sequences {
            registry.register_sequence(name.as_str(), seq.clone())?;
        }
        Ok(registry)
    }

    /// Register a move with a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register(&mut self, name: &str, mv: MoveConfig) -> Result<()> {
        let key = key(name)?;
        self.moves
            .insert(key, mv)
            .map_err(|_| Error::Config(ConfigError::CapacityExceeded))?;
        Ok(())
    }

    /// Register a sequence with a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the registry is full.
    pub fn register_sequence(&mut self, name: &str, seq: SequenceConfig) -> Result<()> {
        let key = key(name)?;
        self.sequences
            .insert(key, seq)
            .map_err(|_| Error::Config(ConfigError::CapacityExceeded))?;
        Ok(())
    }

    /// Get a move by name.
    pub fn get(&self, name: &str) -> Option<&MoveConfig> {
        let key = String::try_from(name).ok()?;
        self.moves.get(&key)
    }

    /// Get a move by name, with error if not found.
    pub fn get_or_error(&self, name: &str) -> Result<&MoveConfig> {
        self.get(name).ok_or_else(|| not_found(name))
    }

    /// Get a sequence by name.
    pub fn sequence(&self, name: &str) -> Option<&SequenceConfig> {
        let key = String::try_from(name).ok()?;
        self.sequences.get(&key)
    }

    /// Get a sequence by name, with error if not found.
    pub fn sequence_or_error(&self, name: &str) -> Result<&SequenceConfig> {
        self.sequence(name).ok_or_else(|| not_found(name))
    }

    /// Check if a move exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of registered moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the registry holds no moves.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Get an iterator over move names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.moves.keys().map(|s| s.as_str())
    }

    /// Names of the moves configured for `motor`.
    pub fn moves_for_motor<'a>(&'a self, motor: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.moves
            .iter()
            .filter(move |(_, mv)| mv.motor.as_str() == motor)
            .map(|(name, _)| name.as_str())
    }
}

fn key(name: &str) -> Result<String<32>> {
    String::try_from(name).map_err(|_| Error::Config(ConfigError::CapacityExceeded))
}

fn not_found(name: &str) -> Error {
    Error::Config(ConfigError::MoveNotFound(
        String::try_from(name).unwrap_or_default(),
    ))
}
