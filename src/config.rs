//! Game configuration
//!
//! Built once from the command line and passed explicitly to the word-list
//! loader and the game session.

use std::fmt;
use std::path::PathBuf;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of guesses shared by both players
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_turns: usize,
    /// Target words; the embedded list is used when `None`
    pub solutions_path: Option<PathBuf>,
    /// Extra accepted guesses; the embedded list is used when `None`
    pub guesses_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_turns: DEFAULT_MAX_TURNS,
            solutions_path: None,
            guesses_path: None,
        }
    }
}

/// Error type for unusable configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWordLength,
    ZeroMaxTurns,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::ZeroMaxTurns => write!(f, "Max turns must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameConfig {
    /// Check that the configuration can describe a playable game
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the word length or turn limit is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroMaxTurns);
        }
        Ok(())
    }
}
