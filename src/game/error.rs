//! Guess rejection reasons

use std::fmt;

/// Why a submitted guess was not scored
///
/// Every variant is recoverable: the guess is not consumed and the same
/// player may try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    InvalidLength { expected: usize, actual: usize },
    AlreadyGuessed(String),
    NotInWordList(String),
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { .. } => {
                write!(f, "Guess length should match the length of the word.")
            }
            Self::AlreadyGuessed(_) => write!(f, "You've already guessed that word."),
            Self::NotInWordList(_) => write!(f, "That's not a real word!"),
            Self::GameOver => write!(f, "The game is already over."),
        }
    }
}

impl std::error::Error for GuessError {}
