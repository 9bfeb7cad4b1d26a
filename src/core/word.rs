//! Wordle word representation
//!
//! A Word stores an uppercase ASCII word. Length is not fixed here; callers that
//! need a specific length use [`Word::with_length`].

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase ASCII word
///
/// Construction normalizes case, so two words built from `"crane"` and `"CrAnE"`
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and the text is uppercased.
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, contains non-ASCII
    /// characters, or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: text.to_ascii_uppercase(),
        })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// Returns `None` if `position` is out of range.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.letters().get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters().contains(&letter)
    }

    /// Iterate over every position where `letter` appears
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.letters()
            .iter()
            .enumerate()
            .filter(move |&(_, &ch)| ch == letter)
            .map(|(i, _)| i)
    }

    /// Number of distinct letters
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        self.letter_counts().len()
    }

    /// Get the count of each letter in the word
    ///
    /// Used for feedback calculation with duplicate letters.
    #[must_use]
    pub fn letter_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
