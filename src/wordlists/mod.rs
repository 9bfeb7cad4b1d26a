//! Word lists for the game
//!
//! Builds the two pools every game needs: the solutions (possible targets)
//! and the accepted guesses (solutions plus extra dictionary words). Lists
//! come from files when configured, otherwise from the embedded constants.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::config::GameConfig;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for word lists that cannot back a game
#[derive(Debug)]
pub enum WordListError {
    /// A configured list file could not be read
    Io { path: PathBuf, source: io::Error },
    /// No usable target words after normalization
    EmptySolutions { origin: String, word_length: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::EmptySolutions {
                origin,
                word_length,
            } => write!(
                f,
                "Solution list {origin} contains no {word_length}-letter words"
            ),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::EmptySolutions { .. } => None,
        }
    }
}

/// Solution and accepted-guess pools for one word length
#[derive(Debug, Clone)]
pub struct WordPools {
    word_length: usize,
    solutions: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl WordPools {
    /// Build pools from already loaded words
    ///
    /// Duplicates are dropped and every solution is also an accepted guess.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::EmptySolutions` if no solution has
    /// `word_length` letters.
    pub fn new(
        word_length: usize,
        solutions: impl IntoIterator<Item = Word>,
        extra_guesses: impl IntoIterator<Item = Word>,
    ) -> Result<Self, WordListError> {
        Self::with_origin(word_length, solutions, extra_guesses, "in memory")
    }

    /// Load pools as described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if a configured file cannot be read or if the
    /// solutions pool ends up empty.
    pub fn load(config: &GameConfig) -> Result<Self, WordListError> {
        let length = config.word_length;

        let (solutions, origin) = match &config.solutions_path {
            Some(path) => (
                loader::load_from_file(path, length)?,
                path.display().to_string(),
            ),
            None => (
                loader::words_from_slice(SOLUTIONS, length),
                "(embedded)".to_string(),
            ),
        };

        let extra = match &config.guesses_path {
            Some(path) => loader::load_from_file(path, length)?,
            None => loader::words_from_slice(GUESSES, length),
        };

        Self::with_origin(length, solutions, extra, &origin)
    }

    fn with_origin(
        word_length: usize,
        solutions: impl IntoIterator<Item = Word>,
        extra_guesses: impl IntoIterator<Item = Word>,
        origin: &str,
    ) -> Result<Self, WordListError> {
        let mut accepted = FxHashSet::default();
        let solutions: Vec<Word> = solutions
            .into_iter()
            .filter(|w| w.len() == word_length)
            .filter(|w| accepted.insert(w.clone()))
            .collect();

        if solutions.is_empty() {
            return Err(WordListError::EmptySolutions {
                origin: origin.to_string(),
                word_length,
            });
        }

        accepted.extend(
            extra_guesses
                .into_iter()
                .filter(|w| w.len() == word_length),
        );

        Ok(Self {
            word_length,
            solutions,
            accepted,
        })
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Possible target words, never empty
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Check whether `word` may be submitted as a guess
    #[must_use]
    pub fn is_accepted(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::fs;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_duel_pools_{}_{name}.txt",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        for &word in SOLUTIONS.iter().chain(GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn default_config_loads_embedded_pools() {
        let pools = WordPools::load(&GameConfig::default()).unwrap();
        assert_eq!(pools.word_length(), 5);
        assert_eq!(pools.solutions().len(), SOLUTIONS_COUNT);
        assert!(pools.accepted_count() >= pools.solutions().len());
        assert!(pools.is_accepted(&Word::new("crane").unwrap()));
    }

    #[test]
    fn solutions_are_accepted_guesses() {
        let pools = WordPools::new(
            5,
            words_from_slice(&["crane", "slate"], 5),
            words_from_slice(&["adieu"], 5),
        )
        .unwrap();

        assert!(pools.is_accepted(&Word::new("crane").unwrap()));
        assert!(pools.is_accepted(&Word::new("slate").unwrap()));
        assert!(pools.is_accepted(&Word::new("adieu").unwrap()));
        assert!(!pools.is_accepted(&Word::new("zzzzz").unwrap()));
        assert_eq!(pools.accepted_count(), 3);
    }

    #[test]
    fn duplicate_solutions_collapse() {
        let pools = WordPools::new(
            5,
            words_from_slice(&["crane", "CRANE", "slate"], 5),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(pools.solutions().len(), 2);
    }

    #[test]
    fn empty_solutions_rejected() {
        let result = WordPools::new(5, Vec::new(), words_from_slice(&["crane"], 5));
        assert!(matches!(
            result,
            Err(WordListError::EmptySolutions { word_length: 5, .. })
        ));
    }

    #[test]
    fn unsupported_length_with_embedded_lists_rejected() {
        let config = GameConfig {
            word_length: 9,
            ..GameConfig::default()
        };
        assert!(matches!(
            WordPools::load(&config),
            Err(WordListError::EmptySolutions { word_length: 9, .. })
        ));
    }

    #[test]
    fn missing_configured_file_rejected() {
        let config = GameConfig {
            solutions_path: Some(PathBuf::from("/definitely/not/here.txt")),
            ..GameConfig::default()
        };
        assert!(matches!(
            WordPools::load(&config),
            Err(WordListError::Io { .. })
        ));
    }

    #[test]
    fn configured_files_replace_embedded_lists() {
        let solutions = temp_file("solutions", "crane,\nslate,\nCRANE\n");
        let guesses = temp_file("guesses", "adieu\nroate\ntoolong\n");
        let config = GameConfig {
            solutions_path: Some(solutions.clone()),
            guesses_path: Some(guesses.clone()),
            ..GameConfig::default()
        };

        let pools = WordPools::load(&config);
        fs::remove_file(&solutions).ok();
        fs::remove_file(&guesses).ok();
        let pools = pools.unwrap();

        let texts: Vec<&str> = pools.solutions().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE"]);
        assert_eq!(pools.accepted_count(), 4);
        assert!(pools.is_accepted(&Word::new("roate").unwrap()));
        // Embedded words are not mixed in
        assert!(!pools.is_accepted(&Word::new("irate").unwrap()));
    }

    #[test]
    fn empty_solutions_file_rejected() {
        let solutions = temp_file("empty", "\n   \nabc\n");
        let config = GameConfig {
            solutions_path: Some(solutions.clone()),
            ..GameConfig::default()
        };

        let result = WordPools::load(&config);
        fs::remove_file(&solutions).ok();

        match result {
            Err(WordListError::EmptySolutions {
                origin,
                word_length,
            }) => {
                assert_eq!(origin, solutions.display().to_string());
                assert_eq!(word_length, 5);
            }
            other => panic!("expected EmptySolutions, got {other:?}"),
        }
    }
}
