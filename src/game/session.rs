//! A single game session
//!
//! Owns the hidden target, the revealed display state and the shared guess
//! history. Human and AI guesses both go through [`Game::submit_guess`].

use super::GuessError;
use crate::core::{DisplayState, Feedback, LetterFeedback, Word};
use crate::wordlists::WordPools;
use rand::Rng;

/// Result of a scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub word: Word,
    pub feedback: Feedback,
    pub is_win: bool,
    pub message: String,
}

/// State of one game against a hidden target word
#[derive(Debug, Clone)]
pub struct Game<'a> {
    pools: &'a WordPools,
    target: Word,
    display: DisplayState,
    history: Vec<Word>,
    max_turns: usize,
    won: bool,
}

impl<'a> Game<'a> {
    /// Start a game with a target drawn uniformly from the solutions pool
    pub fn new<R: Rng>(pools: &'a WordPools, max_turns: usize, rng: &mut R) -> Self {
        // WordPools guarantees at least one solution
        let index = rng.random_range(0..pools.solutions().len());
        let target = pools.solutions()[index].clone();
        Self::with_target(pools, target, max_turns)
    }

    /// Start a game with a known target
    ///
    /// The target is always accepted as a guess, even if it is missing from
    /// the accepted pool.
    #[must_use]
    pub fn with_target(pools: &'a WordPools, target: Word, max_turns: usize) -> Self {
        Self {
            pools,
            display: DisplayState::new(target.len()),
            target,
            history: Vec::new(),
            max_turns,
            won: false,
        }
    }

    /// Validate, score and record a guess
    ///
    /// Checks run in order: length, repeated guess, dictionary membership.
    /// A rejected guess leaves the game untouched.
    ///
    /// # Errors
    ///
    /// Returns the `GuessError` describing the first failed check, or
    /// `GuessError::GameOver` once the game has finished.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::Word;
    /// use wordle_duel::game::Game;
    /// use wordle_duel::wordlists::{WordPools, loader::words_from_slice};
    ///
    /// let solutions = words_from_slice(&["crane", "crate"], 5);
    /// let pools = WordPools::new(5, solutions, Vec::new()).unwrap();
    /// let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
    ///
    /// let outcome = game.submit_guess("crate").unwrap();
    /// assert!(!outcome.is_win);
    /// assert_eq!(game.display().to_string(), "CRA*E");
    /// assert_eq!(game.remaining_turns(), 5);
    /// ```
    pub fn submit_guess(&mut self, input: &str) -> Result<GuessOutcome, GuessError> {
        if self.is_game_over() {
            return Err(GuessError::GameOver);
        }

        let normalized = input.trim().to_uppercase();
        let length = normalized.chars().count();
        if length != self.target.len() {
            return Err(GuessError::InvalidLength {
                expected: self.target.len(),
                actual: length,
            });
        }

        if self.history.iter().any(|w| w.text() == normalized) {
            return Err(GuessError::AlreadyGuessed(normalized));
        }

        let word = match Word::new(&normalized) {
            Ok(word) if word == self.target || self.pools.is_accepted(&word) => word,
            _ => return Err(GuessError::NotInWordList(normalized)),
        };

        let feedback = Feedback::calculate(&word, &self.target);
        self.display.reveal(&word, &feedback);
        self.history.push(word.clone());
        self.won = feedback.is_win();

        let message = self.describe(&word, &feedback);
        Ok(GuessOutcome {
            word,
            is_win: self.won,
            feedback,
            message,
        })
    }

    fn describe(&self, word: &Word, feedback: &Feedback) -> String {
        if feedback.is_win() {
            return format!("Congratulations! The word is: {}", self.target);
        }

        let mut present: Vec<char> = Vec::new();
        for (&letter, &kind) in word.letters().iter().zip(feedback.letters()) {
            let letter = char::from(letter);
            if kind == LetterFeedback::Present && !present.contains(&letter) {
                present.push(letter);
            }
        }

        if present.is_empty() {
            format!("Incorrect guess. The word so far is: {}", self.display)
        } else {
            let letters: Vec<String> = present.iter().map(char::to_string).collect();
            format!(
                "Correct letters {}, but not in the right position. The word so far is: {}",
                letters.join(" "),
                self.display
            )
        }
    }

    /// True after a win or once every turn has been used
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.won || self.turns_used() >= self.max_turns
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        self.max_turns.saturating_sub(self.turns_used())
    }

    /// Number of scored guesses so far
    #[must_use]
    pub fn turns_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Scored guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[Word] {
        &self.history
    }

    #[must_use]
    pub const fn display(&self) -> &DisplayState {
        &self.display
    }

    /// The hidden word, for the final reveal
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn pools(&self) -> &'a WordPools {
        self.pools
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }
}
