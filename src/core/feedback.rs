//! Guess feedback calculation and representation
//!
//! Each guessed letter is classified as:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter occurs elsewhere in the target
//! - Absent (gray): letter not in the target, or all its occurrences used up

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Emoji square used in feedback rows
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one entry per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate letters are handled as a multiset: a letter is reported
    /// `Present` only as many times as it still occurs in the target once the
    /// exact matches have been taken out.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the target pool
    /// 2. Second pass: mark remaining letters present while the pool has them
    ///
    /// Both words are expected to have the same length; extra letters in a
    /// longer guess are reported absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Feedback, LetterFeedback, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.letters()[3], LetterFeedback::Absent);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬜🟩");
    /// assert!(!feedback.is_win());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.letters();
        let target_letters = target.letters();
        let mut result = vec![LetterFeedback::Absent; guess.len()];
        let mut remaining = target.letter_counts();

        for (i, (&g, &t)) in guess.iter().zip(target_letters).enumerate() {
            if g == t {
                result[i] = LetterFeedback::Correct;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Build feedback directly from per-letter values
    #[cfg(test)]
    const fn from_letters(letters: Vec<LetterFeedback>) -> Self {
        Self(letters)
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[LetterFeedback] {
        &self.0
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterFeedback::Correct)
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterFeedback::Present)
    }

    fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Convert feedback to an emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
