//! Letter constraints learned from feedback
//!
//! Each scored guess produces an immutable [`Knowledge`] snapshot that is then
//! merged into the running knowledge. Merging only ever adds facts.

use crate::core::{Feedback, LetterFeedback, Word};
use rustc_hash::{FxHashMap, FxHashSet};

/// Everything known about the target's letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    absent: FxHashSet<u8>,
    excluded_positions: FxHashMap<u8, FxHashSet<usize>>,
    confirmed: FxHashMap<usize, u8>,
}

impl Knowledge {
    /// Nothing known yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the facts a single scored guess reveals
    ///
    /// - Correct at `i`: position `i` holds that letter
    /// - Present at `i`: the letter occurs, but not at `i`
    /// - Absent at `i`: if the same letter scored Correct or Present elsewhere
    ///   in this guess, only position `i` is ruled out; otherwise the letter
    ///   does not occur at all
    ///
    /// # Examples
    /// ```
    /// use wordle_duel::core::{Feedback, Word};
    /// use wordle_duel::solver::Knowledge;
    ///
    /// let guess = Word::new("eerie").unwrap();
    /// let feedback = Feedback::calculate(&guess, &Word::new("crane").unwrap());
    /// let knowledge = Knowledge::from_feedback(&guess, &feedback);
    ///
    /// assert_eq!(knowledge.confirmed_at(4), Some(b'E'));
    /// assert!(!knowledge.is_absent(b'E'));
    /// assert!(knowledge.is_absent(b'I'));
    /// ```
    #[must_use]
    pub fn from_feedback(guess: &Word, feedback: &Feedback) -> Self {
        let mut snapshot = Self::default();
        let pairs: Vec<(u8, LetterFeedback)> = guess
            .letters()
            .iter()
            .copied()
            .zip(feedback.letters().iter().copied())
            .collect();

        let scored: FxHashSet<u8> = pairs
            .iter()
            .filter(|(_, kind)| *kind != LetterFeedback::Absent)
            .map(|&(letter, _)| letter)
            .collect();

        for (i, &(letter, kind)) in pairs.iter().enumerate() {
            match kind {
                LetterFeedback::Correct => {
                    snapshot.confirmed.insert(i, letter);
                }
                LetterFeedback::Present => snapshot.exclude(letter, i),
                LetterFeedback::Absent if scored.contains(&letter) => snapshot.exclude(letter, i),
                LetterFeedback::Absent => {
                    snapshot.absent.insert(letter);
                }
            }
        }

        snapshot
    }

    fn exclude(&mut self, letter: u8, position: usize) {
        self.excluded_positions
            .entry(letter)
            .or_default()
            .insert(position);
    }

    /// Fold another snapshot into this one
    pub fn merge(&mut self, other: Self) {
        self.absent.extend(other.absent);
        for (letter, positions) in other.excluded_positions {
            self.excluded_positions
                .entry(letter)
                .or_default()
                .extend(positions);
        }
        for (position, letter) in other.confirmed {
            self.confirmed.entry(position).or_insert(letter);
        }
    }

    /// Letter confirmed not to occur in the target
    #[must_use]
    pub fn is_absent(&self, letter: u8) -> bool {
        self.absent.contains(&letter)
    }

    /// Letter confirmed at `position`, if any
    #[must_use]
    pub fn confirmed_at(&self, position: usize) -> Option<u8> {
        self.confirmed.get(&position).copied()
    }

    /// Confirmed `(position, letter)` pairs sorted by position
    #[must_use]
    pub fn confirmed(&self) -> Vec<(usize, u8)> {
        let mut pairs: Vec<(usize, u8)> = self.confirmed.iter().map(|(&p, &l)| (p, l)).collect();
        pairs.sort_unstable();
        pairs
    }

    /// Letters known to occur somewhere in the target, sorted
    #[must_use]
    pub fn known_present(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self
            .excluded_positions
            .keys()
            .copied()
            .chain(self.confirmed.values().copied())
            .collect();
        letters.sort_unstable();
        letters.dedup();
        letters
    }

    /// Positions where `letter` is known not to be
    #[must_use]
    pub fn excluded_positions(&self, letter: u8) -> Option<&FxHashSet<usize>> {
        self.excluded_positions.get(&letter)
    }

    /// Iterate over letters with at least one excluded position
    pub fn exclusions(&self) -> impl Iterator<Item = (u8, &FxHashSet<usize>)> {
        self.excluded_positions.iter().map(|(&l, p)| (l, p))
    }

    /// Absent letters, sorted
    #[must_use]
    pub fn absent_letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.absent.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent.is_empty() && self.excluded_positions.is_empty() && self.confirmed.is_empty()
    }
}
