//! Revealed letters of the target word
//!
//! Slots start unknown and become confirmed as exact matches are found.
//! A confirmed slot never goes back to unknown.

use super::{Feedback, LetterFeedback, Word};
use std::fmt;

/// Marker shown for positions that are still unknown
pub const UNKNOWN_MARKER: char = '*';

/// Per-position knowledge shared with every player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    slots: Vec<Option<u8>>,
}

impl DisplayState {
    /// All positions unknown
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Reveal every letter of `guess` that `feedback` marks correct
    ///
    /// Already revealed slots are left as they are.
    pub fn reveal(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (&letter, &kind)) in guess.letters().iter().zip(feedback.letters()).enumerate() {
            if kind == LetterFeedback::Correct
                && let Some(slot) = self.slots.get_mut(i)
                && slot.is_none()
            {
                *slot = Some(letter);
            }
        }
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<u8>] {
        &self.slots
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl fmt::Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            let ch = slot.map_or(UNKNOWN_MARKER, char::from);
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(state: &mut DisplayState, guess: &str, target: &str) {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, &Word::new(target).unwrap());
        state.reveal(&guess, &feedback);
    }

    #[test]
    fn starts_unknown() {
        let state = DisplayState::new(5);
        assert_eq!(state.to_string(), "*****");
        assert_eq!(state.revealed_count(), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn reveals_exact_matches_only() {
        let mut state = DisplayState::new(5);
        reveal(&mut state, "crate", "crane");
        assert_eq!(state.to_string(), "CRA*E");
        assert_eq!(state.revealed_count(), 4);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut state = DisplayState::new(5);
        reveal(&mut state, "crate", "crane");
        // No exact matches at all: nothing is hidden again
        reveal(&mut state, "fluff", "crane");
        assert_eq!(state.to_string(), "CRA*E");
        reveal(&mut state, "plank", "crane");
        assert_eq!(state.to_string(), "CRANE");
        assert!(state.is_complete());
    }
}
