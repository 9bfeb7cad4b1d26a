//! Candidate consistency checks
//!
//! Each check is independent and looks at one kind of fact. [`CandidateFilter`]
//! combines them into the single predicate the solver applies to its pool.

use super::Knowledge;
use crate::core::Word;

/// Word uses no letter confirmed absent
#[must_use]
pub fn avoids_absent_letters(word: &Word, knowledge: &Knowledge) -> bool {
    !word.letters().iter().any(|&l| knowledge.is_absent(l))
}

/// Word contains every letter known to be in the target
#[must_use]
pub fn contains_known_letters(word: &Word, knowledge: &Knowledge) -> bool {
    knowledge
        .known_present()
        .into_iter()
        .all(|l| word.has_letter(l))
}

/// Word has every confirmed letter at its confirmed position
#[must_use]
pub fn matches_confirmed_positions(word: &Word, knowledge: &Knowledge) -> bool {
    knowledge
        .confirmed()
        .into_iter()
        .all(|(position, letter)| word.letter_at(position) == Some(letter))
}

/// No occurrence of a known letter sits at a position ruled out for it
///
/// Every occurrence is checked, not only the first one.
#[must_use]
pub fn avoids_excluded_positions(word: &Word, knowledge: &Knowledge) -> bool {
    knowledge.exclusions().all(|(letter, excluded)| {
        word.positions_of(letter)
            .all(|position| !excluded.contains(&position))
    })
}

/// Word has not been played yet
#[must_use]
pub fn not_yet_guessed(word: &Word, history: &[Word]) -> bool {
    !history.contains(word)
}

/// All checks combined into one predicate
pub struct CandidateFilter<'k> {
    knowledge: &'k Knowledge,
    history: &'k [Word],
}

impl<'k> CandidateFilter<'k> {
    #[must_use]
    pub const fn new(knowledge: &'k Knowledge, history: &'k [Word]) -> Self {
        Self { knowledge, history }
    }

    /// True if `word` is still a possible target and has not been played
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        avoids_absent_letters(word, self.knowledge)
            && not_yet_guessed(word, self.history)
            && contains_known_letters(word, self.knowledge)
            && matches_confirmed_positions(word, self.knowledge)
            && avoids_excluded_positions(word, self.knowledge)
    }
}
