//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Strategies only
//! choose among words that already passed the candidate filter.

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A strategy for picking the next guess out of the surviving candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Word], rng: &mut R) -> Option<&'a Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Prefer words with many distinct letters (default)
    Diversity(DiversityStrategy),
    /// Uniform random choice among candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Word], rng: &mut R) -> Option<&'a Word> {
        match self {
            Self::Diversity(s) => s.select_guess(candidates, rng),
            Self::Random(s) => s.select_guess(candidates, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "diversity", "random".
    /// Defaults to diversity if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Diversity(DiversityStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Diversity(_) => "diversity",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Diversity(DiversityStrategy)
    }
}

/// Letter diversity strategy
///
/// Picks uniformly among the candidates with the fewest repeated letters, so
/// each guess tests as many different letters as possible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiversityStrategy;

impl DiversityStrategy {
    /// Number of letters that repeat an earlier letter of the word
    #[must_use]
    pub fn repeated_letters(word: &Word) -> usize {
        word.len() - word.distinct_letters()
    }
}

impl Strategy for DiversityStrategy {
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Word], rng: &mut R) -> Option<&'a Word> {
        let fewest = candidates
            .iter()
            .map(|w| Self::repeated_letters(w))
            .min()?;

        let best: Vec<&'a Word> = candidates
            .iter()
            .copied()
            .filter(|w| Self::repeated_letters(w) == fewest)
            .collect();

        best.choose(rng).copied()
    }
}

/// Random strategy
///
/// Uniform choice among candidates, with no preference at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a, R: Rng>(&self, candidates: &[&'a Word], rng: &mut R) -> Option<&'a Word> {
        candidates.choose(rng).copied()
    }
}
