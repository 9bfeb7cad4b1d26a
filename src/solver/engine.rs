//! AI solver
//!
//! Keeps a shrinking pool of candidate targets consistent with all feedback
//! observed so far and picks the next guess from it.

use super::constraints::CandidateFilter;
use super::knowledge::Knowledge;
use super::strategy::Strategy;
use crate::core::{Feedback, Word};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Candidate-filtering solver
///
/// Sees every scored guess of the game, its own and the opponent's, through
/// [`Solver::observe`].
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    candidates: Vec<&'a Word>,
    knowledge: Knowledge,
    rng: StdRng,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over the solutions pool
    ///
    /// # Parameters
    /// - `strategy`: how to choose among surviving candidates
    /// - `solutions`: every word that may be the target
    /// - `rng`: source for tie breaks and degraded-mode picks
    pub fn new(strategy: S, solutions: &'a [Word], rng: StdRng) -> Self {
        Self {
            strategy,
            candidates: solutions.iter().collect(),
            knowledge: Knowledge::new(),
            rng,
        }
    }

    /// Learn from a scored guess
    pub fn observe(&mut self, guess: &Word, feedback: &Feedback) {
        self.knowledge.merge(Knowledge::from_feedback(guess, feedback));
    }

    /// Pick the next guess
    ///
    /// Narrows the pool to words consistent with everything observed and not
    /// in `history`, then lets the strategy choose. If nothing survives, the
    /// pool is kept and a random unplayed word from it is returned instead.
    ///
    /// Returns `None` only when every pool word has already been played.
    pub fn next_guess(&mut self, history: &[Word]) -> Option<&'a Word> {
        let filter = CandidateFilter::new(&self.knowledge, history);
        let surviving: Vec<&'a Word> = self
            .candidates
            .iter()
            .copied()
            .filter(|w| filter.accepts(w))
            .collect();

        if surviving.is_empty() {
            let unplayed: Vec<&'a Word> = self
                .candidates
                .iter()
                .copied()
                .filter(|w| !history.contains(w))
                .collect();
            return unplayed.choose(&mut self.rng).copied();
        }

        self.candidates = surviving;
        self.strategy.select_guess(&self.candidates, &mut self.rng)
    }

    /// Words still considered possible targets
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn count_candidates(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::strategy::{DiversityStrategy, StrategyType};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn setup() -> Vec<Word> {
        words_from_slice(
            &[
                "crane", "crate", "grate", "irate", "slate", "trace", "react", "cigar", "fluff",
                "speed", "plank", "eerie",
            ],
            5,
        )
    }

    fn solver(solutions: &[Word], seed: u64) -> Solver<'_, DiversityStrategy> {
        Solver::new(DiversityStrategy, solutions, StdRng::seed_from_u64(seed))
    }

    fn play(
        solver: &mut Solver<'_, impl Strategy>,
        history: &mut Vec<Word>,
        guess: &str,
        target: &Word,
    ) {
        let guess = Word::new(guess).unwrap();
        let feedback = Feedback::calculate(&guess, target);
        solver.observe(&guess, &feedback);
        history.push(guess);
    }

    #[test]
    fn first_guess_comes_from_pool() {
        let solutions = setup();
        let mut solver = solver(&solutions, 1);
        let guess = solver.next_guess(&[]).unwrap();
        assert!(solutions.contains(guess));
        assert_eq!(solver.count_candidates(), solutions.len());
    }

    #[test]
    fn guesses_stay_consistent_with_feedback() {
        let solutions = setup();
        let target = Word::new("crane").unwrap();
        let mut solver = solver(&solutions, 2);
        let mut history = Vec::new();

        play(&mut solver, &mut history, "crate", &target);
        let guess = solver.next_guess(&history).unwrap();

        // Only CRANE matches C R A _ E without T among the pool
        assert_eq!(guess.text(), "CRANE");
        assert_eq!(solver.count_candidates(), 1);
    }

    #[test]
    fn candidate_pool_never_grows() {
        let solutions = setup();
        let target = Word::new("grate").unwrap();

        for seed in 0..10 {
            let mut solver = solver(&solutions, seed);
            let mut history = Vec::new();
            let mut previous: Vec<Word> = solutions.clone();

            for _ in 0..6 {
                let Some(guess) = solver.next_guess(&history) else {
                    break;
                };
                let current: Vec<Word> = solver.candidates().iter().map(|&w| w.clone()).collect();
                assert!(current.iter().all(|w| previous.contains(w)));
                previous = current;

                let text = guess.text().to_string();
                play(&mut solver, &mut history, &text, &target);
                if text == "GRATE" {
                    break;
                }
            }
        }
    }

    #[test]
    fn solver_finds_target_within_pool() {
        let solutions = setup();
        for target in &solutions {
            let mut solver = Solver::new(
                StrategyType::default(),
                &solutions,
                StdRng::seed_from_u64(5),
            );
            let mut history = Vec::new();
            let mut solved = false;

            for _ in 0..solutions.len() {
                let guess = solver.next_guess(&history).unwrap().clone();
                play(&mut solver, &mut history, guess.text(), target);
                if &guess == target {
                    solved = true;
                    break;
                }
            }
            assert!(solved, "never guessed {target}");
        }
    }

    #[test]
    fn never_repeats_a_played_word() {
        let solutions = setup();
        let target = Word::new("slate").unwrap();
        let mut solver = solver(&solutions, 9);
        let mut history = Vec::new();

        play(&mut solver, &mut history, "irate", &target);
        play(&mut solver, &mut history, "grate", &target);
        for _ in 0..3 {
            let guess = solver.next_guess(&history).unwrap().clone();
            assert!(!history.contains(&guess));
            if guess == target {
                break;
            }
            play(&mut solver, &mut history, guess.text(), &target);
        }
    }

    #[test]
    fn degraded_mode_when_nothing_survives() {
        let solutions = words_from_slice(&["crane", "slate", "fluff"], 5);
        let mut solver = solver(&solutions, 4);

        // Feedback claiming every letter of ZZZZZ is correct matches no pool word
        let bogus = Word::new("zzzzz").unwrap();
        solver.observe(&bogus, &Feedback::calculate(&bogus, &bogus));

        let guess = solver.next_guess(&[]).unwrap();
        assert!(solutions.contains(guess));
        assert_eq!(solver.count_candidates(), 3);
    }

    #[test]
    fn none_when_everything_played() {
        let solutions = words_from_slice(&["crane", "slate"], 5);
        let mut solver = solver(&solutions, 4);
        assert!(solver.next_guess(&solutions).is_none());
    }
}
