//! Benchmark command
//!
//! Lets the AI play solo games against many targets and reports how often,
//! and how quickly, it finds the word.

use crate::core::Word;
use crate::game::Game;
use crate::solver::{Solver, StrategyType};
use crate::wordlists::WordPools;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub strategy: &'static str,
    pub total_games: usize,
    pub games_won: usize,
    /// `distribution[n]` is the number of games won on guess `n`
    pub distribution: Vec<usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }

    /// Mean number of guesses over won games
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        if self.games_won == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .enumerate()
            .map(|(guesses, &count)| guesses * count)
            .sum();
        Some(total as f64 / self.games_won as f64)
    }
}

/// Pick up to `count` distinct targets from the solutions pool
#[must_use]
pub fn select_targets(pools: &WordPools, count: usize, rng: &mut StdRng) -> Vec<Word> {
    pools
        .solutions()
        .choose_multiple(rng, count)
        .cloned()
        .collect()
}

/// Play one AI-only game and return the winning guess number
fn solo_game(
    pools: &WordPools,
    strategy: StrategyType,
    target: &Word,
    max_turns: usize,
    seed: u64,
) -> Option<usize> {
    let mut game = Game::with_target(pools, target.clone(), max_turns);
    let mut solver = Solver::new(strategy, pools.solutions(), StdRng::seed_from_u64(seed));

    while !game.is_game_over() {
        let guess = solver.next_guess(game.history())?;
        let outcome = game.submit_guess(guess.text()).ok()?;
        solver.observe(&outcome.word, &outcome.feedback);
        if outcome.is_win {
            return Some(game.turns_used());
        }
    }
    None
}

/// Run solo games against every target in parallel
///
/// Each game gets its own solver seeded from `seed` and the target index, so
/// results are reproducible regardless of thread scheduling.
#[must_use]
pub fn run_benchmark(
    pools: &WordPools,
    strategy: StrategyType,
    targets: &[Word],
    max_turns: usize,
    seed: u64,
) -> BenchmarkResult {
    let start = Instant::now();

    let results: Vec<Option<usize>> = targets
        .par_iter()
        .enumerate()
        .map(|(i, target)| {
            let game_seed = seed.wrapping_add(i as u64);
            solo_game(pools, strategy, target, max_turns, game_seed)
        })
        .collect();

    let mut distribution = vec![0; max_turns + 1];
    for guesses in results.iter().flatten() {
        distribution[*guesses] += 1;
    }

    BenchmarkResult {
        strategy: strategy.name(),
        total_games: targets.len(),
        games_won: results.iter().filter(|r| r.is_some()).count(),
        distribution,
        duration: start.elapsed(),
    }
}
