//! Plain-text duel mode
//!
//! Human types guesses on stdin, the AI answers, status goes to stdout.

use crate::config::GameConfig;
use crate::duel::{AiPlayer, ConsolePlayer, DuelOutcome, run_duel};
use crate::game::Game;
use crate::solver::{Solver, StrategyType};
use crate::wordlists::WordPools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;

/// Options shared by the interactive modes
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub strategy: StrategyType,
    /// Fixed seed for reproducible targets and AI choices
    pub seed: Option<u64>,
    pub verbose: bool,
}

/// Random source for a session: seeded when requested, from the OS otherwise
#[must_use]
pub fn session_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Run one human versus AI game on the terminal
///
/// # Errors
///
/// Returns an I/O error if reading stdin or writing stdout fails.
pub fn run_play(
    pools: &WordPools,
    config: &GameConfig,
    options: PlayOptions,
) -> io::Result<DuelOutcome> {
    let mut rng = session_rng(options.seed);
    let mut game = Game::new(pools, config.max_turns, &mut rng);

    let solver = Solver::new(
        options.strategy,
        pools.solutions(),
        StdRng::seed_from_u64(rng.random()),
    );
    let mut ai = AiPlayer::new(solver);
    let mut human = ConsolePlayer::new(io::stdin().lock(), io::stdout());

    run_duel(
        &mut game,
        &mut [&mut human, &mut ai],
        &mut io::stdout(),
        options.verbose,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = session_rng(Some(9));
        let mut b = session_rng(Some(9));
        let x: u64 = a.random();
        let y: u64 = b.random();
        assert_eq!(x, y);
    }

    #[test]
    fn seeded_games_share_a_target() {
        let pools = WordPools::load(&GameConfig::default()).unwrap();
        let first = Game::new(&pools, 6, &mut session_rng(Some(21)));
        let second = Game::new(&pools, 6, &mut session_rng(Some(21)));
        assert_eq!(first.target(), second.target());
    }
}
