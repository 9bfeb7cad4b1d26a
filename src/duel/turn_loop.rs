//! Turn loop orchestration
//!
//! Players move in order until someone wins, the shared turn counter runs
//! out, or the human leaves. The result is returned as a value.

use super::player::{Move, Player, Side};
use crate::core::Word;
use crate::game::Game;
use crate::output::display as out;
use std::io::{self, Write};

/// How a duel ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelResult {
    Won(Side),
    /// Every turn used without a correct guess
    Exhausted,
    /// A player quit, or a full round passed without any scored guess
    Abandoned,
}

/// Final state of a duel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelOutcome {
    pub result: DuelResult,
    pub turns_used: usize,
    pub target: Word,
}

impl DuelOutcome {
    #[must_use]
    pub const fn winner(&self) -> Option<Side> {
        match self.result {
            DuelResult::Won(side) => Some(side),
            DuelResult::Exhausted | DuelResult::Abandoned => None,
        }
    }
}

/// Play `game` to completion with `players` taking turns in order
///
/// Rejected guesses are reported and, for players that retry, asked again
/// without consuming a turn. Every scored guess is shown to all players.
///
/// # Errors
///
/// Returns an I/O error if reading a move or writing status output fails.
pub fn run_duel<W: Write>(
    game: &mut Game<'_>,
    players: &mut [&mut dyn Player],
    output: &mut W,
    verbose: bool,
) -> io::Result<DuelOutcome> {
    out::write_intro(output, game)?;

    let result = 'rounds: loop {
        out::write_round_separator(output)?;
        let mut scored_this_round = false;

        for current in 0..players.len() {
            if game.is_game_over() {
                break 'rounds DuelResult::Exhausted;
            }

            let side = players[current].side();
            if side == Side::Ai {
                out::write_ai_thinking(output)?;
            }

            let outcome = loop {
                let guess = match players[current].next_move(game)? {
                    Move::Guess(guess) => guess,
                    Move::Pass => {
                        out::write_pass(output, side)?;
                        break None;
                    }
                    Move::Quit => break 'rounds DuelResult::Abandoned,
                };

                match game.submit_guess(&guess) {
                    Ok(outcome) => break Some(outcome),
                    Err(err) => {
                        out::write_rejection(output, &err)?;
                        if !players[current].retry_after_rejection() {
                            break None;
                        }
                    }
                }
            };

            let Some(outcome) = outcome else {
                continue;
            };
            scored_this_round = true;

            for player in players.iter_mut() {
                player.observe(&outcome);
            }

            out::write_guess_status(output, side, &outcome, game)?;
            if verbose {
                for player in players.iter() {
                    out::write_diagnostics(output, player.side(), &player.diagnostics())?;
                }
            }

            if outcome.is_win {
                break 'rounds DuelResult::Won(side);
            }
        }

        if game.is_game_over() {
            break DuelResult::Exhausted;
        }
        if !scored_this_round {
            break DuelResult::Abandoned;
        }
    };

    let outcome = DuelOutcome {
        result,
        turns_used: game.turns_used(),
        target: game.target().clone(),
    };
    out::write_duel_result(output, &outcome)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::player::AiPlayer;
    use crate::game::GuessOutcome;
    use crate::solver::{DiversityStrategy, Solver};
    use crate::wordlists::WordPools;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Player replaying a fixed list of moves
    struct Scripted {
        side: Side,
        moves: VecDeque<Move>,
        observed: usize,
        retry: bool,
    }

    impl Scripted {
        fn new(side: Side, guesses: &[&str]) -> Self {
            Self {
                side,
                moves: guesses
                    .iter()
                    .map(|g| Move::Guess((*g).to_string()))
                    .collect(),
                observed: 0,
                retry: true,
            }
        }
    }

    impl Player for Scripted {
        fn side(&self) -> Side {
            self.side
        }

        fn next_move(&mut self, _game: &Game<'_>) -> io::Result<Move> {
            Ok(self.moves.pop_front().unwrap_or(Move::Quit))
        }

        fn observe(&mut self, _outcome: &GuessOutcome) {
            self.observed += 1;
        }

        fn retry_after_rejection(&self) -> bool {
            self.retry
        }
    }

    fn pools() -> WordPools {
        WordPools::new(
            5,
            words_from_slice(&["crane", "crate", "slate", "irate", "speed", "plank"], 5),
            words_from_slice(&["adieu", "fluff", "eerie"], 5),
        )
        .unwrap()
    }

    /// Run a duel into a buffer and return the outcome with the printed text
    fn duel(
        game: &mut Game<'_>,
        players: &mut [&mut dyn Player],
        verbose: bool,
    ) -> (DuelOutcome, String) {
        let mut output = Vec::new();
        let outcome = run_duel(game, players, &mut output, verbose).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn six_misses_end_in_loss_revealing_target() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let mut human = Scripted::new(Side::Human, &["slate", "speed", "fluff"]);
        let mut ai = Scripted::new(Side::Ai, &["irate", "plank", "adieu"]);
        let (outcome, output) = duel(&mut game, &mut [&mut human, &mut ai], false);

        assert_eq!(outcome.result, DuelResult::Exhausted);
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.turns_used, 6);
        assert_eq!(human.observed, 6);
        assert_eq!(ai.observed, 6);
        assert!(output.contains(
            "Sorry, both player and AI have run out of guesses. The target word was: CRANE"
        ));
    }

    #[test]
    fn human_win_ends_immediately() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let mut human = Scripted::new(Side::Human, &["CRANE"]);
        let mut ai = Scripted::new(Side::Ai, &["slate"]);
        let (outcome, output) = duel(&mut game, &mut [&mut human, &mut ai], false);

        assert_eq!(outcome.winner(), Some(Side::Human));
        assert_eq!(outcome.turns_used, 1);
        assert_eq!(ai.moves.len(), 1);
        assert!(output.contains("Player wins!"));
    }

    #[test]
    fn rejected_guess_is_asked_again() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let mut human = Scripted::new(Side::Human, &["abc", "zzzzz", "crate", "crane"]);
        let mut ai = Scripted::new(Side::Ai, &["crate", "slate"]);
        ai.retry = false;
        let (outcome, output) = duel(&mut game, &mut [&mut human, &mut ai], false);

        // Human: CRATE (turn 1); AI: CRATE rejected, SLATE never tried; human: CRANE
        assert_eq!(outcome.winner(), Some(Side::Human));
        assert_eq!(outcome.turns_used, 2);
        assert!(output.contains("Guess length should match the length of the word."));
        assert!(output.contains("That's not a real word!"));
        assert!(output.contains("You've already guessed that word."));
    }

    #[test]
    fn ai_uses_feedback_from_human_guess() {
        let solutions = words_from_slice(&["crane", "crate"], 5);
        let pools = WordPools::new(5, solutions, Vec::new()).unwrap();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let mut human = Scripted::new(Side::Human, &["crate"]);
        let rng = StdRng::seed_from_u64(11);
        let solver = Solver::new(DiversityStrategy, pools.solutions(), rng);
        let mut ai = AiPlayer::new(solver);
        let (outcome, output) = duel(&mut game, &mut [&mut human, &mut ai], true);

        assert_eq!(outcome.winner(), Some(Side::Ai));
        assert_eq!(outcome.turns_used, 2);
        assert!(output.contains("CRA*E"));
        assert!(output.contains("AI wins!"));
        assert!(output.contains("candidates remaining"));
    }

    #[test]
    fn quitting_abandons_the_game() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let mut human = Scripted::new(Side::Human, &["slate"]);
        let mut ai = Scripted::new(Side::Ai, &["irate"]);
        let (outcome, output) = duel(&mut game, &mut [&mut human, &mut ai], false);

        assert_eq!(outcome.result, DuelResult::Abandoned);
        assert_eq!(outcome.turns_used, 2);
        assert!(output.contains("CRANE"));
    }

    #[test]
    fn round_without_progress_stops() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let mut ai = Scripted::new(Side::Ai, &["zzzzz"]);
        ai.retry = false;
        let (outcome, _) = duel(&mut game, &mut [&mut ai], false);

        assert_eq!(outcome.result, DuelResult::Abandoned);
        assert_eq!(outcome.turns_used, 0);
    }

    #[test]
    fn odd_turn_limit_stops_mid_round() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 3);
        let mut human = Scripted::new(Side::Human, &["slate", "speed", "fluff"]);
        let mut ai = Scripted::new(Side::Ai, &["irate", "plank"]);
        let (outcome, _) = duel(&mut game, &mut [&mut human, &mut ai], false);

        assert_eq!(outcome.result, DuelResult::Exhausted);
        assert_eq!(outcome.turns_used, 3);
        assert_eq!(ai.moves.len(), 1);
    }
}
