//! Players taking part in a duel
//!
//! The turn loop only talks to the [`Player`] trait, so the human console
//! player, the AI and scripted test players are interchangeable.

use crate::game::{Game, GuessOutcome};
use crate::solver::{Solver, Strategy};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Which side of the duel made a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Ai,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "Player"),
            Self::Ai => write!(f, "AI"),
        }
    }
}

/// What a player does on its turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Guess(String),
    /// Nothing left to try; the turn passes without a guess
    Pass,
    /// Leave the game
    Quit,
}

/// A participant in the turn loop
pub trait Player {
    fn side(&self) -> Side;

    /// Decide the next move
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading the move fails.
    fn next_move(&mut self, game: &Game<'_>) -> io::Result<Move>;

    /// Called for every scored guess, whoever made it
    fn observe(&mut self, _outcome: &GuessOutcome) {}

    /// Whether to ask again after a rejected guess
    fn retry_after_rejection(&self) -> bool {
        true
    }

    /// Extra diagnostics lines for verbose output
    fn diagnostics(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Human player reading guesses line by line
pub struct ConsolePlayer<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    pub const fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: BufRead, W: Write> Player for ConsolePlayer<R, W> {
    fn side(&self) -> Side {
        Side::Human
    }

    fn next_move(&mut self, _game: &Game<'_>) -> io::Result<Move> {
        write!(self.prompt, "Player's turn: ")?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Move::Quit);
        }

        let guess = line.trim();
        match guess.to_lowercase().as_str() {
            "quit" | "exit" | "q" => Ok(Move::Quit),
            _ => Ok(Move::Guess(guess.to_string())),
        }
    }
}

/// AI player backed by the candidate-filtering solver
pub struct AiPlayer<'a, S: Strategy> {
    solver: Solver<'a, S>,
}

impl<'a, S: Strategy> AiPlayer<'a, S> {
    pub const fn new(solver: Solver<'a, S>) -> Self {
        Self { solver }
    }

    #[must_use]
    pub const fn solver(&self) -> &Solver<'a, S> {
        &self.solver
    }
}

impl<S: Strategy> Player for AiPlayer<'_, S> {
    fn side(&self) -> Side {
        Side::Ai
    }

    fn next_move(&mut self, game: &Game<'_>) -> io::Result<Move> {
        Ok(self
            .solver
            .next_guess(game.history())
            .map_or(Move::Pass, |word| Move::Guess(word.text().to_string())))
    }

    fn observe(&mut self, outcome: &GuessOutcome) {
        self.solver.observe(&outcome.word, &outcome.feedback);
    }

    fn retry_after_rejection(&self) -> bool {
        false
    }

    fn diagnostics(&self) -> Vec<String> {
        let knowledge = self.solver.knowledge();
        let absent = knowledge
            .absent_letters()
            .into_iter()
            .map(char::from)
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ");

        let mut exclusions: Vec<String> = knowledge
            .exclusions()
            .map(|(letter, positions)| {
                let mut positions: Vec<usize> = positions.iter().map(|p| p + 1).collect();
                positions.sort_unstable();
                let positions: Vec<String> = positions.iter().map(ToString::to_string).collect();
                format!("{}@{}", char::from(letter), positions.join(","))
            })
            .collect();
        exclusions.sort();

        let confirmed: Vec<String> = knowledge
            .confirmed()
            .into_iter()
            .map(|(position, letter)| format!("{}{}", char::from(letter), position + 1))
            .collect();

        vec![
            format!("candidates remaining: {}", self.solver.count_candidates()),
            format!("absent letters:       {absent}"),
            format!("confirmed positions:  {}", confirmed.join(" ")),
            format!("excluded positions:   {}", exclusions.join(" ")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::DiversityStrategy;
    use crate::wordlists::WordPools;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pools() -> WordPools {
        let solutions = words_from_slice(&["crane", "crate"], 5);
        WordPools::new(5, solutions, Vec::new()).unwrap()
    }

    #[test]
    fn console_player_reads_lines() {
        let pools = pools();
        let game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let input = io::Cursor::new("crate\n  Crane  \nquit\n");
        let mut prompt = Vec::new();
        {
            let mut player = ConsolePlayer::new(input, &mut prompt);
            let mut next = || player.next_move(&game).unwrap();
            assert_eq!(next(), Move::Guess("crate".into()));
            assert_eq!(next(), Move::Guess("Crane".into()));
            assert_eq!(next(), Move::Quit);
            // End of input
            assert_eq!(next(), Move::Quit);
        }

        let prompt = String::from_utf8(prompt).unwrap();
        assert!(prompt.contains("Player's turn: "));
    }

    #[test]
    fn ai_player_learns_from_observed_guesses() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("crane").unwrap(), 6);
        let rng = StdRng::seed_from_u64(1);
        let solver = Solver::new(DiversityStrategy, pools.solutions(), rng);
        let mut ai = AiPlayer::new(solver);

        let outcome = game.submit_guess("crate").unwrap();
        ai.observe(&outcome);

        assert_eq!(ai.next_move(&game).unwrap(), Move::Guess("CRANE".into()));
        assert!(!ai.retry_after_rejection());

        let diagnostics = ai.diagnostics();
        assert_eq!(diagnostics[0], "candidates remaining: 1");
        assert!(diagnostics[1].ends_with('T'));
        assert!(diagnostics[2].ends_with("C1 R2 A3 E5"));
    }

    #[test]
    fn ai_passes_when_pool_is_exhausted() {
        let pools = pools();
        let mut game = Game::with_target(&pools, Word::new("slate").unwrap(), 6);
        game.submit_guess("crane").unwrap();
        game.submit_guess("crate").unwrap();

        let rng = StdRng::seed_from_u64(1);
        let solver = Solver::new(DiversityStrategy, pools.solutions(), rng);
        let mut ai = AiPlayer::new(solver);
        assert_eq!(ai.next_move(&game).unwrap(), Move::Pass);
    }

    #[test]
    fn side_names() {
        assert_eq!(Side::Human.to_string(), "Player");
        assert_eq!(Side::Ai.to_string(), "AI");
    }
}
