//! TUI application state and logic

use crate::commands::{PlayOptions, session_rng};
use crate::core::{Feedback, Word};
use crate::duel::{AiPlayer, DuelOutcome, DuelResult, Move, Player, Side};
use crate::game::{Game, GuessOutcome};
use crate::solver::{Solver, StrategyType};
use crate::wordlists::WordPools;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pools: &'a WordPools,
    max_turns: usize,
    strategy: StrategyType,
    rng: StdRng,
    pub game: Game<'a>,
    pub ai: AiPlayer<'a, StrategyType>,
    pub board: Vec<BoardRow>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub last_outcome: Option<DuelOutcome>,
    pub verbose: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

/// One scored guess on the board
#[derive(Debug, Clone)]
pub struct BoardRow {
    pub side: Side,
    pub word: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results across the games of one session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub human_wins: usize,
    pub ai_wins: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(pools: &'a WordPools, max_turns: usize, options: PlayOptions) -> Self {
        let mut rng = session_rng(options.seed);
        let game = Game::new(pools, max_turns, &mut rng);
        let ai = Self::new_ai(pools, options.strategy, &mut rng);

        let mut app = Self {
            pools,
            max_turns,
            strategy: options.strategy,
            rng,
            game,
            ai,
            board: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::Guessing,
            last_outcome: None,
            verbose: options.verbose,
            should_quit: false,
        };
        app.add_welcome();
        app
    }

    fn new_ai(
        pools: &'a WordPools,
        strategy: StrategyType,
        rng: &mut StdRng,
    ) -> AiPlayer<'a, StrategyType> {
        let solver = Solver::new(
            strategy,
            pools.solutions(),
            StdRng::seed_from_u64(rng.random()),
        );
        AiPlayer::new(solver)
    }

    fn add_welcome(&mut self) {
        self.add_message(
            &format!(
                "Guess the {}-letter word before the AI does. You share {} guesses.",
                self.game.word_length(),
                self.max_turns
            ),
            MessageStyle::Info,
        );
    }

    /// Submit the typed guess, then let the AI answer
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        match self.game.submit_guess(&input) {
            Ok(outcome) => {
                if !self.record(Side::Human, outcome) {
                    self.ai_turn();
                }
            }
            Err(err) => self.add_message(&format!("❌ {err}"), MessageStyle::Error),
        }
    }

    fn ai_turn(&mut self) {
        match self.ai.next_move(&self.game) {
            Ok(Move::Guess(guess)) => match self.game.submit_guess(&guess) {
                Ok(outcome) => {
                    self.record(Side::Ai, outcome);
                }
                Err(err) => self.add_message(&format!("AI: {err}"), MessageStyle::Error),
            },
            Ok(Move::Pass | Move::Quit) => self.add_message(
                "AI has nothing left to guess and passes.",
                MessageStyle::Info,
            ),
            Err(err) => self.add_message(&format!("AI: {err}"), MessageStyle::Error),
        }
    }

    /// Put a scored guess on the board; returns true if it ended the game
    fn record(&mut self, side: Side, outcome: GuessOutcome) -> bool {
        self.ai.observe(&outcome);

        let style = if outcome.is_win {
            MessageStyle::Success
        } else {
            MessageStyle::Info
        };
        self.add_message(&format!("{side}: {}", outcome.message), style);

        let is_win = outcome.is_win;
        self.board.push(BoardRow {
            side,
            word: outcome.word,
            feedback: outcome.feedback,
        });

        if is_win {
            self.finish(DuelResult::Won(side));
        } else if self.game.is_game_over() {
            self.finish(DuelResult::Exhausted);
        }
        self.input_mode == InputMode::GameOver
    }

    fn finish(&mut self, result: DuelResult) {
        let outcome = DuelOutcome {
            result,
            turns_used: self.game.turns_used(),
            target: self.game.target().clone(),
        };

        self.stats.total_games += 1;
        match outcome.winner() {
            Some(Side::Human) => {
                self.stats.human_wins += 1;
                self.add_message("🎉 You beat the AI!", MessageStyle::Success);
            }
            Some(Side::Ai) => {
                self.stats.ai_wins += 1;
                self.add_message("🤖 The AI got there first.", MessageStyle::Error);
            }
            None => self.add_message(
                &format!(
                    "Sorry, both player and AI have run out of guesses. The target word was: {}",
                    outcome.target
                ),
                MessageStyle::Error,
            ),
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);

        self.last_outcome = Some(outcome);
        self.input_mode = InputMode::GameOver;
    }

    pub fn new_game(&mut self) {
        self.game = Game::new(self.pools, self.max_turns, &mut self.rng);
        self.ai = Self::new_ai(self.pools, self.strategy, &mut self.rng);
        self.board.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.last_outcome = None;
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
        self.add_welcome();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    /// Add a typed letter, up to the word length
    pub fn push_letter(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.game.word_length() {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match (app.input_mode, key.code) {
                (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                (_, KeyCode::Esc) | (InputMode::GameOver, KeyCode::Char('q')) => {
                    app.should_quit = true;
                }
                (InputMode::GameOver, KeyCode::Char('n')) => app.new_game(),
                (InputMode::Guessing, KeyCode::Char(c)) => app.push_letter(c),
                (InputMode::Guessing, KeyCode::Backspace) => {
                    app.input_buffer.pop();
                }
                (InputMode::Guessing, KeyCode::Enter) => app.submit_input(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
