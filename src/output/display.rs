//! Status output for duels and command results
//!
//! Duel output goes to any `Write` so the turn loop can be run against a
//! buffer in tests.

use super::formatters::{colored_tiles, create_progress_bar, join_words};
use crate::commands::BenchmarkResult;
use crate::duel::{DuelOutcome, DuelResult, Side};
use crate::game::{Game, GuessError, GuessOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Opening banner with the rules of the current game
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_intro<W: Write>(out: &mut W, game: &Game<'_>) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "              W O R D L E   D U E L".bright_cyan().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "\nGuess the {}-letter word before the AI does. You share {} guesses.",
        game.word_length(),
        game.max_turns()
    )?;
    writeln!(out, "Type 'quit' to leave the game.")
}

/// Separator printed at the start of each round
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_round_separator<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}\n", "=".repeat(30).bright_black())
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn write_ai_thinking<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "AI's turn: Guessing...".bright_magenta())
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn write_pass<W: Write>(out: &mut W, side: Side) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("{side} has nothing left to guess and passes.").yellow()
    )
}

/// # Errors
///
/// Returns an error if writing fails.
pub fn write_rejection<W: Write>(out: &mut W, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{}", format!("❌ {error}").red())
}

/// Per-guess status: who guessed, tiles, message and remaining turns
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_guess_status<W: Write>(
    out: &mut W,
    side: Side,
    outcome: &GuessOutcome,
    game: &Game<'_>,
) -> io::Result<()> {
    if side == Side::Ai {
        let word = outcome.word.text().bright_white().bold();
        writeln!(out, "AI guesses: {word}")?;
    }
    writeln!(
        out,
        "{}  {}",
        colored_tiles(&outcome.word, &outcome.feedback),
        outcome.feedback.to_emoji()
    )?;

    let message = if outcome.is_win {
        outcome.message.green().bold()
    } else {
        outcome.message.normal()
    };
    writeln!(out, "{message}")?;

    writeln!(
        out,
        "Target Word: {}",
        game.display().to_string().bright_yellow().bold()
    )?;
    writeln!(out, "Number of Guesses Left: {}", game.remaining_turns())?;
    writeln!(out, "Previous Guesses: {}", join_words(game.history()))
}

/// Dimmed diagnostics lines, skipped when there are none
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_diagnostics<W: Write>(out: &mut W, side: Side, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", format!("  [{side}] {line}").bright_black())?;
    }
    Ok(())
}

/// Final line of a duel
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_duel_result<W: Write>(out: &mut W, outcome: &DuelOutcome) -> io::Result<()> {
    writeln!(out)?;
    match outcome.result {
        DuelResult::Won(side) => {
            writeln!(out, "{}", format!("🎉 {side} wins!").green().bold())?;
            writeln!(
                out,
                "Solved in {} of the shared guesses.",
                outcome.turns_used
            )
        }
        DuelResult::Exhausted => writeln!(
            out,
            "{}",
            format!(
                "Sorry, both player and AI have run out of guesses. The target word was: {}",
                outcome.target
            )
            .red()
            .bold()
        ),
        DuelResult::Abandoned => writeln!(
            out,
            "{}",
            format!("Game abandoned. The target word was: {}", outcome.target).yellow()
        ),
    }
}

/// Print the result of an AI self-play benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Games won:        {}",
        format!("{} ({:.1}%)", result.games_won, result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    if let Some(average) = result.average_guesses() {
        println!("   Average guesses:  {average:.2} (wins only)");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, &count) in result.distribution.iter().enumerate().skip(1) {
        let pct = if result.total_games > 0 {
            count as f64 / result.total_games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let lost = result.total_games - result.games_won;
    let bar = create_progress_bar(lost as f64, result.total_games as f64, 40);
    println!("   X: {} {lost:4}", bar.red());
}
