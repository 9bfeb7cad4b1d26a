//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// Format a guess as colored letter tiles
///
/// Green background for correct letters, yellow for present, dim for absent.
#[must_use]
pub fn colored_tiles(word: &Word, feedback: &Feedback) -> String {
    word.letters()
        .iter()
        .zip(feedback.letters())
        .map(|(&letter, &kind)| tile(char::from(letter), kind).to_string())
        .collect()
}

fn tile(letter: char, kind: LetterFeedback) -> ColoredString {
    let text = format!(" {letter} ");
    match kind {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

/// Join guessed words with commas, as in "CRATE, SLATE"
#[must_use]
pub fn join_words(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
