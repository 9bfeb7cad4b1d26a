//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from the embedded
//! constants, normalized to a single word length.

use super::WordListError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Normalize one raw list entry
///
/// Trims surrounding whitespace, drops ASCII punctuation (CSV commas, quotes)
/// and uppercases. Returns `None` for blank entries, entries with any other
/// non-letter character, and entries of the wrong length.
///
/// # Examples
/// ```
/// use wordle_duel::wordlists::loader::normalize_entry;
///
/// assert_eq!(normalize_entry(" crane,\r", 5).unwrap().text(), "CRANE");
/// assert!(normalize_entry("word", 5).is_none());
/// ```
#[must_use]
pub fn normalize_entry(line: &str, word_length: usize) -> Option<Word> {
    let cleaned: String = line
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Word::with_length(cleaned, word_length).ok()
}

/// Load words of `word_length` letters from a file, one word per line
///
/// Invalid entries are skipped rather than reported.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_duel::wordlists::loader::load_from_file;
///
/// let words = load_from_file("valid_solutions.csv", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines(), word_length))
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_duel::wordlists::loader::words_from_slice;
/// use wordle_duel::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS, 5);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), word_length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, word_length: usize) -> Vec<Word> {
    lines
        .filter_map(|line| normalize_entry(line, word_length))
        .collect()
}
