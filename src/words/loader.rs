//! Word list loading utilities
//!
//! Builds a [`Vocabulary`] from files or embedded string slices.

use super::Vocabulary;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a vocabulary from a newline-delimited word list file
///
/// Lines that are empty or fail word validation are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vocabulary> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(Vocabulary::new(words))
}

/// Build a vocabulary from a string slice, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_arena::words::{loader::vocabulary_from_slice, DEFAULT_WORDS};
///
/// let vocabulary = vocabulary_from_slice(DEFAULT_WORDS);
/// assert_eq!(vocabulary.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn vocabulary_from_slice(slice: &[&str]) -> Vocabulary {
    Vocabulary::new(slice.iter().filter_map(|&s| Word::new(s).ok()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice_converts_valid_words() {
        let vocabulary = vocabulary_from_slice(&["axiom", "major", "argon"]);

        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.words()[0].text(), "axiom");
        assert_eq!(vocabulary.words()[2].text(), "argon");
    }

    #[test]
    fn from_slice_skips_invalid() {
        let vocabulary = vocabulary_from_slice(&["axiom", "toolong", "abc", "major"]);

        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.words()[0].text(), "axiom");
        assert_eq!(vocabulary.words()[1].text(), "major");
    }

    #[test]
    fn from_slice_empty() {
        let vocabulary = vocabulary_from_slice(&[]);
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(load_from_file("/definitely/not/a/wordlist.txt").is_err());
    }
}
