//! Vocabulary and secret providers
//!
//! Construction-time configuration objects replacing any notion of global
//! word-list state: sessions receive a vocabulary and a secret through these
//! traits and never touch files or randomness themselves.

use super::loader::{load_from_file, vocabulary_from_slice};
use super::{Vocabulary, DEFAULT_WORDS};
use crate::core::Word;
use rand::Rng;
use std::io;
use std::path::PathBuf;

/// Source of the closed set of valid guess words
pub trait VocabularyProvider {
    /// Load the vocabulary
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the underlying source cannot be read.
    fn load(&self) -> io::Result<Vocabulary>;
}

/// Source of the target word, consulted once per session
pub trait SecretProvider {
    /// Draw the secret for the next round
    fn choose(&mut self) -> Word;
}

/// Vocabulary read from a newline-delimited word list file
#[derive(Debug, Clone)]
pub struct FileVocabulary {
    path: PathBuf,
}

impl FileVocabulary {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VocabularyProvider for FileVocabulary {
    fn load(&self) -> io::Result<Vocabulary> {
        load_from_file(&self.path)
    }
}

/// The compiled-in default vocabulary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedVocabulary;

impl VocabularyProvider for EmbeddedVocabulary {
    fn load(&self) -> io::Result<Vocabulary> {
        Ok(vocabulary_from_slice(DEFAULT_WORDS))
    }
}

/// Deterministic secret source: always the same word
///
/// Useful for reproducible simulation runs and tests; the word need not be a
/// vocabulary member.
#[derive(Debug, Clone)]
pub struct FixedSecret {
    word: Word,
}

impl FixedSecret {
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self { word }
    }
}

impl SecretProvider for FixedSecret {
    fn choose(&mut self) -> Word {
        self.word.clone()
    }
}

/// Uniform random draw from an answer pool
///
/// The generator is taken per call, so clones of this provider stay
/// independent across worker threads.
#[derive(Debug, Clone)]
pub struct RandomSecret {
    pool: Vec<Word>,
}

impl RandomSecret {
    /// Build from a non-empty answer pool
    ///
    /// Returns `None` when the pool is empty.
    #[must_use]
    pub fn from_pool(pool: Vec<Word>) -> Option<Self> {
        if pool.is_empty() {
            None
        } else {
            Some(Self { pool })
        }
    }

    /// Build from a vocabulary's word list
    #[must_use]
    pub fn from_vocabulary(vocabulary: &Vocabulary) -> Option<Self> {
        Self::from_pool(vocabulary.words().to_vec())
    }
}

impl SecretProvider for RandomSecret {
    fn choose(&mut self) -> Word {
        let index = rand::rng().random_range(0..self.pool.len());
        self.pool[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_vocabulary_loads() {
        let vocabulary = EmbeddedVocabulary.load().unwrap();
        assert_eq!(vocabulary.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn fixed_secret_is_deterministic() {
        let mut provider = FixedSecret::new(Word::new("axiom").unwrap());
        assert_eq!(provider.choose().text(), "axiom");
        assert_eq!(provider.choose().text(), "axiom");
    }

    #[test]
    fn random_secret_draws_from_pool() {
        let vocabulary = vocabulary_from_slice(&["axiom", "major", "argon"]);
        let mut provider = RandomSecret::from_vocabulary(&vocabulary).unwrap();

        for _ in 0..20 {
            let secret = provider.choose();
            assert!(vocabulary.contains(&secret));
        }
    }

    #[test]
    fn random_secret_rejects_empty_pool() {
        assert!(RandomSecret::from_pool(Vec::new()).is_none());
    }

    #[test]
    fn file_vocabulary_missing_file_errors() {
        let provider = FileVocabulary::new("/definitely/not/a/wordlist.txt");
        assert!(provider.load().is_err());
    }
}
