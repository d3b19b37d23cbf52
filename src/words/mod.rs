//! Vocabulary and secret-word sources
//!
//! The engine only ever sees a [`Vocabulary`] (the closed set of valid
//! guesses) and a secret [`Word`]; where those come from is behind the
//! [`VocabularyProvider`] and [`SecretProvider`] traits.

mod embedded;
pub mod loader;
mod providers;

pub use embedded::{DEFAULT_WORD_COUNT, DEFAULT_WORDS};
pub use providers::{
    EmbeddedVocabulary, FileVocabulary, FixedSecret, RandomSecret, SecretProvider,
    VocabularyProvider,
};

use crate::core::Word;
use rustc_hash::FxHashSet;

/// An immutable set of equal-length, normalized guess words
///
/// Backed by an ordered list for solver iteration and a hash index for
/// membership testing. Duplicates are dropped at construction, first
/// occurrence wins.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from already-validated words
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let mut unique = Vec::with_capacity(words.len());
        for word in words {
            if index.insert(word.text().to_string()) {
                unique.push(word);
            }
        }
        Self {
            words: unique,
            index,
        }
    }

    /// Membership test for a word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    /// The words in their original order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
