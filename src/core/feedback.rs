//! Per-letter feedback classification
//!
//! Classifies a guess against the secret using the standard Wordle rules,
//! including duplicate-letter handling: a letter in the guess is only marked
//! Present while the secret has unconsumed copies of it, so a secret with one
//! B never yields two Present Bs.

use super::word::Word;
use super::WORD_LENGTH;
use std::fmt;

/// Classification of a single guess letter against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    /// Letter is in the correct position (green)
    Correct,
    /// Letter is in the secret but at a different position (yellow)
    Present,
    /// Letter is not in the secret, or all its copies are accounted for (red)
    Absent,
}

/// Feedback for one guess: an ordered per-letter classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterScore; WORD_LENGTH]);

impl Feedback {
    /// All letters correct (winning feedback)
    pub const WIN: Self = Self([LetterScore::Correct; WORD_LENGTH]);

    /// Classify `guess` against `secret`
    ///
    /// Two passes over a remaining-count table built from the secret's letter
    /// multiset:
    /// 1. Exact position matches become `Correct` and consume a copy.
    /// 2. Remaining positions become `Present` while copies are left,
    ///    otherwise `Absent`.
    ///
    /// The function is total over equal-length words; there is no error case.
    ///
    /// # Examples
    /// ```
    /// use wordle_arena::core::{Feedback, LetterScore, Word};
    ///
    /// let secret = Word::new("abide").unwrap();
    /// let guess = Word::new("abbey").unwrap();
    /// let feedback = Feedback::classify(&secret, &guess);
    ///
    /// // The secret has one B, consumed by the positional match; the second
    /// // B in the guess must come out Absent.
    /// assert_eq!(feedback.score_at(1), LetterScore::Correct);
    /// assert_eq!(feedback.score_at(2), LetterScore::Absent);
    /// ```
    #[must_use]
    pub fn classify(secret: &Word, guess: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LENGTH];
        let mut remaining = secret.letter_counts();

        // First pass: exact matches consume their letter
        for i in 0..WORD_LENGTH {
            if guess.letter_at(i) == secret.letter_at(i) {
                scores[i] = LetterScore::Correct;
                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, only while copies remain
        for i in 0..WORD_LENGTH {
            if scores[i] != LetterScore::Correct {
                let letter = guess.letter_at(i);
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    scores[i] = LetterScore::Present;
                    *count -= 1;
                }
            }
        }

        Self(scores)
    }

    /// The per-letter scores, in guess order
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Score at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn score_at(&self, position: usize) -> LetterScore {
        self.0[position]
    }

    /// Check whether every letter was correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Number of `Correct` classifications
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Correct)
            .count()
    }

    /// Number of `Present` classifications
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Present)
            .count()
    }
}

impl fmt::Display for Feedback {
    /// Compact form: `G` correct, `Y` present, `-` absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for score in &self.0 {
            let c = match score {
                LetterScore::Correct => 'G',
                LetterScore::Present => 'Y',
                LetterScore::Absent => '-',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
