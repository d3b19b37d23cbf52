//! Baseline solver implementations

use super::Solver;
use crate::core::{Feedback, Knowledge, Word};
use crate::session::GuessRecord;
use crate::words::Vocabulary;
use rand::prelude::IndexedRandom;

/// First remaining consistent candidate
///
/// Keeps a candidate pool narrowed against the observed history: a word stays
/// in the pool only if, were it the secret, every past guess would have
/// earned exactly the feedback it got. Proposes the first survivor, which
/// converges on the secret whenever the secret is in the vocabulary.
#[derive(Debug, Clone, Default)]
pub struct FirstCandidate {
    pool: Vec<Word>,
    absorbed: usize,
}

impl FirstCandidate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidates still consistent with everything observed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }
}

impl Solver for FirstCandidate {
    fn next_guess(
        &mut self,
        history: &[GuessRecord],
        _knowledge: &Knowledge,
        vocabulary: &Vocabulary,
    ) -> Option<Word> {
        if self.absorbed == 0 && self.pool.is_empty() {
            self.pool = vocabulary.words().to_vec();
        }

        // Prune by only the records seen since the last call
        for record in &history[self.absorbed..] {
            self.pool
                .retain(|candidate| Feedback::classify(candidate, &record.guess) == record.feedback);
        }
        self.absorbed = history.len();

        self.pool.first().cloned()
    }

    fn reset(&mut self) {
        self.pool.clear();
        self.absorbed = 0;
    }
}

/// Uniform random choice among knowledge-admitted words
///
/// Filters the vocabulary through the accumulated knowledge each turn and
/// draws uniformly. Holds no cross-turn state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCandidate;

impl Solver for RandomCandidate {
    fn next_guess(
        &mut self,
        _history: &[GuessRecord],
        knowledge: &Knowledge,
        vocabulary: &Vocabulary,
    ) -> Option<Word> {
        let admitted: Vec<&Word> = vocabulary
            .words()
            .iter()
            .filter(|word| knowledge.admits(word))
            .collect();

        admitted.choose(&mut rand::rng()).map(|&word| word.clone())
    }

    fn reset(&mut self) {}
}
