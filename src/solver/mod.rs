//! Solver contract and baseline strategies
//!
//! A [`Solver`] proposes guesses from everything a session has learned. The
//! simulator accepts any implementation; the session still validates every
//! proposal independently.

mod baseline;

pub use baseline::{FirstCandidate, RandomCandidate};

use crate::core::{Knowledge, Word};
use crate::session::GuessRecord;
use crate::words::Vocabulary;

/// A pluggable guessing strategy
pub trait Solver {
    /// Propose the next guess given everything learned so far
    ///
    /// Returns `None` when the strategy has no candidate left to offer; the
    /// simulator treats that as an aborted round rather than looping.
    fn next_guess(
        &mut self,
        history: &[GuessRecord],
        knowledge: &Knowledge,
        vocabulary: &Vocabulary,
    ) -> Option<Word>;

    /// Clear any internal state before a new round
    ///
    /// Called by the simulator between rounds, since one solver instance is
    /// reused across many independent sessions.
    fn reset(&mut self);
}

/// Enum wrapper over the shipped solver implementations
///
/// Allows runtime selection by name while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum SolverType {
    /// First remaining consistent candidate (default baseline)
    First(FirstCandidate),
    /// Uniform random choice among knowledge-admitted words
    Random(RandomCandidate),
}

impl Solver for SolverType {
    fn next_guess(
        &mut self,
        history: &[GuessRecord],
        knowledge: &Knowledge,
        vocabulary: &Vocabulary,
    ) -> Option<Word> {
        match self {
            Self::First(s) => s.next_guess(history, knowledge, vocabulary),
            Self::Random(s) => s.next_guess(history, knowledge, vocabulary),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::First(s) => s.reset(),
            Self::Random(s) => s.reset(),
        }
    }
}

impl SolverType {
    /// Look up a solver by name
    ///
    /// Supported names: "first", "random". Returns `None` for anything else;
    /// the simulation boundary maps that to a configuration error rather
    /// than silently substituting a default.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" => Some(Self::First(FirstCandidate::new())),
            "random" => Some(Self::Random(RandomCandidate)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_resolves_known_solvers() {
        assert!(matches!(
            SolverType::from_name("first"),
            Some(SolverType::First(_))
        ));
        assert!(matches!(
            SolverType::from_name("random"),
            Some(SolverType::Random(_))
        ));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert!(SolverType::from_name("entropy").is_none());
        assert!(SolverType::from_name("").is_none());
    }
}
