//! Simulation harness
//!
//! Drives sessions to completion without human input. Each round gets a
//! fresh session and a freshly drawn secret; the solver is reset between
//! rounds, so nothing leaks from one round to the next.

mod stats;

pub use stats::SimStatistics;

use crate::core::Word;
use crate::session::{GameRules, GuessRecord, Outcome, Session};
use crate::solver::Solver;
use crate::words::{SecretProvider, Vocabulary};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// How a simulated round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Solver guessed the secret within the attempt budget
    Won,
    /// Attempt budget exhausted
    Lost,
    /// Solver proposed nothing or an invalid guess; round aborted early
    Invalid,
}

/// Aggregate result of one simulated round
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    pub guess_count: usize,
    pub transcript: Vec<GuessRecord>,
    pub secret: Word,
    pub elapsed: Duration,
}

impl RoundResult {
    /// Whether the round was won
    #[inline]
    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == RoundOutcome::Won
    }
}

/// Drives rounds of play against a secret provider
pub struct Simulator<'a, P: SecretProvider> {
    vocabulary: &'a Vocabulary,
    secrets: P,
    rules: GameRules,
}

impl<'a, P: SecretProvider> Simulator<'a, P> {
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary, secrets: P, rules: GameRules) -> Self {
        Self {
            vocabulary,
            secrets,
            rules,
        }
    }

    /// Run a single round to completion
    ///
    /// Resets the solver, then alternates propose/validate/advance until the
    /// session is terminal. A `None` proposal or a proposal that fails
    /// validation aborts the round as [`RoundOutcome::Invalid`] rather than
    /// looping forever.
    pub fn run_one<S: Solver + ?Sized>(&mut self, solver: &mut S) -> RoundResult {
        let secret = self.secrets.choose();
        let mut session = Session::new(self.vocabulary, secret, self.rules);
        solver.reset();

        let start = Instant::now();
        let outcome = loop {
            let proposal =
                solver.next_guess(session.transcript(), session.knowledge(), self.vocabulary);

            let Some(proposal) = proposal else {
                break RoundOutcome::Invalid;
            };
            let Ok(guess) = session.validate_guess(proposal.text()) else {
                break RoundOutcome::Invalid;
            };
            if session.advance(guess).is_err() {
                break RoundOutcome::Invalid;
            }

            match session.outcome() {
                Some(Outcome::Won) => break RoundOutcome::Won,
                Some(Outcome::Lost) => break RoundOutcome::Lost,
                None => {}
            }
        };
        let elapsed = start.elapsed();

        let guess_count = session.transcript().len();
        let secret = session.secret().clone();
        RoundResult {
            outcome,
            guess_count,
            transcript: session.into_transcript(),
            secret,
            elapsed,
        }
    }

    /// Run `n` independent rounds with the same solver instance
    pub fn run_many<S: Solver + ?Sized>(&mut self, n: usize, solver: &mut S) -> Vec<RoundResult> {
        (0..n).map(|_| self.run_one(solver)).collect()
    }
}

/// Run `n` independent rounds across worker threads
///
/// Rounds share no mutable state: the vocabulary is read-only, and every
/// round clones its own solver and secret provider. Results come back in
/// round order.
pub fn run_many_parallel<P, S>(
    vocabulary: &Vocabulary,
    secrets: &P,
    rules: GameRules,
    n: usize,
    solver: &S,
) -> Vec<RoundResult>
where
    P: SecretProvider + Clone + Send + Sync,
    S: Solver + Clone + Send + Sync,
{
    (0..n)
        .into_par_iter()
        .map(|_| {
            let mut solver = solver.clone();
            let mut simulator = Simulator::new(vocabulary, secrets.clone(), rules);
            simulator.run_one(&mut solver)
        })
        .collect()
}
