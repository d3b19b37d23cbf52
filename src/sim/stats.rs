//! Aggregate statistics over simulated rounds

use super::{RoundOutcome, RoundResult};
use std::collections::HashMap;
use std::time::Duration;

/// Statistics collected from a batch of round results
#[derive(Debug)]
pub struct SimStatistics {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub invalid: usize,
    pub win_rate: f64,
    /// Mean guesses among winning rounds only
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Winning guess count -> number of rounds
    pub distribution: HashMap<usize, usize>,
    pub total_elapsed: Duration,
}

impl SimStatistics {
    /// Aggregate a batch of round results
    #[must_use]
    pub fn collect(results: &[RoundResult]) -> Self {
        let rounds = results.len();
        let wins = results.iter().filter(|r| r.won()).count();
        let losses = results
            .iter()
            .filter(|r| r.outcome == RoundOutcome::Lost)
            .count();
        let invalid = results
            .iter()
            .filter(|r| r.outcome == RoundOutcome::Invalid)
            .count();

        let mut distribution: HashMap<usize, usize> = HashMap::new();
        for result in results.iter().filter(|r| r.won()) {
            *distribution.entry(result.guess_count).or_insert(0) += 1;
        }

        let winning_counts = || results.iter().filter(|r| r.won()).map(|r| r.guess_count);
        let total_winning_guesses: usize = winning_counts().sum();
        let average_guesses = if wins > 0 {
            total_winning_guesses as f64 / wins as f64
        } else {
            0.0
        };

        Self {
            rounds,
            wins,
            losses,
            invalid,
            win_rate: if rounds > 0 {
                wins as f64 / rounds as f64
            } else {
                0.0
            },
            average_guesses,
            min_guesses: winning_counts().min().unwrap_or(0),
            max_guesses: winning_counts().max().unwrap_or(0),
            distribution,
            total_elapsed: results.iter().map(|r| r.elapsed).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::GameRules;
    use crate::sim::Simulator;
    use crate::solver::FirstCandidate;
    use crate::words::loader::vocabulary_from_slice;
    use crate::words::FixedSecret;

    fn winning_batch(n: usize) -> Vec<RoundResult> {
        let vocabulary = vocabulary_from_slice(&["major", "argon", "axiom"]);
        let secrets = FixedSecret::new(Word::new("axiom").unwrap());
        let mut simulator = Simulator::new(&vocabulary, secrets, GameRules::default());
        let mut solver = FirstCandidate::new();
        simulator.run_many(n, &mut solver)
    }

    #[test]
    fn collect_counts_wins() {
        let stats = SimStatistics::collect(&winning_batch(10));

        assert_eq!(stats.rounds, 10);
        assert_eq!(stats.wins, 10);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.invalid, 0);
        assert!((stats.win_rate - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn collect_distribution_sums_to_wins() {
        let stats = SimStatistics::collect(&winning_batch(10));
        let total: usize = stats.distribution.values().sum();
        assert_eq!(total, stats.wins);
    }

    #[test]
    fn collect_average_between_min_and_max() {
        let stats = SimStatistics::collect(&winning_batch(10));
        assert!(stats.average_guesses >= stats.min_guesses as f64);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
        assert!(stats.max_guesses <= 6);
    }

    #[test]
    fn collect_empty_batch() {
        let stats = SimStatistics::collect(&[]);
        assert_eq!(stats.rounds, 0);
        assert_eq!(stats.wins, 0);
        assert!(stats.win_rate.abs() < f64::EPSILON);
        assert!(stats.average_guesses.abs() < f64::EPSILON);
    }
}
