//! Simulation mode
//!
//! Resolves a solver by name, drives the requested number of rounds, and
//! aggregates the results.

use crate::session::{GameError, GameRules};
use crate::sim::{run_many_parallel, RoundResult, SimStatistics, Simulator};
use crate::solver::SolverType;
use crate::words::{SecretProvider, Vocabulary};
use indicatif::{ProgressBar, ProgressStyle};

/// Configuration for a simulation run
pub struct SimulateConfig {
    /// Number of independent rounds
    pub trials: usize,
    /// Solver name, resolved through [`SolverType::from_name`]
    pub solver: String,
    /// Fan rounds out across worker threads
    pub parallel: bool,
}

/// Run a batch of simulated rounds and collect statistics
///
/// # Errors
///
/// Returns [`GameError::NoSolverConfigured`] when the solver name is not
/// recognized; simulation without a solver is a configuration error, not
/// something to paper over with a default.
pub fn run_simulate<P>(
    vocabulary: &Vocabulary,
    secrets: P,
    rules: GameRules,
    config: &SimulateConfig,
) -> Result<SimStatistics, GameError>
where
    P: SecretProvider + Clone + Send + Sync,
{
    let mut solver =
        SolverType::from_name(&config.solver).ok_or(GameError::NoSolverConfigured)?;

    println!(
        "Running {} rounds with the '{}' solver{}...",
        config.trials,
        config.solver,
        if config.parallel { " in parallel" } else { "" }
    );

    let results: Vec<RoundResult> = if config.parallel {
        run_many_parallel(vocabulary, &secrets, rules, config.trials, &solver)
    } else {
        let progress = ProgressBar::new(config.trials as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );

        let mut simulator = Simulator::new(vocabulary, secrets, rules);
        let results = (0..config.trials)
            .map(|_| {
                let result = simulator.run_one(&mut solver);
                progress.inc(1);
                result
            })
            .collect();
        progress.finish_and_clear();
        results
    };

    Ok(SimStatistics::collect(&results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::words::loader::vocabulary_from_slice;
    use crate::words::FixedSecret;

    fn config(solver: &str, parallel: bool) -> SimulateConfig {
        SimulateConfig {
            trials: 4,
            solver: solver.to_string(),
            parallel,
        }
    }

    #[test]
    fn unknown_solver_is_a_configuration_error() {
        let vocabulary = vocabulary_from_slice(&["axiom", "major"]);
        let secrets = FixedSecret::new(Word::new("axiom").unwrap());

        let result = run_simulate(
            &vocabulary,
            secrets,
            GameRules::default(),
            &config("entropy", false),
        );
        assert!(matches!(result, Err(GameError::NoSolverConfigured)));
    }

    #[test]
    fn sequential_and_parallel_agree_on_fixed_secret() {
        let vocabulary = vocabulary_from_slice(&["major", "argon", "axiom"]);
        let secrets = FixedSecret::new(Word::new("axiom").unwrap());

        let sequential = run_simulate(
            &vocabulary,
            secrets.clone(),
            GameRules::default(),
            &config("first", false),
        )
        .unwrap();
        let parallel = run_simulate(
            &vocabulary,
            secrets,
            GameRules::default(),
            &config("first", true),
        )
        .unwrap();

        assert_eq!(sequential.wins, 4);
        assert_eq!(parallel.wins, 4);
        assert_eq!(sequential.average_guesses, parallel.average_guesses);
    }
}
